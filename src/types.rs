//src/types.rs

use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};

/// The three flat text formats the splitter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqFormat {
    Fasta,
    Fastq,
    Hmm,
}

impl SeqFormat {
    /// Infer the format from the last dot-delimited suffix of `path`.
    ///
    /// Recognized suffixes (any case):
    /// ```text
    /// fa faa fna fasta  => Fasta
    /// fq fastq          => Fastq
    /// hmm               => Hmm
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let suffix = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match suffix.as_str() {
            "fa" | "faa" | "fna" | "fasta" => Ok(SeqFormat::Fasta),
            "fq" | "fastq" => Ok(SeqFormat::Fastq),
            "hmm" => Ok(SeqFormat::Hmm),
            _ => Err(SplitError::UnrecognizedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Extension used for the numbered output files.
    pub fn extension(&self) -> &'static str {
        match self {
            SeqFormat::Fasta => "fasta",
            SeqFormat::Fastq => "fastq",
            SeqFormat::Hmm => "hmm",
        }
    }
}

/// One raw record, exactly as it appeared in the input, plus its length
/// (residues for FASTA/FASTQ, declared `LENG` for HMM).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    pub text: Vec<u8>,
    pub length: usize,
}

/// One row of the summary report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub file_name: PathBuf,
    pub max_len: usize,
    pub min_len: usize,
    pub records: u64,
}

/// Settings for a single split run.
#[derive(Debug, Clone)]
pub struct SplitParameters {
    /// File to split.
    pub input: PathBuf,
    /// Output files are named `{prefix}{index}.{extension}`.
    pub prefix: PathBuf,
    /// Capacity of one output file, in records or residues.
    pub threshold: u64,
    /// Fill files by summed record length instead of record count.
    pub count_residues: bool,
}

impl SplitParameters {
    pub const DEFAULT_THRESHOLD: u64 = 10000;

    /// Parameters with the default threshold and the prefix derived from
    /// the input path (last extension removed).
    pub fn new<P: AsRef<Path>>(input: P) -> Self {
        let input = input.as_ref().to_path_buf();
        let prefix = default_prefix(&input);
        SplitParameters {
            input,
            prefix,
            threshold: Self::DEFAULT_THRESHOLD,
            count_residues: false,
        }
    }
}

/// `reads/sample.fq` => `reads/sample`
pub fn default_prefix(input: &Path) -> PathBuf {
    input.with_extension("")
}

/// What a finished run produced.
#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    /// Summary rows in file creation order.
    pub entries: Vec<SummaryEntry>,
    pub total_records: u64,
    pub total_length: u64,
}

impl SplitReport {
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }
}

/// Length of a raw line without its `\n` or `\r\n` terminator.
pub(crate) fn line_len(line: &[u8]) -> usize {
    let mut end = line.len();
    if end > 0 && line[end - 1] == b'\n' {
        end -= 1;
    }
    if end > 0 && line[end - 1] == b'\r' {
        end -= 1;
    }
    end
}
