//src/rotator.rs

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{SeqFormat, SeqRecord, SummaryEntry};

/// Header row of the summary stream.
pub const SUMMARY_HEADER: &str = "file_name\tmax_len\tmin_len";

/// `{prefix}{index}.{extension}`, index not zero-padded.
pub fn output_file_name(prefix: &Path, index: usize, format: SeqFormat) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(format!("{}.{}", index, format.extension()));
    PathBuf::from(name)
}

/// The output file currently being filled.
struct OutputFile {
    path: PathBuf,
    writer: BufWriter<File>,
    /// Records, or residues in residue-count mode.
    counter: u64,
    records: u64,
    min_len: usize,
    max_len: usize,
}

impl OutputFile {
    fn create(path: PathBuf) -> Result<Self> {
        let writer = BufWriter::new(File::create(&path)?);
        Ok(OutputFile {
            path,
            writer,
            counter: 0,
            records: 0,
            min_len: usize::MAX,
            max_len: 0,
        })
    }

    fn close(mut self) -> Result<SummaryEntry> {
        self.writer.flush()?;
        Ok(SummaryEntry {
            file_name: self.path,
            max_len: self.max_len,
            min_len: self.min_len,
            records: self.records,
        })
    }
}

/// Writes records into numbered output files, opening the next file once
/// the current one reaches the threshold, and reports one summary row per
/// finished file.
pub struct FileRotator<W: Write> {
    prefix: PathBuf,
    format: SeqFormat,
    threshold: u64,
    count_residues: bool,
    file_index: usize,
    current: OutputFile,
    summary: W,
    entries: Vec<SummaryEntry>,
}

impl<W: Write> FileRotator<W> {
    /// Write the summary header and create the first output file.
    pub fn new(
        prefix: &Path,
        format: SeqFormat,
        threshold: u64,
        count_residues: bool,
        mut summary: W,
    ) -> Result<Self> {
        writeln!(summary, "{}", SUMMARY_HEADER)?;
        let current = OutputFile::create(output_file_name(prefix, 1, format))?;
        Ok(FileRotator {
            prefix: prefix.to_path_buf(),
            format,
            threshold,
            count_residues,
            file_index: 1,
            current,
            summary,
            entries: Vec::new(),
        })
    }

    /// Append one record verbatim, rotating afterwards if the file is full.
    pub fn push(&mut self, record: &SeqRecord) -> Result<()> {
        let file = &mut self.current;
        file.writer.write_all(&record.text)?;
        file.records += 1;
        file.min_len = file.min_len.min(record.length);
        file.max_len = file.max_len.max(record.length);
        file.counter += if self.count_residues {
            record.length as u64
        } else {
            1
        };

        if file.counter >= self.threshold {
            self.rotate()?;
        }
        Ok(())
    }

    fn rotate(&mut self) -> Result<()> {
        self.file_index += 1;
        let next = OutputFile::create(output_file_name(&self.prefix, self.file_index, self.format))?;
        let full = std::mem::replace(&mut self.current, next);
        Self::finalize(&mut self.summary, &mut self.entries, full)
    }

    fn finalize(summary: &mut W, entries: &mut Vec<SummaryEntry>, file: OutputFile) -> Result<()> {
        let entry = file.close()?;
        writeln!(
            summary,
            "{}\t{}\t{}",
            entry.file_name.display(),
            entry.max_len,
            entry.min_len
        )?;
        log::debug!(
            "Finished {} ({} records, length {}..{})",
            entry.file_name.display(),
            entry.records,
            entry.min_len,
            entry.max_len
        );
        entries.push(entry);
        Ok(())
    }

    /// Close the last file. A file that received no records is deleted
    /// without a summary row.
    pub fn finish(self) -> Result<Vec<SummaryEntry>> {
        let FileRotator {
            current,
            mut summary,
            mut entries,
            ..
        } = self;

        if current.records > 0 {
            Self::finalize(&mut summary, &mut entries, current)?;
        } else {
            let path = current.path.clone();
            drop(current);
            fs::remove_file(&path)?;
            log::debug!("Removed empty trailing file {}", path.display());
        }
        summary.flush()?;
        Ok(entries)
    }

    /// Index of the file currently open for writing.
    pub fn file_index(&self) -> usize {
        self.file_index
    }
}
