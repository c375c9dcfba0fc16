//src/records.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::fasta::FastaRecords;
use crate::fastq::FastqRecords;
use crate::hmm::HmmRecords;
use crate::types::{SeqFormat, SeqRecord};

/// Record reader for any supported format.
pub enum RecordReader<R: BufRead> {
    Fasta(FastaRecords<R>),
    Fastq(FastqRecords<R>),
    Hmm(HmmRecords<R>),
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R, format: SeqFormat) -> Self {
        match format {
            SeqFormat::Fasta => RecordReader::Fasta(FastaRecords::new(reader)),
            SeqFormat::Fastq => RecordReader::Fastq(FastqRecords::new(reader)),
            SeqFormat::Hmm => RecordReader::Hmm(HmmRecords::new(reader)),
        }
    }
}

impl RecordReader<BufReader<File>> {
    /// Open `path` for reading records of the given format.
    pub fn from_path<P: AsRef<Path>>(path: P, format: SeqFormat) -> Result<Self> {
        let f = File::open(path)?;
        Ok(RecordReader::new(BufReader::new(f), format))
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            RecordReader::Fasta(records) => records.next(),
            RecordReader::Fastq(records) => records.next(),
            RecordReader::Hmm(records) => records.next(),
        }
    }
}
