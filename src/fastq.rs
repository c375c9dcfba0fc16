//src/fastq.rs

use std::io::BufRead;

use crate::error::Result;
use crate::types::{line_len, SeqRecord};

/// Lines per FASTQ record: header, sequence, plus line, quality.
pub const FASTQ_LINES: usize = 4;

/// Lazy FASTQ record reader.
///
/// Lines are grouped strictly in fours without checking the `@` / `+`
/// markers. A trailing group of fewer than four lines is still yielded.
pub struct FastqRecords<R: BufRead> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> FastqRecords<R> {
    pub fn new(reader: R) -> Self {
        FastqRecords {
            reader,
            finished: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<SeqRecord>> {
        if self.finished {
            return Ok(None);
        }

        let mut text = Vec::new();
        let mut length = 0;
        for i in 0..FASTQ_LINES {
            let start = text.len();
            if self.reader.read_until(b'\n', &mut text)? == 0 {
                self.finished = true;
                break;
            }
            // 2) sequence line
            if i == 1 {
                length = line_len(&text[start..]);
            }
        }

        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(SeqRecord { text, length }))
    }
}

impl<R: BufRead> Iterator for FastqRecords<R> {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
