//src/fasta.rs

use std::io::BufRead;

use crate::error::Result;
use crate::types::{line_len, SeqRecord};

/// Lazy FASTA record reader.
///
/// A record starts at every line beginning with `>` and runs until the next
/// one. Lines that are blank after trimming are dropped. Anything before the
/// first header is yielded as its own record.
pub struct FastaRecords<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    /// Record being accumulated.
    buffer: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        FastaRecords {
            reader,
            line: Vec::new(),
            buffer: Vec::new(),
            finished: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<SeqRecord>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                // EOF: flush what is left
                self.finished = true;
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                let text = std::mem::take(&mut self.buffer);
                return Ok(Some(make_record(text)));
            }

            if self.line.trim_ascii().is_empty() {
                continue;
            }

            if self.line[0] != b'>' {
                self.buffer.extend_from_slice(&self.line);
            } else if self.buffer.is_empty() {
                self.buffer.extend_from_slice(&self.line);
            } else {
                let text = std::mem::replace(&mut self.buffer, self.line.clone());
                return Ok(Some(make_record(text)));
            }
        }
    }
}

/// Residue count: every line after the first, without line terminators.
fn make_record(text: Vec<u8>) -> SeqRecord {
    let length = text
        .split_inclusive(|&b| b == b'\n')
        .skip(1)
        .map(line_len)
        .sum();
    SeqRecord { text, length }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
