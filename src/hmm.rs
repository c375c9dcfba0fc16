//src/hmm.rs

use std::io::BufRead;

use crate::error::{Result, SplitError};
use crate::types::{line_len, SeqRecord};

/// Line that closes a profile block.
pub const HMM_TERMINATOR: &[u8] = b"//";

/// Tag of the line declaring the model length, e.g. `LENG  245`.
pub const HMM_LENGTH_TAG: &[u8] = b"LENG";

/// Lazy reader over HMM profile blocks.
///
/// Each block runs up to and including a `//` line. The record length is the
/// value of the first `LENG` line in the block, or 0 when the block has none.
/// Unterminated content at the end of the stream is yielded as a last block.
pub struct HmmRecords<R: BufRead> {
    reader: R,
    line: Vec<u8>,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> HmmRecords<R> {
    pub fn new(reader: R) -> Self {
        HmmRecords {
            reader,
            line: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    fn read_record(&mut self) -> Result<Option<SeqRecord>> {
        if self.finished {
            return Ok(None);
        }

        let mut text = Vec::new();
        let mut length: Option<usize> = None;
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                self.finished = true;
                if text.is_empty() {
                    return Ok(None);
                }
                break;
            }
            self.line_number += 1;
            text.extend_from_slice(&self.line);

            let content = &self.line[..line_len(&self.line)];
            if length.is_none() && content.starts_with(HMM_LENGTH_TAG) {
                length = Some(parse_length(content, self.line_number)?);
            } else if content == HMM_TERMINATOR {
                break;
            }
        }

        Ok(Some(SeqRecord {
            text,
            length: length.unwrap_or(0),
        }))
    }
}

fn parse_length(content: &[u8], line_number: usize) -> Result<usize> {
    let value = String::from_utf8_lossy(&content[HMM_LENGTH_TAG.len()..]);
    let value = value.trim();
    value.parse().map_err(|_| SplitError::InvalidLength {
        line: line_number,
        value: value.to_string(),
    })
}

impl<R: BufRead> Iterator for HmmRecords<R> {
    type Item = Result<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}
