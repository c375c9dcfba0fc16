//src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the splitter.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Everything that can abort a split run.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input suffix does not name a FASTA, FASTQ or HMM file.
    #[error("File type is not correct: cannot infer format of {}", path.display())]
    UnrecognizedFormat { path: PathBuf },

    /// A `LENG` line in an HMM profile did not hold an integer.
    #[error("Invalid LENG value '{value}' at line {line}")]
    InvalidLength { line: usize, value: String },

    /// A threshold of zero would never fill a file.
    #[error("Threshold must be at least 1")]
    InvalidThreshold,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
