// src/lib.rs
pub mod error;
pub mod types;
pub mod fasta;
pub mod fastq;
pub mod hmm;
pub mod records;
pub mod rotator;

use std::io::Write;

pub use crate::error::{Result, SplitError};
pub use crate::types::{SeqFormat, SeqRecord, SplitParameters, SplitReport, SummaryEntry};

use crate::records::RecordReader;
use crate::rotator::FileRotator;

/// Split `params.input` into numbered files of at most `params.threshold`
/// records (or residues), writing one summary row per file to `summary`.
///
/// The format is inferred from the input suffix before anything is opened,
/// so an unrecognized suffix leaves no files behind.
pub fn split_reads<W: Write>(params: &SplitParameters, summary: W) -> Result<SplitReport> {
    // 1. Validate before touching the filesystem
    let format = SeqFormat::from_path(&params.input)?;
    if params.threshold == 0 {
        return Err(SplitError::InvalidThreshold);
    }

    log::info!("Input file is {}", params.input.display());
    log::info!("Output prefix is {}", params.prefix.display());
    log::info!("Number of records in each file: {}", params.threshold);
    if params.count_residues {
        log::info!("Counting bps/aas/residues instead of number of records");
    }

    // 2. Stream records into the rotator
    let reader = RecordReader::from_path(&params.input, format)?;
    let mut rotator = FileRotator::new(
        &params.prefix,
        format,
        params.threshold,
        params.count_residues,
        summary,
    )?;

    let mut total_records = 0;
    let mut total_length = 0;
    for record in reader {
        let record = record?;
        total_records += 1;
        total_length += record.length as u64;
        rotator.push(&record)?;
    }

    // 3. Close the last file
    let entries = rotator.finish()?;
    log::info!(
        "Wrote {} records into {} file(s)",
        total_records,
        entries.len()
    );

    Ok(SplitReport {
        entries,
        total_records,
        total_length,
    })
}
