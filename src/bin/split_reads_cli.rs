use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use fastx_split::{split_reads, SeqFormat, SplitError, SplitParameters};

/// Split big sequence file in fasta/fastq/hmm format into small ones
#[derive(Debug, Parser)]
#[command(name = "split-reads", version)]
struct Args {
    /// Input sequence file (.fa/.faa/.fna/.fasta, .fq/.fastq or .hmm)
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    input: PathBuf,

    /// Output prefix [default: input path without its extension]
    #[arg(short = 'o', long = "out", value_name = "PREFIX")]
    prefix: Option<PathBuf>,

    /// Summary file [default: stdout]
    #[arg(short = 's', long = "summary", value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Number of sequences per file
    #[arg(
        short = 'c',
        long = "count",
        value_name = "INT",
        default_value_t = SplitParameters::DEFAULT_THRESHOLD,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    count: u64,

    /// Instead of equal number of sequences, do equal number of bps/aas/residues
    #[arg(long = "bpcount", visible_alias = "bp")]
    bpcount: bool,

    /// Verbose, more output
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn params(&self) -> SplitParameters {
        let mut params = SplitParameters::new(&self.input);
        if let Some(prefix) = &self.prefix {
            params.prefix = prefix.clone();
        }
        params.threshold = self.count;
        params.count_residues = self.bpcount;
        params
    }

    fn summary_writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match &self.summary {
            Some(path) => Box::new(BufWriter::new(File::create(path)?)),
            None => Box::new(io::stdout().lock()),
        })
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    let start_time = Instant::now();
    let params = args.params();

    let spinner = if args.verbose {
        ProgressBar::new_spinner()
    } else {
        ProgressBar::hidden()
    };
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Splitting {}...", params.input.display()));

    // Reject unknown formats before the summary file is created
    let result = SeqFormat::from_path(&params.input)
        .and_then(|_| args.summary_writer().map_err(SplitError::from))
        .and_then(|summary| split_reads(&params, summary));

    match result {
        Ok(report) => {
            spinner.finish_with_message(format!(
                "Wrote {} file(s) from {} records.",
                report.file_count(),
                report.total_records
            ));
        }
        Err(e) => {
            spinner.abandon();
            log::error!("{}", e);
            process::exit(1);
        }
    }

    log::info!(
        "Total time: {:.3} seconds",
        start_time.elapsed().as_secs_f64()
    );
}
