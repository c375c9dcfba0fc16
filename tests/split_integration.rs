//! Integration tests for splitting whole files on disk.

use fastx_split::{split_reads, SplitError, SplitParameters};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn fasta_records(n: usize) -> String {
    let mut text = String::new();
    for i in 0..n {
        // Record i has i+1 residues, wrapped at 4
        let seq = "ACGT".repeat(i / 4 + 1);
        text.push_str(&format!(">read{}\n", i));
        for chunk in seq.as_bytes()[..i + 1].chunks(4) {
            text.push_str(std::str::from_utf8(chunk).unwrap());
            text.push('\n');
        }
    }
    text
}

fn output_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| p.file_name().unwrap().to_string_lossy().starts_with("part"))
        .collect();
    files.sort();
    files
}

fn params(input: PathBuf, prefix: PathBuf, threshold: u64) -> SplitParameters {
    let mut params = SplitParameters::new(input);
    params.prefix = prefix;
    params.threshold = threshold;
    params
}

/// 25 FASTA records, threshold 10 => 10, 10 and 5 records
#[test]
fn test_fasta_25_records_by_10() {
    let temp_dir = TempDir::new().unwrap();
    let content = fasta_records(25);
    let input = write_input(temp_dir.path(), "reads.fa", &content);
    let prefix = temp_dir.path().join("part");

    let mut summary: Vec<u8> = Vec::new();
    let report = split_reads(&params(input, prefix.clone(), 10), &mut summary).unwrap();

    assert_eq!(report.file_count(), 3);
    assert_eq!(report.total_records, 25);
    assert_eq!(
        report.entries.iter().map(|e| e.records).collect::<Vec<_>>(),
        vec![10, 10, 5]
    );

    let summary = String::from_utf8(summary).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "file_name\tmax_len\tmin_len");
    assert_eq!(lines[1], format!("{}1.fasta\t10\t1", prefix.display()));
    assert_eq!(lines[2], format!("{}2.fasta\t20\t11", prefix.display()));
    assert_eq!(lines[3], format!("{}3.fasta\t25\t21", prefix.display()));

    // Concatenated outputs reproduce the input
    let files = output_files(temp_dir.path());
    assert_eq!(files.len(), 3);
    let joined: String = (1..=3)
        .map(|i| fs::read_to_string(format!("{}{}.fasta", prefix.display(), i)).unwrap())
        .collect();
    assert_eq!(joined, content);
}

#[test]
fn test_fasta_blank_lines_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "x.fasta", ">a\nAC\n\n>b\n  \nGT\n");
    let prefix = temp_dir.path().join("part");

    let report = split_reads(&params(input, prefix.clone(), 100), io::sink()).unwrap();
    assert_eq!(report.file_count(), 1);
    let out = fs::read_to_string(format!("{}1.fasta", prefix.display())).unwrap();
    assert_eq!(out, ">a\nAC\n>b\nGT\n");
}

#[test]
fn test_exact_multiple_leaves_no_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "reads.fa", &fasta_records(20));
    let prefix = temp_dir.path().join("part");

    let mut summary: Vec<u8> = Vec::new();
    let report = split_reads(&params(input, prefix.clone(), 10), &mut summary).unwrap();

    assert_eq!(report.file_count(), 2);
    assert_eq!(output_files(temp_dir.path()).len(), 2);
    assert!(!Path::new(&format!("{}3.fasta", prefix.display())).exists());
    assert_eq!(String::from_utf8(summary).unwrap().lines().count(), 3);
}

#[test]
fn test_fastq_trailing_partial_group() {
    let temp_dir = TempDir::new().unwrap();
    let content = "@r1\nACGT\n+\nIIII\n@r2\nACGTAC\n+\nIIIIII\n@r3\nAC\n+\nII\n@r4\nACG\n";
    let input = write_input(temp_dir.path(), "reads.fq", content);
    let prefix = temp_dir.path().join("part");

    let mut summary: Vec<u8> = Vec::new();
    let report = split_reads(&params(input, prefix.clone(), 2), &mut summary).unwrap();

    assert_eq!(report.file_count(), 2);
    assert_eq!(report.total_records, 4);

    let last = fs::read_to_string(format!("{}2.fastq", prefix.display())).unwrap();
    assert_ne!(last.lines().count() % 4, 0);
    assert_eq!(last, "@r3\nAC\n+\nII\n@r4\nACG\n");

    let summary = String::from_utf8(summary).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[1], format!("{}1.fastq\t6\t4", prefix.display()));
    assert_eq!(lines[2], format!("{}2.fastq\t3\t2", prefix.display()));
}

#[test]
fn test_residue_count_mode() {
    let temp_dir = TempDir::new().unwrap();
    let content = "@a\nAAAAA\n+\nIIIII\n@b\nAAAAA\n+\nIIIII\n@c\nAAAAAAAAAAAA\n+\nIIIIIIIIIIII\n@d\nA\n+\nI\n";
    let input = write_input(temp_dir.path(), "reads.fastq", content);
    let prefix = temp_dir.path().join("part");

    let mut p = params(input, prefix, 8);
    p.count_residues = true;
    let report = split_reads(&p, io::sink()).unwrap();

    // 5+5 >= 8, then 12 >= 8, then 1
    assert_eq!(
        report.entries.iter().map(|e| e.records).collect::<Vec<_>>(),
        vec![2, 1, 1]
    );
    assert_eq!(report.total_length, 23);
}

#[test]
fn test_hmm_split() {
    let temp_dir = TempDir::new().unwrap();
    let content = "HMMER3/f\nNAME  a\nLENG  100\n//\nHMMER3/f\nNAME  b\nLENG  40\n//\nHMMER3/f\nNAME  c\n//\n";
    let input = write_input(temp_dir.path(), "models.hmm", content);
    let prefix = temp_dir.path().join("part");

    let mut summary: Vec<u8> = Vec::new();
    let report = split_reads(&params(input, prefix.clone(), 2), &mut summary).unwrap();

    assert_eq!(report.file_count(), 2);
    let summary = String::from_utf8(summary).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[1], format!("{}1.hmm\t100\t40", prefix.display()));
    assert_eq!(lines[2], format!("{}2.hmm\t0\t0", prefix.display()));
}

#[test]
fn test_unrecognized_format_creates_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "reads.xyz", ">a\nACGT\n");
    let prefix = temp_dir.path().join("part");

    let mut summary: Vec<u8> = Vec::new();
    let result = split_reads(&params(input, prefix, 10), &mut summary);

    assert!(matches!(result, Err(SplitError::UnrecognizedFormat { .. })));
    assert!(output_files(temp_dir.path()).is_empty());
    assert!(summary.is_empty());
}

#[test]
fn test_missing_input_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("absent.fq");
    let prefix = temp_dir.path().join("part");

    let result = split_reads(&params(input, prefix, 10), io::sink());
    assert!(matches!(result, Err(SplitError::Io(_))));
    assert!(output_files(temp_dir.path()).is_empty());
}

#[test]
fn test_zero_threshold_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "reads.fa", ">a\nA\n");
    let prefix = temp_dir.path().join("part");

    let result = split_reads(&params(input, prefix, 0), io::sink());
    assert!(matches!(result, Err(SplitError::InvalidThreshold)));
}

#[test]
fn test_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "empty.fa", "");
    let prefix = temp_dir.path().join("part");

    let mut summary: Vec<u8> = Vec::new();
    let report = split_reads(&params(input, prefix, 10), &mut summary).unwrap();
    assert_eq!(report.file_count(), 0);
    assert!(output_files(temp_dir.path()).is_empty());
    assert_eq!(String::from_utf8(summary).unwrap(), "file_name\tmax_len\tmin_len\n");
}

#[test]
fn test_repeat_runs_identical() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "reads.fa", &fasta_records(13));
    let prefix = temp_dir.path().join("part");
    let p = params(input, prefix.clone(), 4);

    split_reads(&p, io::sink()).unwrap();
    let first: Vec<Vec<u8>> = output_files(temp_dir.path())
        .iter()
        .map(|f| fs::read(f).unwrap())
        .collect();

    split_reads(&p, io::sink()).unwrap();
    let second: Vec<Vec<u8>> = output_files(temp_dir.path())
        .iter()
        .map(|f| fs::read(f).unwrap())
        .collect();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn test_default_prefix_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "sample.fq", "@r\nAC\n+\nII\n");

    let report = split_reads(&SplitParameters::new(&input), io::sink()).unwrap();
    assert_eq!(report.entries[0].file_name, temp_dir.path().join("sample1.fastq"));
    assert!(temp_dir.path().join("sample1.fastq").exists());
}
