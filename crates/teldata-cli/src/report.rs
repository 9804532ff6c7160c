//! Console output of a run. Informational only; the CSV is the contract.

use std::path::Path;

use teldata_ingest::BuildSummary;

pub fn print_banner() {
    println!("TXT to CSV Converter");
    println!("{}", "=".repeat(30));
}

pub fn print_discovered(summary: &BuildSummary) {
    println!("Found {} input files:", summary.files.len());
    for file in &summary.files {
        println!("  - {}", file.file_name);
    }
}

pub fn print_files(summary: &BuildSummary) {
    for file in &summary.files {
        println!();
        println!("Processing {}:", file.file_name);
        println!("  Label: {}", file.label);
        match &file.error {
            Some(e) => println!("  Skipped: {}", e),
            None => println!("  Extracted {} text entries", file.entries),
        }
    }
}

pub fn print_totals(summary: &BuildSummary) {
    println!();
    if let Some(path) = &summary.output_path {
        println!("CSV file created successfully: {}", path.display());
    }
    println!("Total entries: {}", summary.total_entries);
    println!("TEL entries: {}", summary.tel_entries);
    println!("Non-TEL entries: {}", summary.non_tel_entries);

    let failed: Vec<_> = summary.failed_files().collect();
    if !failed.is_empty() {
        println!();
        println!("Files skipped:");
        for f in failed {
            println!("  - {}", f.file_name);
        }
    }
}

pub fn print_usage(default_input: &Path, default_output: &Path) {
    println!("TelData: label line-delimited text files into a CSV dataset");
    println!();
    println!("Usage: teldata [input-dir] [output-csv]");
    println!();
    println!("Arguments:");
    println!("  input-dir    Directory of .txt files (default: {})", default_input.display());
    println!("  output-csv   Destination file (default: {})", default_output.display());
    println!();
    println!("Environment:");
    println!("  TELDATA_INPUT_DIR, TELDATA_OUTPUT, TELDATA_EXTENSION, RUST_LOG");
}
