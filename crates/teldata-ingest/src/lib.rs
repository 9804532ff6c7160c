//! TelData Ingest: text file scanning, line cleaning, label inference,
//! dataset aggregation and CSV export.

pub mod dataset;
pub mod extract;
pub mod file;
pub mod label;
pub mod writer;

pub use dataset::{BuildSummary, Dataset, DatasetBuilder, FileReport, TextEntry};
pub use extract::{extract_lines, strip_enumeration};
pub use file::{discover_files, file_name, read_file};
pub use label::{classify, Label};
pub use writer::write_csv;

use teldata_core::{BuildConfig, Result};
use tracing::info;

/// Run the whole conversion: scan, extract, aggregate, write.
///
/// Returns `Error::EmptyInput` without touching the output path when no
/// input file matches.
pub fn run(config: &BuildConfig) -> Result<BuildSummary> {
    let (dataset, mut summary) = DatasetBuilder::new(config.clone()).build()?;
    write_csv(&dataset, &config.output_path)?;
    summary.output_path = Some(config.output_path.clone());
    info!(
        "Wrote {} entries to {}",
        summary.total_entries,
        config.output_path.display()
    );
    Ok(summary)
}
