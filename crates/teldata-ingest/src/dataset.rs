//! Dataset aggregation: files → labeled entries, in scan order.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::extract::extract_lines;
use crate::file::{discover_files, file_name, read_file};
use crate::label::{classify, Label};
use teldata_core::{BuildConfig, Error, Result};

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEntry {
    pub text: String,
    pub label: Label,
}

/// Ordered collection of entries. Never holds an entry with empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    entries: Vec<TextEntry>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every line of one file, all carrying `label`.
    /// Returns how many were added.
    pub fn extend_from_lines(&mut self, lines: Vec<String>, label: Label) -> usize {
        let before = self.entries.len();
        self.entries.extend(
            lines
                .into_iter()
                .filter(|text| !text.is_empty())
                .map(|text| TextEntry { text, label }),
        );
        self.entries.len() - before
    }

    pub fn entries(&self) -> &[TextEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_label(&self, label: Label) -> usize {
        self.entries.iter().filter(|e| e.label == label).count()
    }
}

/// Per-file outcome of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub label: Label,
    pub entries: usize,
    /// Set when the file could not be read; it then contributed nothing.
    pub error: Option<String>,
}

/// Result of a build, for the console report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files: Vec<FileReport>,
    pub total_entries: usize,
    pub tel_entries: usize,
    pub non_tel_entries: usize,
    pub output_path: Option<PathBuf>,
}

impl BuildSummary {
    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.error.is_some())
    }
}

/// Builds a [`Dataset`] from every matching file of the configured directory.
pub struct DatasetBuilder {
    config: BuildConfig,
}

impl DatasetBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Scan, extract and label. Fails with `EmptyInput` when the directory
    /// has no matching file.
    pub fn build(&self) -> Result<(Dataset, BuildSummary)> {
        self.config.validate()?;

        let files = discover_files(&self.config.input_dir, &self.config.extension)?;
        if files.is_empty() {
            return Err(Error::EmptyInput {
                dir: self.config.input_dir.clone(),
                extension: self.config.extension.clone(),
            });
        }
        info!(
            "Found {} .{} files in {}",
            files.len(),
            self.config.extension,
            self.config.input_dir.display()
        );

        let mut dataset = Dataset::new();
        let mut summary = BuildSummary::default();
        for path in &files {
            summary.files.push(self.add_file(&mut dataset, path));
        }

        summary.total_entries = dataset.len();
        summary.tel_entries = dataset.count_label(Label::Tel);
        summary.non_tel_entries = dataset.count_label(Label::NonTel);
        Ok((dataset, summary))
    }

    /// Process one file. Read failures are logged and leave `dataset`
    /// unchanged.
    fn add_file(&self, dataset: &mut Dataset, path: &Path) -> FileReport {
        let name = file_name(path);
        let label = classify(&name);

        let (entries, error) = match read_file(path) {
            Ok(content) => (dataset.extend_from_lines(extract_lines(&content), label), None),
            Err(e) => {
                warn!("{}", e);
                (0, Some(e.to_string()))
            }
        };

        info!("Processed {}: label={} entries={}", name, label, entries);
        FileReport {
            file_name: name,
            label,
            entries,
            error,
        }
    }
}
