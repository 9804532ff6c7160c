//! Build configuration: where to read from, where to write to.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_INPUT_DIR: &str = "./datasets/TEL/";
pub const DEFAULT_OUTPUT_PATH: &str = "converted_data.csv";
pub const DEFAULT_EXTENSION: &str = "txt";

/// Inputs of a single dataset build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory scanned (non-recursively) for input files.
    pub input_dir: PathBuf,
    /// Destination CSV. Overwritten if it exists.
    pub output_path: PathBuf,
    /// File extension without the leading dot, matched case-insensitively.
    pub extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl BuildConfig {
    pub fn new(input_dir: impl AsRef<Path>, output_path: impl AsRef<Path>) -> Self {
        Self {
            input_dir: input_dir.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// Create configuration from environment and defaults.
    ///
    /// Reads `TELDATA_INPUT_DIR`, `TELDATA_OUTPUT` and `TELDATA_EXTENSION`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        Self {
            input_dir: lookup("TELDATA_INPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.input_dir),
            output_path: lookup("TELDATA_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(default.output_path),
            extension: lookup("TELDATA_EXTENSION")
                .map(|e| e.trim_start_matches('.').to_string())
                .unwrap_or(default.extension),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.extension.trim().is_empty() {
            return Err(Error::Config("file extension must not be empty".into()));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(Error::Config("output path must not be empty".into()));
        }
        tracing::debug!(
            "Config: input={} output={} extension={}",
            self.input_dir.display(),
            self.output_path.display(),
            self.extension
        );
        Ok(())
    }
}
