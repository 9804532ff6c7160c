//! Error types for TelData.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A single input file could not be read or is not valid UTF-8.
    #[error("Error reading file {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No .{extension} files found in {}", dir.display())]
    EmptyInput { dir: PathBuf, extension: String },

    #[error("Cannot list input directory {}: {source}", dir.display())]
    InputDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing CSV file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the run has to stop. Per-file read failures and an empty
    /// input directory are reported and the run ends normally.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::FileRead { .. } | Error::EmptyInput { .. })
    }

    /// Fold a writer-level failure into an `OutputWrite` for `path`.
    pub fn into_output_write(self, path: impl Into<PathBuf>) -> Self {
        let source = match self {
            Error::OutputWrite { path, source } => return Error::OutputWrite { path, source },
            Error::Csv(e) => std::io::Error::from(e),
            other => std::io::Error::other(other.to_string()),
        };
        Error::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        let read = Error::FileRead {
            path: "a.txt".into(),
            source: std::io::Error::from(std::io::ErrorKind::InvalidData),
        };
        let empty = Error::EmptyInput {
            dir: "datasets".into(),
            extension: "txt".into(),
        };
        let write = Error::OutputWrite {
            path: "out.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!read.is_fatal());
        assert!(!empty.is_fatal());
        assert!(write.is_fatal());
        assert!(Error::Config("bad".into()).is_fatal());
    }

    #[test]
    fn test_csv_error_becomes_output_write() {
        let csv_err = csv::Error::from(std::io::Error::from(std::io::ErrorKind::WriteZero));
        match Error::Csv(csv_err).into_output_write("out.csv") {
            Error::OutputWrite { path, .. } => assert_eq!(path, PathBuf::from("out.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_output_write_keeps_its_path() {
        let err = Error::OutputWrite {
            path: "nested".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into_output_write("out.csv");
        match err {
            Error::OutputWrite { path, source } => {
                assert_eq!(path, PathBuf::from("nested"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_path() {
        let err = Error::EmptyInput {
            dir: "./datasets/TEL/".into(),
            extension: "txt".into(),
        };
        assert_eq!(err.to_string(), "No .txt files found in ./datasets/TEL/");
    }
}
