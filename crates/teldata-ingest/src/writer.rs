//! CSV export.
//!
//! Rows go into a temporary file next to the destination, which is renamed
//! over it only once every row is flushed. A failed write never leaves a
//! truncated CSV behind.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::dataset::Dataset;
use teldata_core::{Error, Result};

pub const HEADER: [&str; 2] = ["text", "label"];

/// Write `dataset` to `path` with a `text,label` header, replacing any
/// existing file.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    write_and_persist(dataset, path).map_err(|e| e.into_output_write(path))
}

fn write_and_persist(dataset: &Dataset, path: &Path) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let output_err = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(parent).map_err(output_err)?;
    // dropped (and removed) on any early return
    let mut tmp = NamedTempFile::new_in(parent).map_err(output_err)?;

    write_rows(dataset, tmp.as_file_mut())?;
    tmp.as_file_mut().flush().map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;
    Ok(())
}

fn write_rows<W: Write>(dataset: &Dataset, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);

    writer.write_record(HEADER)?;
    for entry in dataset.entries() {
        writer.serialize(entry)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::TextEntry;
    use crate::label::Label;

    fn sample() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.extend_from_lines(
            vec!["say \"hi\", now".into(), "multi\nline".into()],
            Label::Tel,
        );
        dataset.extend_from_lines(vec!["plain".into()], Label::NonTel);
        dataset
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&sample(), &path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("text,label\n"));
        assert!(raw.contains("\"say \"\"hi\"\", now\",1\n"));
        assert!(raw.ends_with("plain,0\n"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<TextEntry> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(rows, sample().entries());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_empty_dataset_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.csv");
        write_csv(&Dataset::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "text,label\n");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        std::fs::write(&path, "stale content that is longer than the new file").unwrap();
        write_csv(&Dataset::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "text,label\n");
    }

    #[test]
    fn test_write_failure_is_output_write() {
        let dir = tempfile::tempdir().unwrap();
        // a directory already sits at the destination, so the rename fails
        let path = dir.path().join("taken");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let err = write_csv(&sample(), &path).unwrap_err();
        assert!(matches!(err, Error::OutputWrite { .. }));
        assert!(err.is_fatal());
        // only the directory that blocked the rename is left
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_sibling_tmp_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let sibling = dir.path().join("out.csv.tmp");
        std::fs::write(&sibling, "user data").unwrap();

        write_csv(&sample(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&sibling).unwrap(), "user data");
        assert!(path.exists());
    }
}
