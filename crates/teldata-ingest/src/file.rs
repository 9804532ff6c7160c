//! Input file discovery and reading.

use std::path::{Path, PathBuf};

use teldata_core::{Error, Result};

/// List regular files in `dir` whose extension equals `extension`
/// (case-insensitive), sorted by file name.
///
/// An empty or missing directory yields an empty vec; deciding whether that
/// ends the run is left to the caller. Other listing failures, such as a
/// permission error, are `InputDir`.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let wanted = extension.trim_start_matches('.').to_lowercase();
    let map_err = |source| Error::InputDir {
        dir: dir.to_path_buf(),
        source,
    };

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Input directory {} does not exist", dir.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(map_err(e)),
    };

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(map_err)?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase() == wanted)
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read a whole file as UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Base name of `path`, lossily converted.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}
