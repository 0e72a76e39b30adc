use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use data_error::{Result, TailscanError};

/// List the files of `dir`, newest first by modification time.
///
/// Subdirectories are ignored; rotated logs live flat in one directory.
pub fn files_newest_first(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        TailscanError::Path(format!("{}: {}", dir.display(), e))
    })?;

    let mut files: Vec<(PathBuf, SystemTime)> = Vec::new();
    for entry in entries {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        files.push((entry.path(), metadata.modified()?));
    }

    files.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(files.into_iter().map(|(path, _)| path).collect())
}
