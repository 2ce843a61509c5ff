//! Input file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{GradeError, Result};

/// Collects the regular files directly inside `input_dir` (no recursion).
///
/// Paths are returned sorted so that logs are stable between runs; callers
/// must not rely on the order for anything else.
///
/// # Errors
///
/// Returns [`GradeError::DirectoryNotFound`] if `input_dir` is missing or is
/// not a directory.
pub fn collect_files(input_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let input_dir = input_dir.as_ref();

    if !input_dir.is_dir() {
        return Err(GradeError::DirectoryNotFound {
            path: input_dir.to_path_buf(),
        });
    }

    let location = input_dir
        .canonicalize()
        .unwrap_or_else(|_| input_dir.to_path_buf());
    info!(dir = %location.display(), "Reading input files");

    let mut files = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            debug!(file = %path.display(), "Found input file");
            files.push(path);
        }
    }

    files.sort();

    info!(count = files.len(), dir = %location.display(), "Collected input files");
    Ok(files)
}
