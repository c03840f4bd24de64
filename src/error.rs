//! Error types surfaced by the comparator.

use std::io;
use std::path::{Path, PathBuf};

/// A directory could not be opened or enumerated.
///
/// Covers a missing path, a path that is not a directory, permission
/// problems, and any other OS error hit while reading entries.  Either
/// side failing aborts the whole comparison.
#[derive(Debug, thiserror::Error)]
#[error("cannot read directory '{}'", path.display())]
pub struct DirectoryAccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl DirectoryAccessError {
    pub fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}
