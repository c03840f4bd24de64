//! Directory listing — collect the base names of a directory's immediate entries.
//!
//! Unlike a tree walk this never descends, never follows symlinks and never
//! filters: whatever the OS enumerates (dot-files included) is a name.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::Path;

use crate::error::DirectoryAccessError;

/// Base names found directly inside one directory.
///
/// A `BTreeSet` keeps the names ordered by their raw byte value, which is
/// the order every report group is printed in.
pub type EntryNames = BTreeSet<OsString>;

/// List the immediate entry names of `dir`.
///
/// Fails if the directory cannot be opened or if any single entry cannot be
/// read; a partial listing is never returned.
pub fn list_names(dir: &Path) -> Result<EntryNames, DirectoryAccessError> {
    let entries = std::fs::read_dir(dir).map_err(|e| DirectoryAccessError::new(dir, e))?;

    let mut names = EntryNames::new();
    for entry in entries {
        let entry = entry.map_err(|e| DirectoryAccessError::new(dir, e))?;
        names.insert(entry.file_name());
    }

    tracing::debug!("list_names: {} entries in {}", names.len(), dir.display());
    Ok(names)
}
