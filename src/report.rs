//! Line-oriented rendering of a [`DirComparison`].
//!
//! Groups are always written in the same order: left-only, right-only,
//! then common (when present).

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::core::compare::DirComparison;

/// Which group a printed name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    LeftOnly,
    RightOnly,
    Common,
}

impl Marker {
    pub fn prefix(self) -> &'static str {
        match self {
            Marker::LeftOnly => "< ",
            Marker::RightOnly => "> ",
            Marker::Common => "= ",
        }
    }
}

/// Write every line of `comparison` to `out`.
///
/// Names that are not valid UTF-8 are printed lossily so the output is
/// always UTF-8 text.
pub fn write_report<W: Write>(out: &mut W, comparison: &DirComparison) -> io::Result<()> {
    write_group(out, Marker::LeftOnly, &comparison.left_only)?;
    write_group(out, Marker::RightOnly, &comparison.right_only)?;
    if let Some(common) = &comparison.common {
        write_group(out, Marker::Common, common)?;
    }
    out.flush()
}

fn write_group<W: Write, N: AsRef<OsStr>>(out: &mut W, marker: Marker, names: &[N]) -> io::Result<()> {
    for name in names {
        writeln!(out, "{}{}", marker.prefix(), name.as_ref().to_string_lossy())?;
    }
    Ok(())
}
