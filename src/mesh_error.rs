//! MeshError: Unified error type for fe-mesh2d public APIs
//!
//! Every fallible operation in this crate (mesh loading, indexed access,
//! per-cell geometry) reports failures through this type instead of
//! panicking. Errors surface to the immediate caller; nothing here retries
//! or terminates the process.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for mesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh file could not be opened (missing or unreadable).
    #[error("cannot open mesh file `{}`: {reason}", .path.display())]
    FileOpen { path: PathBuf, reason: String },
    /// The token stream was malformed or ended before all declared records.
    #[error("mesh parse error: {0}")]
    Parse(String),
    /// An accessor was given an index outside `[0, len)`.
    #[error("{kind} index {index} out of range (len = {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
    /// I/O failure after the file was opened.
    #[error("mesh I/O error: {0}")]
    Io(String),
    /// A structural invariant of the mesh does not hold.
    #[error("mesh invariant violated: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for MeshError {
    fn from(err: std::io::Error) -> Self {
        MeshError::Io(err.to_string())
    }
}
