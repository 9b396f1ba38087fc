//! Structural invariant checks for mesh containers.
//!
//! The only structural invariant this crate relies on is that every cell
//! refers to vertices that exist. Loaders enforce it eagerly; the
//! [`DebugInvariants`] trait lets callers (and debug builds) re-check it after
//! constructing a mesh by other means.

use crate::mesh_error::MeshError;
use crate::topology::triangle::Triangle;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Panics on a broken invariant in debug builds or with the
    /// `check-invariants` feature; no-op otherwise.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshError>;
}

/// Run a fallible check and panic with context when invariant checking is
/// compiled in.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Find the first cell with a vertex index `>= nver`.
///
/// Returns `(cell_id, vertex_index)` of the offending reference.
pub fn first_dangling_vertex(cells: &[Triangle], nver: usize) -> Option<(usize, usize)> {
    cells.iter().enumerate().find_map(|(cell_id, t)| {
        t.vertices()
            .into_iter()
            .find(|&v| v >= nver)
            .map(|v| (cell_id, v))
    })
}

/// Check that every cell only references vertices in `[0, nver)`.
pub fn check_cell_indices(cells: &[Triangle], nver: usize) -> Result<(), MeshError> {
    match first_dangling_vertex(cells, nver) {
        Some((cell_id, vertex)) => Err(MeshError::InvariantViolation(format!(
            "cell {cell_id} references vertex {vertex}, but mesh has {nver} vertices"
        ))),
        None => Ok(()),
    }
}
