#![cfg_attr(docsrs, feature(doc_cfg))]
//! # fe-mesh2d
//!
//! fe-mesh2d provides the geometric substrate for 2D finite-element codes: a
//! triangular mesh representation, a reader/writer for the FreeFem++ `.msh`
//! text format, and the per-cell affine transform arithmetic that maps the
//! reference triangle `(0,0), (1,0), (0,1)` onto physical cells.
//!
//! ## Features
//! - `Point`/`Triangle` value types and an owning [`TriangleMesh`](mesh::TriangleMesh)
//! - All-or-nothing `.msh` loading with descriptive parse errors
//! - Signed Jacobian determinants (positive = counter-clockwise) and cell areas
//! - Borrowed [`TriangleGeometry`](geometry::triangle::TriangleGeometry) views
//!   that never copy coordinates
//! - Optional `rayon` feature for parallel per-cell queries
//!
//! ## Usage
//! ```rust,no_run
//! use fe_mesh2d::prelude::*;
//!
//! let mut mesh = TriangleMesh::new();
//! mesh.read_file_msh("circle200.msh")?;
//! for cell in 0..mesh.get_ncel() {
//!     let det = mesh.det_j_affine_transform(cell)?;
//!     let area = mesh.area(cell)?;
//!     assert_eq!(area, 0.5 * det.abs());
//! }
//! # Ok::<(), MeshError>(())
//! ```
//!
//! Finite-element spaces, quadrature and assembly are left to downstream
//! crates; they consume the counts, accessors and Jacobian queries exposed
//! here.

pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::point::Point;
    pub use crate::geometry::triangle::{REFERENCE_AREA, TriangleGeometry};
    pub use crate::io::msh::{MshReadOptions, MshReader, MshWriter};
    pub use crate::io::{MeshReader, MeshWriter};
    pub use crate::mesh::TriangleMesh;
    pub use crate::mesh_error::MeshError;
    pub use crate::topology::triangle::Triangle;
}
