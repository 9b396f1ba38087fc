//! `TriangleMesh`: owner of the vertex and cell stores of a 2D triangulation.
//!
//! A mesh is either *unloaded* (both stores empty, every indexed query fails
//! with [`MeshError::IndexOutOfRange`]) or *loaded* from a file or from
//! explicit parts. Once built, the mesh is read-only apart from wholesale
//! replacement by another load.
//!
//! # Orientation
//! [`TriangleMesh::det_j_affine_transform`] returns the **signed** Jacobian
//! determinant of the affine map from the reference triangle
//! `(0,0), (1,0), (0,1)` onto a cell. The sign is part of the contract:
//! positive for counter-clockwise vertex order, negative for clockwise,
//! zero for collinear vertices. [`TriangleMesh::area`] is always
//! non-negative.
//!
//! # Examples
//! ```rust
//! use fe_mesh2d::geometry::point::Point;
//! use fe_mesh2d::mesh::TriangleMesh;
//! use fe_mesh2d::topology::triangle::Triangle;
//!
//! let mesh = TriangleMesh::from_parts(
//!     vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
//!     vec![Triangle::new(0, 1, 2)],
//! )?;
//! assert_eq!(mesh.det_j_affine_transform(0)?, 1.0);
//! assert_eq!(mesh.area(0)?, 0.5);
//! # Ok::<(), fe_mesh2d::mesh_error::MeshError>(())
//! ```

use crate::debug_invariants::{DebugInvariants, check_cell_indices, first_dangling_vertex};
use crate::geometry::point::Point;
use crate::geometry::triangle::TriangleGeometry;
use crate::io::msh::{MshReadOptions, MshReader, MshWriter};
use crate::io::{MeshReader, MeshWriter};
use crate::mesh_error::MeshError;
use crate::topology::triangle::Triangle;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Mesh composed of 2D triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Point>,
    cells: Vec<Triangle>,
}

impl TriangleMesh {
    /// Create an empty (unloaded) mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mesh from explicit stores.
    ///
    /// Fails with [`MeshError::IndexOutOfRange`] if any cell references a
    /// vertex outside `[0, vertices.len())`.
    pub fn from_parts(vertices: Vec<Point>, cells: Vec<Triangle>) -> Result<Self, MeshError> {
        if let Some((_, index)) = first_dangling_vertex(&cells, vertices.len()) {
            return Err(MeshError::IndexOutOfRange {
                kind: "vertex",
                index,
                len: vertices.len(),
            });
        }
        Ok(Self { vertices, cells })
    }

    /// Build a mesh without checking cell indices.
    ///
    /// Queries on a cell with a dangling index still fail cleanly with
    /// [`MeshError::IndexOutOfRange`]; they never panic.
    pub fn from_parts_unchecked(vertices: Vec<Point>, cells: Vec<Triangle>) -> Self {
        Self { vertices, cells }
    }

    /// Number of vertices currently stored.
    #[inline]
    pub fn get_nver(&self) -> usize {
        self.vertices.len()
    }

    /// Number of cells currently stored.
    #[inline]
    pub fn get_ncel(&self) -> usize {
        self.cells.len()
    }

    /// Cell `i`, or `IndexOutOfRange` if `i >= ncel`.
    pub fn get_cell(&self, i: usize) -> Result<&Triangle, MeshError> {
        self.cells.get(i).ok_or(MeshError::IndexOutOfRange {
            kind: "cell",
            index: i,
            len: self.cells.len(),
        })
    }

    /// Vertex `i`, or `IndexOutOfRange` if `i >= nver`.
    pub fn get_vertex(&self, i: usize) -> Result<&Point, MeshError> {
        self.vertices.get(i).ok_or(MeshError::IndexOutOfRange {
            kind: "vertex",
            index: i,
            len: self.vertices.len(),
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn cells(&self) -> &[Triangle] {
        &self.cells
    }

    /// Borrowed geometric view of cell `cell_id`.
    pub fn geometry(&self, cell_id: usize) -> Result<TriangleGeometry<'_>, MeshError> {
        let t = self.get_cell(cell_id)?;
        Ok(TriangleGeometry::new(
            self.get_vertex(t.v1())?,
            self.get_vertex(t.v2())?,
            self.get_vertex(t.v3())?,
        ))
    }

    // -------------------------------------------------------------------------
    // Loading and saving
    // -------------------------------------------------------------------------

    /// Replace the mesh contents with those of a FreeFem++ `.msh` file.
    ///
    /// The load is all-or-nothing: the file is parsed completely before the
    /// stores are swapped in, so on error `self` is left unchanged.
    pub fn read_file_msh<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MeshError> {
        self.read_file_msh_with(path, MshReadOptions::default())
    }

    /// [`read_file_msh`](Self::read_file_msh) with explicit parse options.
    pub fn read_file_msh_with<P: AsRef<Path>>(
        &mut self,
        path: P,
        options: MshReadOptions,
    ) -> Result<(), MeshError> {
        let path = path.as_ref();
        log::debug!("loading mesh from {}", path.display());
        let unreadable = |reason: String| MeshError::FileOpen {
            path: path.to_path_buf(),
            reason,
        };
        let file = File::open(path).map_err(|e| unreadable(e.to_string()))?;
        // Directories open fine on unix; only the first read fails.
        if !file.metadata().map_err(|e| unreadable(e.to_string()))?.is_file() {
            return Err(unreadable("not a regular file".into()));
        }
        let loaded = MshReader
            .read_with_options(file, options)
            .map_err(|e| match e {
                MeshError::Io(reason) => unreadable(reason),
                other => other,
            })?;
        *self = loaded;
        log::info!(
            "loaded mesh {}: {} vertices, {} cells",
            path.display(),
            self.get_nver(),
            self.get_ncel()
        );
        Ok(())
    }

    /// Replace the mesh contents with a `.msh` stream.
    pub fn read_msh<R: Read>(&mut self, reader: R) -> Result<(), MeshError> {
        *self = MshReader.read(reader)?;
        Ok(())
    }

    /// Write the mesh as a `.msh` file, creating or truncating `path`.
    pub fn write_file_msh<P: AsRef<Path>>(&self, path: P) -> Result<(), MeshError> {
        let file = File::create(path.as_ref())?;
        MshWriter.write(file, self)
    }

    // -------------------------------------------------------------------------
    // Affine transform queries
    // -------------------------------------------------------------------------

    /// Signed determinant of the Jacobian of the affine map `F_T` from the
    /// reference triangle onto cell `cell_id`.
    ///
    /// With vertices `(x1,y1), (x2,y2), (x3,y3)` in stored order:
    /// `(x2-x1)(y3-y1) - (y2-y1)(x3-x1)`. Positive means counter-clockwise.
    pub fn det_j_affine_transform(&self, cell_id: usize) -> Result<f64, MeshError> {
        Ok(self.geometry(cell_id)?.det_jacobian())
    }

    /// Area of cell `cell_id`: `0.5 * |det J|`. Zero for degenerate cells.
    pub fn area(&self, cell_id: usize) -> Result<f64, MeshError> {
        Ok(self.geometry(cell_id)?.area())
    }

    /// `F_T(hat)` for a point `hat` given in reference coordinates.
    pub fn affine_transform(&self, cell_id: usize, hat: Point) -> Result<Point, MeshError> {
        Ok(self.geometry(cell_id)?.map_from_reference(hat))
    }

    /// Per-cell areas in cell order.
    pub fn areas(&self) -> impl Iterator<Item = Result<f64, MeshError>> + '_ {
        (0..self.get_ncel()).map(move |i| self.area(i))
    }

    /// Sum of all cell areas.
    pub fn total_area(&self) -> Result<f64, MeshError> {
        self.areas().sum()
    }

    /// Per-cell areas computed in parallel.
    #[cfg(feature = "rayon")]
    pub fn par_areas(&self) -> Result<Vec<f64>, MeshError> {
        use rayon::prelude::*;
        (0..self.get_ncel())
            .into_par_iter()
            .map(|i| self.area(i))
            .collect()
    }

    /// Print every cell and its vertices on stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

/// One `Cell i:` line per cell followed by its vertices in `v1, v2, v3` order.
impl fmt::Display for TriangleMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, t) in self.cells.iter().enumerate() {
            writeln!(f, "Cell {i}:")?;
            for v in t.vertices() {
                match self.vertices.get(v) {
                    Some(p) => writeln!(f, "{p}")?,
                    None => writeln!(f, "<missing vertex {v}>")?,
                }
            }
        }
        Ok(())
    }
}

impl DebugInvariants for TriangleMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "TriangleMesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        check_cell_indices(&self.cells, self.vertices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> TriangleMesh {
        TriangleMesh::from_parts(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ],
            vec![Triangle::new(0, 1, 2), Triangle::new(0, 2, 3)],
        )
        .unwrap()
    }

    #[test]
    fn unloaded_mesh_rejects_every_index() {
        let mesh = TriangleMesh::new();
        assert_eq!(mesh.get_nver(), 0);
        assert_eq!(mesh.get_ncel(), 0);
        assert!(matches!(
            mesh.get_cell(0),
            Err(MeshError::IndexOutOfRange { kind: "cell", index: 0, len: 0 })
        ));
        assert!(matches!(
            mesh.get_vertex(0),
            Err(MeshError::IndexOutOfRange { kind: "vertex", .. })
        ));
        assert!(mesh.det_j_affine_transform(0).is_err());
        assert!(mesh.area(0).is_err());
    }

    #[test]
    fn from_parts_rejects_dangling_vertex() {
        let err = TriangleMesh::from_parts(
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![Triangle::new(0, 1, 2)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            MeshError::IndexOutOfRange {
                kind: "vertex",
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn unchecked_mesh_fails_invariant_validation() {
        let mesh =
            TriangleMesh::from_parts_unchecked(vec![Point::default()], vec![Triangle::new(0, 0, 5)]);
        assert!(matches!(
            mesh.validate_invariants(),
            Err(MeshError::InvariantViolation(_))
        ));
        assert!(unit_square().validate_invariants().is_ok());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "[invariants] TriangleMesh")]
    fn debug_assert_panics_on_dangling_vertex() {
        let mesh =
            TriangleMesh::from_parts_unchecked(vec![Point::default()], vec![Triangle::new(1, 0, 0)]);
        mesh.debug_assert_invariants();
    }

    #[test]
    fn square_cells_are_counter_clockwise_halves() {
        let mesh = unit_square();
        for i in 0..mesh.get_ncel() {
            assert_eq!(mesh.det_j_affine_transform(i).unwrap(), 1.0);
            assert_eq!(mesh.area(i).unwrap(), 0.5);
        }
        assert_eq!(mesh.total_area().unwrap(), 1.0);
        assert!(mesh.area(2).is_err());
    }

    #[test]
    fn affine_transform_maps_reference_vertices() {
        let mesh = unit_square();
        let t = *mesh.get_cell(1).unwrap();
        let refs = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)].map(Point::from);
        for (hat, v) in refs.into_iter().zip(t.vertices()) {
            assert_eq!(
                mesh.affine_transform(1, hat).unwrap(),
                *mesh.get_vertex(v).unwrap()
            );
        }
    }

    #[test]
    fn display_lists_cells_in_order() {
        let text = unit_square().to_string();
        assert_eq!(
            text,
            "Cell 0:\n(0,0)\n(1,0)\n(1,1)\nCell 1:\n(0,0)\n(1,1)\n(0,1)\n"
        );
    }

    #[test]
    fn failed_stream_load_keeps_previous_contents() {
        let mut mesh = unit_square();
        let before = mesh.clone();
        let err = mesh.read_msh("4 2 0\n0 0 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, MeshError::Parse(_)));
        assert_eq!(mesh, before);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_areas_match_serial() {
        let mesh = unit_square();
        let serial: Vec<f64> = mesh.areas().collect::<Result<_, _>>().unwrap();
        assert_eq!(mesh.par_areas().unwrap(), serial);
    }
}
