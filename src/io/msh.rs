//! FreeFem++ `.msh` reader and writer.
//!
//! # Supported format
//! A whitespace-delimited token stream (line breaks are not significant):
//!
//! ```text
//! <nver> <ncel> <nedg>
//! <x> <y> <label>              # nver vertex records
//! <id1> <id2> <id3> <marker>   # ncel triangle records, 1-based indices
//! ```
//!
//! Vertex labels and cell markers are parsed (so malformed values are
//! rejected) but not stored. `nedg` is read and ignored, as is anything after
//! the last triangle record (FreeFem++ writes boundary edges there).
//!
//! # Limitations
//! - Boundary edges and labels are not retained.
//! - The writer emits `0` for every label, marker and for `nedg`.

use crate::geometry::point::Point;
use crate::io::{MeshReader, MeshWriter};
use crate::mesh::TriangleMesh;
use crate::mesh_error::MeshError;
use crate::topology::triangle::Triangle;
use std::io::{BufWriter, Read, Write};
use std::str::{FromStr, SplitAsciiWhitespace};

/// Upper bound on up-front allocation driven by header counts, so a bogus
/// header cannot trigger a huge allocation before the stream runs dry.
const MAX_PREALLOC: usize = 1 << 16;

/// Options controlling `.msh` parsing.
#[derive(Clone, Copy, Debug)]
pub struct MshReadOptions {
    /// Reject triangles whose (1-based) vertex index exceeds `nver`.
    pub validate_indices: bool,
    /// Log a warning for every degenerate or clockwise triangle.
    pub warn_degenerate: bool,
}

impl Default for MshReadOptions {
    fn default() -> Self {
        Self {
            validate_indices: true,
            warn_degenerate: false,
        }
    }
}

/// Reader for FreeFem++ `.msh` meshes.
#[derive(Debug, Default, Clone)]
pub struct MshReader;

/// Writer for FreeFem++ `.msh` meshes.
#[derive(Debug, Default, Clone)]
pub struct MshWriter;

/// Cursor over the tokens of a `.msh` file.
struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(contents: &'a str) -> Self {
        Self {
            inner: contents.split_ascii_whitespace(),
        }
    }

    /// Parse the next token; `what` names the field for error messages.
    fn next<T: FromStr>(&mut self, what: impl Fn() -> String) -> Result<T, MeshError> {
        let raw = self.inner.next().ok_or_else(|| {
            MeshError::Parse(format!("unexpected end of input while reading {}", what()))
        })?;
        raw.parse::<T>()
            .map_err(|_| MeshError::Parse(format!("invalid {}: `{raw}`", what())))
    }

    /// Like [`next`](Self::next), but rejects `nan`/`inf` spellings.
    fn next_finite(&mut self, what: impl Fn() -> String) -> Result<f64, MeshError> {
        let value: f64 = self.next(&what)?;
        if !value.is_finite() {
            return Err(MeshError::Parse(format!("invalid {}: `{value}`", what())));
        }
        Ok(value)
    }

    fn remaining(self) -> usize {
        self.inner.count()
    }
}

impl MshReader {
    /// Parse a mesh with explicit options.
    pub fn read_with_options<R: Read>(
        &self,
        mut reader: R,
        options: MshReadOptions,
    ) -> Result<TriangleMesh, MeshError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let contents = std::str::from_utf8(&bytes)
            .map_err(|e| MeshError::Parse(format!("input is not valid UTF-8: {e}")))?;
        let mut tokens = Tokens::new(contents);

        let nver: usize = tokens.next(|| "vertex count".into())?;
        let ncel: usize = tokens.next(|| "cell count".into())?;
        let nedg: usize = tokens.next(|| "edge count".into())?;
        log::debug!("msh header: nver={nver} ncel={ncel} nedg={nedg}");

        let mut vertices = Vec::with_capacity(nver.min(MAX_PREALLOC));
        for i in 0..nver {
            let x = tokens.next_finite(|| format!("x coordinate of vertex {}", i + 1))?;
            let y = tokens.next_finite(|| format!("y coordinate of vertex {}", i + 1))?;
            let _label = tokens.next_finite(|| format!("label of vertex {}", i + 1))?;
            vertices.push(Point::new(x, y));
        }

        let mut cells = Vec::with_capacity(ncel.min(MAX_PREALLOC));
        for i in 0..ncel {
            let mut ids = [0usize; 3];
            for (k, slot) in ids.iter_mut().enumerate() {
                let raw: usize =
                    tokens.next(|| format!("vertex {} of triangle {}", k + 1, i + 1))?;
                *slot = Self::to_zero_based(raw, i, nver, options)?;
            }
            let _marker: i64 = tokens.next(|| format!("marker of triangle {}", i + 1))?;
            cells.push(Triangle::from(ids));
        }

        let trailing = tokens.remaining();
        if trailing > 0 {
            log::debug!("ignoring {trailing} trailing tokens after triangle records");
        }

        let mesh = if options.validate_indices {
            TriangleMesh::from_parts(vertices, cells)?
        } else {
            TriangleMesh::from_parts_unchecked(vertices, cells)
        };
        if options.warn_degenerate {
            Self::warn_degenerate_cells(&mesh);
        }
        log::debug!(
            "msh parsed: {} vertices, {} triangles",
            mesh.get_nver(),
            mesh.get_ncel()
        );
        Ok(mesh)
    }

    fn to_zero_based(
        raw: usize,
        cell: usize,
        nver: usize,
        options: MshReadOptions,
    ) -> Result<usize, MeshError> {
        if raw == 0 {
            return Err(MeshError::Parse(format!(
                "triangle {} uses vertex index 0 (indices are 1-based)",
                cell + 1
            )));
        }
        if options.validate_indices && raw > nver {
            return Err(MeshError::Parse(format!(
                "triangle {} references vertex {raw}, but only {nver} vertices are declared",
                cell + 1
            )));
        }
        Ok(raw - 1)
    }

    fn warn_degenerate_cells(mesh: &TriangleMesh) {
        for cell_id in 0..mesh.get_ncel() {
            match mesh.det_j_affine_transform(cell_id) {
                Ok(det) if det == 0.0 => log::warn!("triangle {cell_id} is degenerate"),
                Ok(det) if det < 0.0 => {
                    log::warn!("triangle {cell_id} is clockwise (det J = {det})")
                }
                Ok(_) => {}
                Err(e) => log::warn!("triangle {cell_id}: {e}"),
            }
        }
    }
}

impl MeshReader for MshReader {
    fn read<R: Read>(&self, reader: R) -> Result<TriangleMesh, MeshError> {
        self.read_with_options(reader, MshReadOptions::default())
    }
}

impl MeshWriter for MshWriter {
    fn write<W: Write>(&self, writer: W, mesh: &TriangleMesh) -> Result<(), MeshError> {
        let mut out = BufWriter::new(writer);
        writeln!(out, "{} {} 0", mesh.get_nver(), mesh.get_ncel())?;
        for p in mesh.vertices() {
            writeln!(out, "{} {} 0", p.x, p.y)?;
        }
        for t in mesh.cells() {
            writeln!(out, "{} {} {} 0", t.v1() + 1, t.v2() + 1, t.v3() + 1)?;
        }
        out.flush()?;
        Ok(())
    }
}
