//! Mesh I/O for triangle meshes.
//!
//! This module provides trait-based readers and writers for loading and
//! saving [`TriangleMesh`] contents. The only format currently supported is
//! the FreeFem++ `.msh` text format, see [`msh`].

pub mod msh;

use crate::mesh::TriangleMesh;
use crate::mesh_error::MeshError;
use std::io::{Read, Write};

/// Trait for mesh readers that produce a fully populated mesh.
///
/// Implementations must either return a complete mesh or an error; a
/// partially parsed mesh is never handed back.
pub trait MeshReader {
    /// Parse a mesh from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<TriangleMesh, MeshError>;
}

/// Trait for mesh writers that serialize a mesh.
pub trait MeshWriter {
    /// Write mesh contents to a writer.
    fn write<W: Write>(&self, writer: W, mesh: &TriangleMesh) -> Result<(), MeshError>;
}
