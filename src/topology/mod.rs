//! Mesh topology: cells described purely by vertex indices.

pub mod triangle;
