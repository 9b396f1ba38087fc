//! Geometry primitives for 2D triangular meshes.
//!
//! This module provides the `Point` value type and a borrowed
//! `TriangleGeometry` view used for per-cell affine transform queries.

pub mod point;
pub mod triangle;
