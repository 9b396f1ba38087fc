//! Topological triangle: three indices into a shared vertex store.
//!
//! A `Triangle` carries no coordinates and performs no validation; whoever
//! owns the vertex store (normally [`TriangleMesh`](crate::mesh::TriangleMesh))
//! is responsible for keeping the indices in range.
//!
//! # Vertex order
//! The order `v1, v2, v3` is significant: it fixes the traversal order used
//! when printing a cell and the sign of the affine Jacobian determinant
//! (positive for counter-clockwise order).

/// Three zero-based vertex indices.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Triangle {
    v1: usize,
    v2: usize,
    v3: usize,
}

impl Triangle {
    #[inline]
    pub const fn new(v1: usize, v2: usize, v3: usize) -> Self {
        Triangle { v1, v2, v3 }
    }

    /// Global index of vertex 1.
    #[inline]
    pub const fn v1(&self) -> usize {
        self.v1
    }

    /// Global index of vertex 2.
    #[inline]
    pub const fn v2(&self) -> usize {
        self.v2
    }

    /// Global index of vertex 3.
    #[inline]
    pub const fn v3(&self) -> usize {
        self.v3
    }

    /// All three indices in stored order.
    #[inline]
    pub const fn vertices(&self) -> [usize; 3] {
        [self.v1, self.v2, self.v3]
    }

    /// Same cell with `v2` and `v3` swapped, i.e. opposite orientation.
    #[inline]
    pub const fn reversed(&self) -> Self {
        Triangle::new(self.v1, self.v3, self.v2)
    }
}

impl From<[usize; 3]> for Triangle {
    #[inline]
    fn from([v1, v2, v3]: [usize; 3]) -> Self {
        Triangle::new(v1, v2, v3)
    }
}
