//! Borrowed geometric view of a single triangle.
//!
//! The reference triangle has vertices `(0,0)`, `(1,0)`, `(0,1)` and area
//! [`REFERENCE_AREA`]. For a physical triangle with vertices `p1, p2, p3`
//! (in stored order) the affine map is
//!
//! ```text
//! F_T(r, s) = p1 + J * (r, s),   J = | x2-x1  x3-x1 |
//!                                    | y2-y1  y3-y1 |
//! ```
//!
//! so `F_T` sends the reference vertices to `p1`, `p2`, `p3` respectively.
//!
//! # Examples
//! ```rust
//! use fe_mesh2d::geometry::point::Point;
//! use fe_mesh2d::geometry::triangle::TriangleGeometry;
//!
//! let (a, b, c) = (Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 1.0));
//! let tri = TriangleGeometry::new(&a, &b, &c);
//! assert_eq!(tri.det_jacobian(), 2.0);
//! assert_eq!(tri.area(), 1.0);
//! assert_eq!(tri.map_from_reference(Point::new(0.5, 0.0)), Point::new(1.0, 0.0));
//! ```

use crate::geometry::point::Point;

/// Area of the reference triangle `(0,0), (1,0), (0,1)`.
pub const REFERENCE_AREA: f64 = 0.5;

/// Three borrowed vertices of a triangle.
///
/// Never copies coordinates; the lifetime ties the view to the vertex store
/// it was built from.
#[derive(Copy, Clone, Debug)]
pub struct TriangleGeometry<'a> {
    pub vertex1: &'a Point,
    pub vertex2: &'a Point,
    pub vertex3: &'a Point,
}

impl<'a> TriangleGeometry<'a> {
    #[inline]
    pub fn new(p1: &'a Point, p2: &'a Point, p3: &'a Point) -> Self {
        TriangleGeometry {
            vertex1: p1,
            vertex2: p2,
            vertex3: p3,
        }
    }

    #[inline]
    pub fn vertices(&self) -> [&'a Point; 3] {
        [self.vertex1, self.vertex2, self.vertex3]
    }

    /// Jacobian matrix of `F_T`, row-major.
    pub fn jacobian(&self) -> [[f64; 2]; 2] {
        let (dx2, dy2) = sub(self.vertex2, self.vertex1);
        let (dx3, dy3) = sub(self.vertex3, self.vertex1);
        [[dx2, dx3], [dy2, dy3]]
    }

    /// Signed determinant of the Jacobian of `F_T`.
    ///
    /// Positive when the vertices are in counter-clockwise order, negative
    /// when clockwise and zero when they are collinear.
    pub fn det_jacobian(&self) -> f64 {
        let (dx2, dy2) = sub(self.vertex2, self.vertex1);
        let (dx3, dy3) = sub(self.vertex3, self.vertex1);
        dx2 * dy3 - dy2 * dx3
    }

    /// Unsigned area; zero for degenerate triangles.
    #[inline]
    pub fn area(&self) -> f64 {
        REFERENCE_AREA * self.det_jacobian().abs()
    }

    #[inline]
    pub fn is_counter_clockwise(&self) -> bool {
        self.det_jacobian() > 0.0
    }

    /// Image of a reference-triangle point under `F_T`.
    pub fn map_from_reference(&self, hat: Point) -> Point {
        let [[a, b], [c, d]] = self.jacobian();
        Point::new(
            self.vertex1.x + a * hat.x + b * hat.y,
            self.vertex1.y + c * hat.x + d * hat.y,
        )
    }

    /// Lengths of edges `v1v2`, `v2v3`, `v3v1`.
    pub fn edge_lengths(&self) -> [f64; 3] {
        [
            norm(sub(self.vertex2, self.vertex1)),
            norm(sub(self.vertex3, self.vertex2)),
            norm(sub(self.vertex1, self.vertex3)),
        ]
    }
}

#[inline]
fn sub(a: &Point, b: &Point) -> (f64, f64) {
    (a.x - b.x, a.y - b.y)
}

#[inline]
fn norm((dx, dy): (f64, f64)) -> f64 {
    dx.hypot(dy)
}
