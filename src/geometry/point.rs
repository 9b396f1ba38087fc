//! `Point`: a plain 2D coordinate pair.
//!
//! Points have no identity beyond their value; a mesh refers to them by
//! their position in its vertex store.

use std::fmt;

/// A point in the plane.
///
/// `Point::default()` is the origin, but callers should treat a
/// default-constructed point as a placeholder to be overwritten.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Print the coordinates as `(x,y)` followed by a newline on stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

/// Displays as `(x,y)` with no padding.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
