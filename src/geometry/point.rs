//! Plane coordinates.
//!
//! The mesh works in a fixed 2D Euclidean plane with `f64` coordinates, so
//! points are plain value types rather than generic coordinate containers.

use std::fmt;

/// A position in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Cheaper than [`Point::distance_to`] and sufficient wherever only the
    /// ordering of distances matters.
    #[inline]
    #[must_use]
    pub fn distance_squared_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// True when both coordinates are finite (no NaN or infinity).
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_relative_eq!(a.distance_to(b), 5.0);
        assert_relative_eq!(a.distance_squared_to(b), 25.0);
        assert_relative_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn finiteness() {
        assert!(Point::new(1.0, -2.0).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn conversion_and_display() {
        let p: Point = (1.5, 2.5).into();
        assert_eq!(p, Point::new(1.5, 2.5));
        assert_eq!(p.to_string(), "(1.5, 2.5)");
    }
}
