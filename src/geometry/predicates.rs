//! Geometric predicates for planar triangulations.
//!
//! This module contains the two predicates everything else is built on: the
//! orientation test and the in-circumcircle test. Both are evaluated as
//! floating-point determinants classified against an error bound that scales
//! with the magnitude of the inputs, so results within the bound are reported
//! as [`Orientation::DEGENERATE`] / [`InCircle::BOUNDARY`] rather than
//! guessed.
//!
//! # Numerical tolerance
//!
//! The error bounds are the static "stage A" bounds from Shewchuk's adaptive
//! predicates: `(3 + 16ε)ε` for the 2x2 orientation determinant and
//! `(10 + 96ε)ε` for the lifted 3x3 in-circle determinant, applied to the
//! permanent (sum of absolute products) of each determinant. A point whose
//! determinant falls inside the bound may be on either side of the exact
//! boundary; callers treat that band as "on the boundary", which is the
//! documented robustness level of this crate.

use crate::geometry::point::Point;

/// `(3 + 16ε)ε` for f64; see module docs.
const ORIENT_ERRBOUND: f64 = 3.330_669_073_875_470_3e-16;

/// `(10 + 96ε)ε` for f64; see module docs.
const INCIRCLE_ERRBOUND: f64 = 1.110_223_024_625_157_7e-15;

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise turn (determinant < 0).
    NEGATIVE,
    /// Collinear within tolerance (determinant ≈ 0).
    DEGENERATE,
    /// Counter-clockwise turn (determinant > 0).
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Position of a point relative to a circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// The point is outside the circumcircle.
    OUTSIDE,
    /// The point is on the circumcircle within numerical tolerance.
    BOUNDARY,
    /// The point is strictly inside the circumcircle.
    INSIDE,
}

impl std::fmt::Display for InCircle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Orientation of the ordered triple `(a, b, c)`.
///
/// Returns [`Orientation::POSITIVE`] when `c` lies to the left of the
/// directed line `a -> b` (the triple makes a counter-clockwise turn),
/// [`Orientation::NEGATIVE`] when it lies to the right, and
/// [`Orientation::DEGENERATE`] when the three points are collinear within
/// the tolerance described in the module docs.
///
/// # Example
///
/// ```
/// use planemesh::geometry::point::Point;
/// use planemesh::geometry::predicates::{Orientation, orient_2d};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// assert_eq!(orient_2d(a, b, Point::new(0.0, 1.0)), Orientation::POSITIVE);
/// assert_eq!(orient_2d(a, b, Point::new(0.0, -1.0)), Orientation::NEGATIVE);
/// assert_eq!(orient_2d(a, b, Point::new(2.0, 0.0)), Orientation::DEGENERATE);
/// ```
#[must_use]
pub fn orient_2d(a: Point, b: Point, c: Point) -> Orientation {
    let det_left = (b.x - a.x) * (c.y - a.y);
    let det_right = (b.y - a.y) * (c.x - a.x);
    let det = det_left - det_right;

    let bound = ORIENT_ERRBOUND * (det_left.abs() + det_right.abs());
    if det > bound {
        Orientation::POSITIVE
    } else if det < -bound {
        Orientation::NEGATIVE
    } else {
        Orientation::DEGENERATE
    }
}

/// Position of `p` relative to the circle through `a`, `b`, `c`.
///
/// The triangle `(a, b, c)` must be counter-clockwise; for a clockwise
/// triangle the INSIDE/OUTSIDE classification is inverted, as with the
/// standard lifted determinant. Returns [`InCircle::INSIDE`] only when `p`
/// is strictly inside the circumcircle beyond the numerical tolerance.
///
/// # Example
///
/// ```
/// use planemesh::geometry::point::Point;
/// use planemesh::geometry::predicates::{InCircle, in_circle};
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
/// // Circumcircle has center (0.5, 0.5) and passes through (1.0, 1.0).
/// assert_eq!(in_circle(a, b, c, Point::new(0.5, 0.5)), InCircle::INSIDE);
/// assert_eq!(in_circle(a, b, c, Point::new(1.0, 1.0)), InCircle::BOUNDARY);
/// assert_eq!(in_circle(a, b, c, Point::new(2.0, 2.0)), InCircle::OUTSIDE);
/// ```
#[must_use]
pub fn in_circle(a: Point, b: Point, c: Point, p: Point) -> InCircle {
    let adx = a.x - p.x;
    let ady = a.y - p.y;
    let bdx = b.x - p.x;
    let bdy = b.y - p.y;
    let cdx = c.x - p.x;
    let cdy = c.y - p.y;

    let alift = adx * adx + ady * ady;
    let blift = bdx * bdx + bdy * bdy;
    let clift = cdx * cdx + cdy * cdy;

    let bxcy = bdx * cdy;
    let bycx = bdy * cdx;
    let cxay = cdx * ady;
    let cyax = cdy * adx;
    let axby = adx * bdy;
    let aybx = ady * bdx;

    let det = alift * (bxcy - bycx) + blift * (cxay - cyax) + clift * (axby - aybx);

    let permanent = alift * (bxcy.abs() + bycx.abs())
        + blift * (cxay.abs() + cyax.abs())
        + clift * (axby.abs() + aybx.abs());
    let bound = INCIRCLE_ERRBOUND * permanent;

    if det > bound {
        InCircle::INSIDE
    } else if det < -bound {
        InCircle::OUTSIDE
    } else {
        InCircle::BOUNDARY
    }
}
