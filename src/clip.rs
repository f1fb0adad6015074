//! Cohen–Sutherland segment clipping.
//!
//! Each endpoint gets a 4-bit [`RegionCode`] relative to the [`ClipWindow`].
//! The loop trivially accepts when both codes are empty, trivially rejects
//! when they share a bit, and otherwise moves one outside endpoint onto a
//! window boundary chosen in the fixed priority TOP, BOTTOM, RIGHT, LEFT.
//!
//! # References
//!
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive Computer Graphics*.

use crate::geometry::{ClipWindow, Point};
use std::ops::{BitAnd, BitOr};

/// Upper bound on clip iterations.
///
/// Finite input converges in at most four; the cap only matters for NaN.
const MAX_ITERATIONS: u32 = 16;

/// Position of a point relative to the four half-planes of a clip window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RegionCode(u8);

impl RegionCode {
    /// Inside the window.
    pub const INSIDE: Self = Self(0);
    /// Left of `x_min`.
    pub const LEFT: Self = Self(1);
    /// Right of `x_max`.
    pub const RIGHT: Self = Self(2);
    /// Below `y_min`.
    pub const BOTTOM: Self = Self(4);
    /// Above `y_max`.
    pub const TOP: Self = Self(8);

    /// Classify a point against a window.
    #[must_use]
    pub fn of(point: Point, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;
        if point.x < window.x_min {
            code = code | Self::LEFT;
        } else if point.x > window.x_max {
            code = code | Self::RIGHT;
        }
        if point.y < window.y_min {
            code = code | Self::BOTTOM;
        } else if point.y > window.y_max {
            code = code | Self::TOP;
        }
        code
    }

    /// True if no bit is set.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for RegionCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for RegionCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Result of clipping a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipOutcome {
    /// The visible part of the segment, endpoints in input order.
    Accepted(Point, Point),
    /// Nothing of the segment lies inside the window.
    Rejected,
}

impl ClipOutcome {
    /// The clipped endpoints, if any part is visible.
    #[must_use]
    pub fn endpoints(self) -> Option<(Point, Point)> {
        match self {
            Self::Accepted(a, b) => Some((a, b)),
            Self::Rejected => None,
        }
    }

    /// True if the segment was rejected.
    #[must_use]
    pub fn is_rejected(self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Clip the segment `p1 -> p2` against `window`.
///
/// A boundary whose axis delta between the current endpoints is zero cannot
/// be intersected; such segments are [`ClipOutcome::Rejected`], as are
/// segments with non-finite coordinates.
#[must_use]
pub fn clip_segment(p1: Point, p2: Point, window: &ClipWindow) -> ClipOutcome {
    let (mut a, mut b) = (p1, p2);
    let mut code_a = RegionCode::of(a, window);
    let mut code_b = RegionCode::of(b, window);

    for _ in 0..MAX_ITERATIONS {
        if (code_a | code_b).is_inside() {
            return ClipOutcome::Accepted(a, b);
        }
        if !(code_a & code_b).is_inside() {
            return ClipOutcome::Rejected;
        }

        let outside_is_a = !code_a.is_inside();
        let out = if outside_is_a { code_a } else { code_b };

        let Some(clipped) = boundary_intersection(a, b, out, window) else {
            return ClipOutcome::Rejected;
        };

        if outside_is_a {
            a = clipped;
            code_a = RegionCode::of(a, window);
        } else {
            b = clipped;
            code_b = RegionCode::of(b, window);
        }
    }

    ClipOutcome::Rejected
}

/// Intersect the line through `a`, `b` with the highest-priority boundary in `out`.
///
/// Returns `None` on a zero axis delta or a non-finite intersection.
fn boundary_intersection(a: Point, b: Point, out: RegionCode, window: &ClipWindow) -> Option<Point> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    let point = if out.contains(RegionCode::TOP) || out.contains(RegionCode::BOTTOM) {
        if dy == 0.0 {
            return None;
        }
        let y = if out.contains(RegionCode::TOP) {
            window.y_max
        } else {
            window.y_min
        };
        Point::new(a.x + dx * (y - a.y) / dy, y)
    } else {
        if dx == 0.0 {
            return None;
        }
        let x = if out.contains(RegionCode::RIGHT) {
            window.x_max
        } else {
            window.x_min
        };
        Point::new(x, a.y + dy * (x - a.x) / dx)
    };

    point.is_finite().then_some(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ClipWindow {
        ClipWindow::new(-10.0, -10.0, 10.0, 10.0).unwrap()
    }

    #[test]
    fn test_region_codes() {
        let w = window();
        assert_eq!(RegionCode::of(Point::ORIGIN, &w), RegionCode::INSIDE);
        assert_eq!(RegionCode::of(Point::new(-11.0, 0.0), &w), RegionCode::LEFT);
        assert_eq!(RegionCode::of(Point::new(11.0, 0.0), &w), RegionCode::RIGHT);
        assert_eq!(RegionCode::of(Point::new(0.0, -11.0), &w), RegionCode::BOTTOM);
        assert_eq!(RegionCode::of(Point::new(0.0, 11.0), &w), RegionCode::TOP);
        assert_eq!(
            RegionCode::of(Point::new(11.0, 11.0), &w),
            RegionCode::TOP | RegionCode::RIGHT
        );
        // Boundary is inside.
        assert!(RegionCode::of(Point::new(10.0, -10.0), &w).is_inside());
    }

    #[test]
    fn test_fully_inside_is_unchanged() {
        let (p1, p2) = (Point::new(-3.5, 2.0), Point::new(4.0, -7.25));
        assert_eq!(clip_segment(p1, p2, &window()), ClipOutcome::Accepted(p1, p2));
    }

    #[test]
    fn test_fully_outside_one_side_is_rejected() {
        let outcome = clip_segment(Point::new(-20.0, 15.0), Point::new(20.0, 12.0), &window());
        assert!(outcome.is_rejected());
    }

    #[test]
    fn test_crossing_one_boundary_lands_exactly_on_it() {
        let outcome = clip_segment(Point::new(0.0, 0.0), Point::new(30.0, 7.0), &window());
        let (a, b) = outcome.endpoints().unwrap();
        assert_eq!(a, Point::ORIGIN);
        assert_eq!(b.x, 10.0);
        assert!((b.y - 7.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_both_sides() {
        let outcome = clip_segment(Point::new(-20.0, 0.0), Point::new(20.0, 0.0), &window());
        assert_eq!(
            outcome,
            ClipOutcome::Accepted(Point::new(-10.0, 0.0), Point::new(10.0, 0.0))
        );
    }

    #[test]
    fn test_top_has_priority_over_right() {
        // First endpoint is outside both TOP and RIGHT; TOP is clipped first.
        let outcome = clip_segment(Point::new(12.0, 20.0), Point::new(0.0, 0.0), &window());
        let (a, _) = outcome.endpoints().unwrap();
        assert_eq!(a.y, 10.0);
        assert!((a.x - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_corner_miss_is_rejected() {
        // Passes outside the top-right corner without sharing an outcode bit.
        let outcome = clip_segment(Point::new(5.0, 20.0), Point::new(20.0, 5.0), &window());
        assert!(outcome.is_rejected());
    }

    #[test]
    fn test_degenerate_segment() {
        let inside = Point::new(1.0, 1.0);
        assert_eq!(
            clip_segment(inside, inside, &window()),
            ClipOutcome::Accepted(inside, inside)
        );
        let outside = Point::new(50.0, 1.0);
        assert!(clip_segment(outside, outside, &window()).is_rejected());
    }

    #[test]
    fn test_zero_delta_boundary_is_rejected() {
        let w = window();
        let a = Point::new(0.0, 20.0);
        assert_eq!(boundary_intersection(a, Point::new(5.0, 20.0), RegionCode::TOP, &w), None);
        assert_eq!(boundary_intersection(a, Point::new(0.0, 30.0), RegionCode::LEFT, &w), None);
    }

    #[test]
    fn test_nan_input_is_rejected() {
        let outcome = clip_segment(Point::new(f64::NAN, 0.0), Point::new(20.0, 0.0), &window());
        assert!(outcome.is_rejected());
    }
}
