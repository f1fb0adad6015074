//! Point containment tests.
//!
//! Polygons use the non-zero winding rule with a half-open y range per edge,
//! so a point level with a shared vertex is counted by exactly one of the two
//! edges meeting there. Circles exclude their boundary.

use crate::geometry::{edges, Circle, Point};

/// Signed area test: positive when `point` lies left of the directed edge `a -> b`.
#[inline]
fn is_left(a: Point, b: Point, point: Point) -> f64 {
    (b.x - a.x) * (point.y - a.y) - (b.y - a.y) * (point.x - a.x)
}

/// Winding number of the closed vertex sequence around `point`.
#[must_use]
pub fn winding_number(point: Point, vertices: &[Point]) -> i32 {
    let mut winding = 0;
    for (p1, p2) in edges(vertices) {
        if p1.y <= point.y {
            if p2.y > point.y && is_left(p1, p2, point) > 0.0 {
                winding += 1;
            }
        } else if p2.y <= point.y && is_left(p1, p2, point) < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Point-in-polygon test using the non-zero winding rule.
///
/// Returns `false` for fewer than three vertices.
#[must_use]
pub fn point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    vertices.len() >= 3 && winding_number(point, vertices) != 0
}

/// Point-in-circle test; points on the circumference are outside.
#[must_use]
pub fn point_in_circle(point: Point, circle: &Circle) -> bool {
    point.distance(circle.center()) < circle.radius()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    fn star() -> Vec<Point> {
        vec![
            Point::new(0.0, 30.0),
            Point::new(20.0, -25.0),
            Point::new(-20.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(-20.0, -25.0),
        ]
    }

    #[test]
    fn test_square_inside_outside() {
        assert!(point_in_polygon(Point::new(5.0, 5.0), &square()));
        assert!(!point_in_polygon(Point::new(15.0, 15.0), &square()));
        assert!(!point_in_polygon(Point::new(-1.0, 5.0), &square()));
    }

    #[test]
    fn test_orientation_does_not_matter() {
        let mut cw = square();
        cw.reverse();
        assert_eq!(winding_number(Point::new(5.0, 5.0), &square()), 1);
        assert_eq!(winding_number(Point::new(5.0, 5.0), &cw), -1);
        assert!(point_in_polygon(Point::new(5.0, 5.0), &cw));
    }

    #[test]
    fn test_edge_convention() {
        // Bottom edge is inside (half-open y range starts there), top edge is not.
        assert!(point_in_polygon(Point::new(5.0, 0.0), &square()));
        assert!(!point_in_polygon(Point::new(5.0, 10.0), &square()));
        // Left edge is inside, right edge has a zero cross product.
        assert!(point_in_polygon(Point::new(0.0, 5.0), &square()));
        assert!(!point_in_polygon(Point::new(10.0, 5.0), &square()));
    }

    #[test]
    fn test_star_center_is_inside_under_nonzero() {
        // The pentagram's core has winding 2; even-odd would call it outside.
        let center = Point::new(0.0, 0.0);
        assert_eq!(winding_number(center, &star()).abs(), 2);
        assert!(point_in_polygon(center, &star()));
    }

    #[test]
    fn test_degenerate_vertex_lists() {
        assert!(!point_in_polygon(Point::ORIGIN, &[]));
        assert!(!point_in_polygon(
            Point::ORIGIN,
            &[Point::new(-1.0, -1.0), Point::new(1.0, 1.0)]
        ));
    }

    #[test]
    fn test_point_in_circle_boundary_is_outside() {
        let c = Circle::new(Point::new(1.0, 1.0), 5.0).unwrap();
        assert!(point_in_circle(Point::new(1.0, 1.0), &c));
        assert!(point_in_circle(Point::new(4.0, 4.0), &c));
        assert!(!point_in_circle(Point::new(6.0, 1.0), &c));
        assert!(!point_in_circle(Point::new(4.0, 5.0), &c));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        /// Inside an axis-aligned rectangle iff strictly within its half-open box.
        #[test]
        fn prop_rectangle_matches_box(
            x in -20.0f64..20.0,
            y in -20.0f64..20.0,
        ) {
            let rect = [
                Point::new(-10.0, -5.0),
                Point::new(10.0, -5.0),
                Point::new(10.0, 5.0),
                Point::new(-10.0, 5.0),
            ];
            let expected = (-10.0..10.0).contains(&x) && (-5.0..5.0).contains(&y);
            prop_assert_eq!(point_in_polygon(Point::new(x, y), &rect), expected);
        }
    }
}
