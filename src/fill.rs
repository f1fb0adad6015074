//! Region fill algorithms.
//!
//! Two strategies are provided:
//!
//! - **Boundary (flood) fill**: grows 4-connected from a seed through every
//!   pixel not in a barrier set. Uses an explicit stack, so large regions do
//!   not recurse.
//! - **Scanline fill**: sweeps integer rows, intersecting polygon edges and
//!   filling spans where the running winding count is non-zero. Circles use
//!   the chord length from the circle equation instead.
//!
//! Every fill is clipped to a [`CanvasExtent`], which bounds its cost even for
//! open boundaries or seeds outside any shape.

use crate::canvas::CanvasExtent;
use crate::geometry::{edges, quantize, Circle, Pixel, Point};
use std::collections::HashSet;
use tracing::warn;

/// Which fill algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FillStrategy {
    /// Stack-based 4-connected flood fill bounded by every drawn pixel.
    Boundary,
    /// Row-by-row fill from the target's geometry.
    Scanline,
}

// ============================================================================
// Boundary Fill
// ============================================================================

/// Flood fill from `seed` through pixels not in `barrier`.
///
/// The seed is rounded to the nearest pixel. Pixels outside `extent` are
/// never visited, so at most [`CanvasExtent::pixel_count`] pixels are emitted.
#[must_use]
pub fn flood_fill(seed: Point, barrier: &HashSet<Pixel>, extent: &CanvasExtent) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![seed.quantize()];
    let cap = extent.pixel_count();
    let mut leaked = false;

    while let Some(p) = stack.pop() {
        // Hard cap on the fill size; the extent check alone already keeps the
        // fill within it.
        if pixels.len() >= cap {
            break;
        }
        if !extent.contains_pixel(p) || visited.contains(&p) || barrier.contains(&p) {
            continue;
        }

        visited.insert(p);
        pixels.push(p);
        leaked |= extent.is_edge_pixel(p);

        stack.extend_from_slice(&p.neighbors4());
    }

    if leaked {
        warn!(
            seed = %seed.quantize(),
            filled = pixels.len(),
            "flood fill reached the canvas edge; boundary is not closed"
        );
    }

    pixels
}

// ============================================================================
// Scanline Fill
// ============================================================================

/// A scanline crossing: x position and edge direction (+1 rising, -1 falling).
#[derive(Debug, Clone, Copy, PartialEq)]
struct Crossing {
    x: f64,
    direction: i32,
}

/// Crossings of the closed vertex sequence with the row `y`, sorted by x.
///
/// Horizontal edges are skipped; an edge covers `min(y1, y2) <= y < max(y1, y2)`.
fn crossings(vertices: &[Point], y: f64) -> Vec<Crossing> {
    let mut out: Vec<Crossing> = edges(vertices)
        .filter(|(p1, p2)| p1.y != p2.y)
        .filter(|(p1, p2)| p1.y.min(p2.y) <= y && p1.y.max(p2.y) > y)
        .map(|(p1, p2)| Crossing {
            x: (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x,
            direction: if p1.y < p2.y { 1 } else { -1 },
        })
        .collect();

    out.sort_by(|a, b| a.x.total_cmp(&b.x));
    out
}

/// Fill a polygon with the non-zero winding rule, row by row.
///
/// Rows run from `round(min y)` to `round(max y)`; on each row the span
/// `[round(x_prev), round(x_cur))` between consecutive crossings is filled
/// whenever the winding count accumulated so far is non-zero. Concave and
/// self-intersecting polygons are handled. Output is clipped to `extent`.
#[must_use]
pub fn scanline_fill_polygon(vertices: &[Point], extent: &CanvasExtent) -> Vec<Pixel> {
    let mut pixels = Vec::new();
    if vertices.len() < 3 {
        return pixels;
    }

    let (y_lo, y_hi) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
    let (ext_y0, ext_y1) = extent.pixel_y_range();
    let (ext_x0, ext_x1) = extent.pixel_x_range();

    for y in quantize(y_lo).max(ext_y0)..=quantize(y_hi).min(ext_y1) {
        let row = crossings(vertices, f64::from(y));
        let mut winding = 0;

        for (i, crossing) in row.iter().enumerate() {
            if winding != 0 && i > 0 {
                let x_start = quantize(row[i - 1].x).max(ext_x0);
                let x_end = quantize(crossing.x).min(ext_x1 + 1);
                pixels.extend((x_start..x_end).map(|x| Pixel::new(x, y)));
            }
            winding += crossing.direction;
        }
    }

    pixels
}

/// Fill a circle row by row using the half-chord length.
///
/// Each row `y` in `round(cy - r) ..= round(cy + r)` gets the span
/// `round(cx - h) ..= round(cx + h)` with `h = sqrt(r^2 - (y - cy)^2)`.
/// Output is clipped to `extent`.
#[must_use]
pub fn scanline_fill_circle(circle: &Circle, extent: &CanvasExtent) -> Vec<Pixel> {
    let Point { x: cx, y: cy } = circle.center();
    let r = circle.radius();
    let (ext_y0, ext_y1) = extent.pixel_y_range();
    let (ext_x0, ext_x1) = extent.pixel_x_range();

    let mut pixels = Vec::new();
    for y in quantize(cy - r).max(ext_y0)..=quantize(cy + r).min(ext_y1) {
        let dy = f64::from(y) - cy;
        let half = (r * r - dy * dy).max(0.0).sqrt();
        let xs = quantize(cx - half).max(ext_x0);
        let xe = quantize(cx + half).min(ext_x1);
        pixels.extend((xs..=xe).map(|x| Pixel::new(x, y)));
    }

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{rasterize_circle, rasterize_polygon};

    fn big_extent() -> CanvasExtent {
        CanvasExtent::centered(400.0, 400.0)
    }

    fn square(side: f64) -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ]
    }

    #[test]
    fn test_flood_fill_inside_square_outline() {
        let barrier: HashSet<Pixel> = rasterize_polygon(&square(10.0)).into_iter().collect();
        let filled = flood_fill(Point::new(5.0, 5.0), &barrier, &big_extent());

        // 9x9 interior
        assert_eq!(filled.len(), 81);
        assert!(filled.iter().all(|p| (1..=9).contains(&p.x) && (1..=9).contains(&p.y)));
        assert!(filled.iter().all(|p| !barrier.contains(p)));
    }

    #[test]
    fn test_flood_fill_seed_on_barrier_is_empty() {
        let barrier: HashSet<Pixel> = rasterize_polygon(&square(10.0)).into_iter().collect();
        assert!(flood_fill(Point::new(0.0, 4.0), &barrier, &big_extent()).is_empty());
    }

    #[test]
    fn test_flood_fill_no_duplicates() {
        let barrier: HashSet<Pixel> = rasterize_circle(Point::ORIGIN, 12.0).into_iter().collect();
        let filled = flood_fill(Point::ORIGIN, &barrier, &big_extent());
        let unique: HashSet<Pixel> = filled.iter().copied().collect();
        assert_eq!(unique.len(), filled.len());
        assert!(!filled.is_empty());
    }

    #[test]
    fn test_flood_fill_open_region_is_bounded_by_canvas() {
        let extent = CanvasExtent::centered(20.0, 10.0);
        let filled = flood_fill(Point::ORIGIN, &HashSet::new(), &extent);
        assert_eq!(filled.len(), extent.pixel_count());
        assert!(filled.iter().all(|p| extent.contains_pixel(*p)));
    }

    #[test]
    fn test_flood_fill_seed_outside_canvas() {
        let extent = CanvasExtent::centered(20.0, 10.0);
        assert!(flood_fill(Point::new(100.0, 0.0), &HashSet::new(), &extent).is_empty());
    }

    #[test]
    fn test_scanline_square() {
        let filled = scanline_fill_polygon(&square(10.0), &big_extent());
        // Rows 0..=10, row 10 has no crossings (half-open edges); each row spans [0, 10).
        assert_eq!(filled.len(), 100);
        assert!(filled.iter().all(|p| (0..10).contains(&p.x) && (0..10).contains(&p.y)));
    }

    #[test]
    fn test_scanline_triangle_rows() {
        let tri = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)];
        let filled = scanline_fill_polygon(&tri, &big_extent());
        let row = |y: i32| filled.iter().filter(|p| p.y == y).count();
        assert_eq!(row(0), 10);
        assert_eq!(row(1), 9);
        assert_eq!(row(5), 5);
        assert_eq!(row(10), 0);
    }

    #[test]
    fn test_scanline_concave_polygon_leaves_notch_empty() {
        // U shape: notch between x=3 and x=7 above y=3.
        let u = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(7.0, 10.0),
            Point::new(7.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let filled: HashSet<Pixel> = scanline_fill_polygon(&u, &big_extent()).into_iter().collect();
        assert!(filled.contains(&Pixel::new(1, 8)));
        assert!(filled.contains(&Pixel::new(8, 8)));
        assert!(!filled.contains(&Pixel::new(5, 8)));
        assert!(filled.contains(&Pixel::new(5, 1)));
    }

    #[test]
    fn test_scanline_star_fills_core_under_nonzero() {
        let star = [
            Point::new(0.0, 30.0),
            Point::new(20.0, -25.0),
            Point::new(-20.0, 10.0),
            Point::new(20.0, 10.0),
            Point::new(-20.0, -25.0),
        ];
        let filled: HashSet<Pixel> = scanline_fill_polygon(&star, &big_extent()).into_iter().collect();
        assert!(filled.contains(&Pixel::new(0, 0)));
    }

    #[test]
    fn test_scanline_polygon_clipped_to_extent() {
        let extent = CanvasExtent::centered(10.0, 10.0);
        let filled = scanline_fill_polygon(&square(100.0), &extent);
        assert!(!filled.is_empty());
        assert!(filled.iter().all(|p| extent.contains_pixel(*p)));
    }

    #[test]
    fn test_scanline_needs_three_vertices() {
        assert!(scanline_fill_polygon(&square(10.0)[..2], &big_extent()).is_empty());
    }

    #[test]
    fn test_scanline_circle_rows() {
        let circle = Circle::new(Point::ORIGIN, 5.0).unwrap();
        let filled = scanline_fill_circle(&circle, &big_extent());
        let row = |y: i32| filled.iter().filter(|p| p.y == y).count();
        assert_eq!(row(0), 11);
        assert_eq!(row(5), 1);
        assert_eq!(row(-5), 1);
        assert_eq!(row(6), 0);
        // sqrt(25 - 9) = 4
        assert_eq!(row(3), 9);
    }

    #[test]
    fn test_scanline_circle_fractional_center() {
        let circle = Circle::new(Point::new(0.5, 0.5), 2.0).unwrap();
        let filled = scanline_fill_circle(&circle, &big_extent());
        assert!(!filled.is_empty());
        assert!(filled.iter().all(|p| (-2..=3).contains(&p.y)));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::containment::point_in_polygon;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Scanline fill agrees with the winding test on integer lattice points
        /// for polygons with integer vertices.
        #[test]
        fn prop_scanline_matches_point_in_polygon(
            verts in prop::collection::vec((-20i32..20, -20i32..20), 3..7)
        ) {
            let vertices: Vec<Point> = verts
                .iter()
                .map(|&(x, y)| Point::new(f64::from(x), f64::from(y)))
                .collect();
            let extent = CanvasExtent::centered(100.0, 100.0);
            let filled: HashSet<Pixel> = scanline_fill_polygon(&vertices, &extent).into_iter().collect();

            for p in &filled {
                prop_assert!((-20..20).contains(&p.x) && (-20..20).contains(&p.y));
            }
            for y in -20..20 {
                for x in -20..20 {
                    let px = Pixel::new(x, y);
                    // Spans round crossing positions, so only check lattice points
                    // at least half a pixel away from every crossing on the row.
                    let row = crossings(&vertices, f64::from(y));
                    if row.iter().any(|c| (c.x - f64::from(x)).abs() <= 0.5) {
                        continue;
                    }
                    prop_assert_eq!(
                        filled.contains(&px),
                        point_in_polygon(Point::from(px), &vertices),
                        "disagreement at {}", px
                    );
                }
            }
        }
    }
}
