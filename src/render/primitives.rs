//! Primitive rasterization functions.
//!
//! Every function here is pure: it maps geometric parameters to an ordered
//! list of integer pixels in logical coordinates. Inputs are quantized with
//! [`quantize`](crate::geometry::quantize) before any integer arithmetic.

use crate::geometry::{
    edges, quantize, Circle, CubicBezier, Line, Pixel, Point, Polygon, MAX_COORDINATE,
};

/// Default number of parameter steps used to sample a Bezier curve.
///
/// `t = i / steps` for `i = 0..=steps`, so the default yields 101 samples.
pub const DEFAULT_CURVE_STEPS: usize = 100;

/// Upper bound on the parameter steps of a single curve.
pub const MAX_CURVE_STEPS: usize = 10_000;

/// Trait for primitives that convert to a pixel set.
pub trait Rasterize {
    /// Rasterize this primitive.
    fn rasterize(&self) -> Vec<Pixel>;
}

// ============================================================================
// Line Rasterization
// ============================================================================

/// Rasterize a segment using Bresenham's algorithm.
///
/// Both endpoints are rounded to the nearest pixel first. The result runs
/// from `p1` to `p2` inclusive and is 8-connected. Swapping the endpoints may
/// select different pixels on ties. An endpoint that is not finite or lies
/// outside [`MAX_COORDINATE`] yields an empty path.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
#[must_use]
pub fn rasterize_line(p1: Point, p2: Point) -> Vec<Pixel> {
    if !(p1.in_domain() && p2.in_domain()) {
        return Vec::new();
    }
    let start = p1.quantize();
    let end = p2.quantize();
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));

    let dx = (x1 - i64::from(start.x)).abs();
    let dy = (y1 - i64::from(start.y)).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = i64::from(start.x);
    let mut y = i64::from(start.y);
    let mut pixels = Vec::with_capacity((dx.max(dy) + 1) as usize);

    loop {
        // x and y stay between the two quantized endpoints.
        pixels.push(Pixel::new(x as i32, y as i32));

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    pixels
}

impl Rasterize for Line {
    fn rasterize(&self) -> Vec<Pixel> {
        rasterize_line(self.start, self.end)
    }
}

// ============================================================================
// Circle Rasterization
// ============================================================================

/// Rasterize a circle outline using the midpoint algorithm.
///
/// One octant is computed and mirrored eight ways, so points on the
/// diagonals and axes appear more than once. A zero radius yields the center
/// pixel; a negative radius yields nothing, as does a center or radius that is
/// not finite or exceeds [`MAX_COORDINATE`].
#[must_use]
pub fn rasterize_circle(center: Point, radius: f64) -> Vec<Pixel> {
    if !(center.in_domain() && radius.abs() <= MAX_COORDINATE) {
        return Vec::new();
    }
    let c = center.quantize();
    let radius = quantize(radius);

    if radius <= 0 {
        return if radius == 0 { vec![c] } else { Vec::new() };
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;
    // The octant walk takes about r / sqrt(2) steps.
    let mut pixels = Vec::with_capacity(8 * (radius as usize * 3 / 4 + 1));

    plot_octants(&mut pixels, c, x, y);
    while x > y {
        y += 1;
        if err <= 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
        plot_octants(&mut pixels, c, x, y);
    }

    pixels
}

/// Push the eight symmetric images of `(x, y)` around `c`.
#[inline]
fn plot_octants(pixels: &mut Vec<Pixel>, c: Pixel, x: i32, y: i32) {
    pixels.extend_from_slice(&[
        Pixel::new(c.x + x, c.y + y),
        Pixel::new(c.x - x, c.y + y),
        Pixel::new(c.x + x, c.y - y),
        Pixel::new(c.x - x, c.y - y),
        Pixel::new(c.x + y, c.y + x),
        Pixel::new(c.x - y, c.y + x),
        Pixel::new(c.x + y, c.y - x),
        Pixel::new(c.x - y, c.y - x),
    ]);
}

impl Rasterize for Circle {
    fn rasterize(&self) -> Vec<Pixel> {
        rasterize_circle(self.center(), self.radius())
    }
}

// ============================================================================
// Curve Rasterization
// ============================================================================

/// Evaluate a cubic Bezier curve at `t` and round to the nearest pixel.
#[must_use]
pub fn evaluate_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Pixel {
    let omt = 1.0 - t;
    let b0 = omt * omt * omt;
    let b1 = 3.0 * omt * omt * t;
    let b2 = 3.0 * omt * t * t;
    let b3 = t * t * t;

    Point::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
    .quantize()
}

/// Rasterize a cubic Bezier curve as a continuous pixel path.
///
/// The curve is sampled uniformly at `t = i / steps` for `i = 0..=steps` and
/// consecutive samples are joined with [`rasterize_line`]. `steps` is clamped
/// to `1..=MAX_CURVE_STEPS`.
#[must_use]
pub fn rasterize_curve(curve: &CubicBezier, steps: usize) -> Vec<Pixel> {
    let steps = steps.clamp(1, MAX_CURVE_STEPS);
    let [p0, p1, p2, p3] = curve.points;

    let samples: Vec<Point> = (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Point::from(evaluate_bezier(p0, p1, p2, p3, t))
        })
        .collect();

    rasterize_polyline(&samples, false)
}

impl Rasterize for CubicBezier {
    fn rasterize(&self) -> Vec<Pixel> {
        rasterize_curve(self, DEFAULT_CURVE_STEPS)
    }
}

// ============================================================================
// Polyline / Polygon Rasterization
// ============================================================================

/// Connect consecutive points with Bresenham segments.
///
/// When `closed` is true the last point is also joined to the first. The
/// pixel shared by two consecutive segments is emitted once.
#[must_use]
pub fn rasterize_polyline(points: &[Point], closed: bool) -> Vec<Pixel> {
    let mut pixels = Vec::new();

    let mut push_segment = |a: Point, b: Point| {
        let segment = rasterize_line(a, b);
        let skip = usize::from(pixels.last() == segment.first());
        pixels.extend_from_slice(&segment[skip..]);
    };

    match points {
        [] => {}
        [only] => push_segment(*only, *only),
        _ if closed => edges(points).for_each(|(a, b)| push_segment(a, b)),
        _ => points.windows(2).for_each(|w| push_segment(w[0], w[1])),
    }

    pixels
}

/// Rasterize the outline of a polygon (not filled).
#[must_use]
pub fn rasterize_polygon(vertices: &[Point]) -> Vec<Pixel> {
    rasterize_polyline(vertices, true)
}

impl Rasterize for Polygon {
    fn rasterize(&self) -> Vec<Pixel> {
        rasterize_polygon(self.vertices())
    }
}

// ============================================================================
// Tests
// ============================================================================


// ============================================================================
// Property-based tests with proptest
// ============================================================================
