//! Geometric primitives in logical coordinates.
//!
//! Provides the real-valued input types consumed by the rasterizers and the
//! integer [`Pixel`] type they produce. All conversion from real to integer
//! coordinates goes through [`quantize`].
//!
//! Validating constructors only accept coordinates within
//! [`MAX_COORDINATE`] of the origin, which keeps every quantized value and
//! every rasterizer error term far from the `i32` limits.

use crate::error::{ensure_finite, Error, Result};
use std::fmt;

/// Largest coordinate magnitude (and radius) accepted by the kernel.
pub const MAX_COORDINATE: f64 = 1.0e6;

/// Reject values that are not finite or lie outside `±MAX_COORDINATE`.
pub(crate) fn ensure_coordinate(name: &'static str, value: f64) -> Result<f64> {
    ensure_finite(name, value)?;
    if value.abs() > MAX_COORDINATE {
        return Err(Error::invalid(
            name,
            format!("{value} is outside the coordinate domain ±{MAX_COORDINATE}"),
        ));
    }
    Ok(value)
}

/// Point form of [`ensure_coordinate`].
pub(crate) fn ensure_point(name: &'static str, point: Point) -> Result<Point> {
    if point.in_domain() {
        Ok(point)
    } else {
        Err(Error::invalid(
            name,
            format!(
                "({}, {}) must be finite and within ±{MAX_COORDINATE}",
                point.x, point.y
            ),
        ))
    }
}

/// Round a logical coordinate to the nearest integer, half away from zero.
///
/// This is the single quantization policy of the crate.
#[inline]
#[must_use]
pub fn quantize(value: f64) -> i32 {
    value.round() as i32
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Offset the point by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Round to the nearest pixel.
    #[must_use]
    pub fn quantize(self) -> Pixel {
        Pixel::new(quantize(self.x), quantize(self.y))
    }

    /// True if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True if both coordinates are finite and within [`MAX_COORDINATE`].
    #[must_use]
    pub fn in_domain(self) -> bool {
        self.x.abs() <= MAX_COORDINATE && self.y.abs() <= MAX_COORDINATE
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pixel> for Point {
    fn from(px: Pixel) -> Self {
        Self::new(f64::from(px.x), f64::from(px.y))
    }
}

/// A single raster cell with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis-aligned neighbours (right, left, up, down).
    #[must_use]
    pub const fn neighbors4(self) -> [Self; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line whose endpoints are checked against the coordinate domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if an endpoint is not finite or lies
    /// outside [`MAX_COORDINATE`].
    pub fn try_new(start: Point, end: Point) -> Result<Self> {
        Ok(Self::new(ensure_point("start", start)?, ensure_point("end", end)?))
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circle with a non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the radius is negative or any
    /// value is not finite or outside [`MAX_COORDINATE`]. A zero radius is
    /// accepted and degenerates to a point.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        ensure_coordinate("radius", radius)?;
        if radius < 0.0 {
            return Err(Error::invalid("radius", format!("must not be negative, got {radius}")));
        }
        let center = ensure_point("center", center)?;
        Ok(Self { center, radius })
    }

    /// Construct from values already known to be valid.
    pub(crate) const fn new_unchecked(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle centered at `center` passing through `edge`.
    pub fn through(center: Point, edge: Point) -> Result<Self> {
        Self::new(center, center.distance(edge))
    }

    /// Center point.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius in logical units.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

/// A closed polygon with at least three vertices.
///
/// The last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Minimum number of vertices.
    pub const MIN_VERTICES: usize = 3;

    /// Create a polygon.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] with fewer than three vertices or
    /// coordinates that are not finite or outside [`MAX_COORDINATE`].
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        if vertices.len() < Self::MIN_VERTICES {
            return Err(Error::invalid(
                "vertices",
                format!(
                    "a polygon needs at least {} vertices, got {}",
                    Self::MIN_VERTICES,
                    vertices.len()
                ),
            ));
        }
        for &v in &vertices {
            ensure_point("vertices", v)?;
        }
        Ok(Self { vertices })
    }

    /// Construct from vertices already known to be valid.
    pub(crate) fn new_unchecked(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= Self::MIN_VERTICES);
        Self { vertices }
    }

    /// The ordered vertex list.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Directed edges `(p_i, p_{i+1})`, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        edges(&self.vertices)
    }
}

/// Directed cyclic edges of a vertex sequence.
pub(crate) fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

/// A cubic Bezier curve defined by four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Control points `p0..p3`; the curve starts at `p0` and ends at `p3`.
    pub points: [Point; 4],
}

impl CubicBezier {
    /// Create a curve from its four control points.
    #[must_use]
    pub const fn new(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Curve from two endpoints and one or two inner control points.
    ///
    /// A single control point is used for both inner points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless `controls` holds one or two
    /// points and every point is finite and within [`MAX_COORDINATE`].
    pub fn from_endpoints(start: Point, end: Point, controls: &[Point]) -> Result<Self> {
        ensure_point("start", start)?;
        ensure_point("end", end)?;
        for &c in controls {
            ensure_point("controls", c)?;
        }
        match controls {
            [c] => Ok(Self::new(start, *c, *c, end)),
            [c1, c2] => Ok(Self::new(start, *c1, *c2, end)),
            _ => Err(Error::invalid(
                "controls",
                format!("expected 1 or 2 control points, got {}", controls.len()),
            )),
        }
    }
}

/// An axis-aligned clip window with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    /// Left edge.
    pub x_min: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Top edge.
    pub y_max: f64,
}

impl ClipWindow {
    /// Create a clip window from its bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a minimum exceeds its maximum or a
    /// bound is not finite or outside [`MAX_COORDINATE`].
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        for (name, v) in [("x_min", x_min), ("y_min", y_min), ("x_max", x_max), ("y_max", y_max)] {
            ensure_coordinate(name, v)?;
        }
        if x_min > x_max {
            return Err(Error::invalid("x_min", format!("{x_min} exceeds x_max {x_max}")));
        }
        if y_min > y_max {
            return Err(Error::invalid("y_min", format!("{y_min} exceeds y_max {y_max}")));
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Window spanned by two arbitrary opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Result<Self> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Check if a point lies inside the window (bounds inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }

    /// Check if a pixel lies inside the window (bounds inclusive).
    #[must_use]
    pub fn contains_pixel(&self, px: Pixel) -> bool {
        self.contains(Point::from(px))
    }

    /// Corners in outline order: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x_min, self.y_max),
            Point::new(self.x_max, self.y_max),
            Point::new(self.x_max, self.y_min),
            Point::new(self.x_min, self.y_min),
        ]
    }
}
