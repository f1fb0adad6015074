//! Shape variants and their shared capabilities.
//!
//! Every drawable thing in a session is a [`Shape`]. Geometric variants can be
//! rasterized from their parameters; derived variants (`Fill`, `Projection`)
//! carry their pixels directly because they have no reusable geometry.

use crate::containment::{point_in_circle, point_in_polygon};
use crate::geometry::{Circle, ClipWindow, CubicBezier, Line, Pixel, Point, Polygon};
use crate::render::{rasterize_curve, rasterize_polygon, Rasterize};
use std::fmt;

/// Stable handle to a shape in a session's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Wrap a raw handle value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discriminant of a [`Shape`], handy for filtering and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Straight segment.
    Line,
    /// Circle outline.
    Circle,
    /// Closed polygon outline.
    Polygon,
    /// Cubic Bezier curve.
    Curve,
    /// Filled region.
    Fill,
    /// Clip window outline.
    ClipWindow,
    /// Composite projection drawing.
    Projection,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Polygon => "polygon",
            Self::Curve => "curve",
            Self::Fill => "fill",
            Self::ClipWindow => "clip window",
            Self::Projection => "projection",
        };
        f.write_str(name)
    }
}

/// A drawable shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight segment.
    Line(Line),
    /// Circle outline.
    Circle(Circle),
    /// Closed polygon outline.
    Polygon(Polygon),
    /// Cubic Bezier curve sampled with `steps` uniform parameter steps.
    Curve {
        /// Control points.
        bezier: CubicBezier,
        /// Number of parameter steps.
        steps: usize,
    },
    /// Derived fill pixels.
    Fill(Vec<Pixel>),
    /// Clip window applied to the session.
    ClipWindow(ClipWindow),
    /// Composite projection pixels.
    Projection(Vec<Pixel>),
}

impl Shape {
    /// The variant tag.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Line(_) => ShapeKind::Line,
            Self::Circle(_) => ShapeKind::Circle,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Curve { .. } => ShapeKind::Curve,
            Self::Fill(_) => ShapeKind::Fill,
            Self::ClipWindow(_) => ShapeKind::ClipWindow,
            Self::Projection(_) => ShapeKind::Projection,
        }
    }

    /// Containment test where the shape encloses an area.
    ///
    /// Returns `None` for shapes without an interior (lines, curves, derived
    /// pixel sets, clip windows).
    #[must_use]
    pub fn contains(&self, point: Point) -> Option<bool> {
        match self {
            Self::Polygon(polygon) => Some(point_in_polygon(point, polygon.vertices())),
            Self::Circle(circle) => Some(point_in_circle(point, circle)),
            Self::Line(_)
            | Self::Curve { .. }
            | Self::Fill(_)
            | Self::ClipWindow(_)
            | Self::Projection(_) => None,
        }
    }

    /// The polygon geometry, if this is a polygon.
    #[must_use]
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl Rasterize for Shape {
    fn rasterize(&self) -> Vec<Pixel> {
        match self {
            Self::Line(line) => line.rasterize(),
            Self::Circle(circle) => circle.rasterize(),
            Self::Polygon(polygon) => polygon.rasterize(),
            Self::Curve { bezier, steps } => rasterize_curve(bezier, *steps),
            Self::Fill(pixels) | Self::Projection(pixels) => pixels.clone(),
            Self::ClipWindow(window) => rasterize_polygon(&window.corners()),
        }
    }
}

/// A shape in the history together with its current pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEntry {
    pub(crate) id: ShapeId,
    pub(crate) shape: Shape,
    pub(crate) pixels: Vec<Pixel>,
}

impl ShapeEntry {
    /// Rasterize `shape` and wrap it under `id`.
    pub(crate) fn new(id: ShapeId, shape: Shape) -> Self {
        let pixels = shape.rasterize();
        Self { id, shape, pixels }
    }

    /// Stable handle.
    #[must_use]
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Current geometry.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Current pixels.
    ///
    /// Equal to `shape().rasterize()` unless a clip window trimmed them.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Replace the geometry and recompute the pixels from scratch.
    pub(crate) fn replace_shape(&mut self, shape: Shape) {
        self.pixels = shape.rasterize();
        self.shape = shape;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_display() {
        let shape = Shape::Fill(vec![Pixel::new(0, 0)]);
        assert_eq!(shape.kind(), ShapeKind::Fill);
        assert_eq!(ShapeKind::ClipWindow.to_string(), "clip window");
        assert_eq!(ShapeId::from_raw(3).to_string(), "#3");
    }

    #[test]
    fn test_contains_only_for_closed_shapes() {
        let circle = Shape::Circle(Circle::new(Point::ORIGIN, 5.0).unwrap());
        assert_eq!(circle.contains(Point::new(1.0, 1.0)), Some(true));
        assert_eq!(circle.contains(Point::new(9.0, 1.0)), Some(false));

        let line = Shape::Line(Line::from_coords(0.0, 0.0, 5.0, 5.0));
        assert_eq!(line.contains(Point::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_clip_window_rasterizes_as_rectangle_outline() {
        let window = ClipWindow::new(0.0, 0.0, 4.0, 2.0).unwrap();
        let pixels = Shape::ClipWindow(window).rasterize();
        assert!(pixels.contains(&Pixel::new(0, 0)));
        assert!(pixels.contains(&Pixel::new(4, 2)));
        assert!(!pixels.contains(&Pixel::new(2, 1)));
    }

    #[test]
    fn test_replace_shape_recomputes_pixels() {
        let mut entry = ShapeEntry::new(
            ShapeId::from_raw(0),
            Shape::Line(Line::from_coords(0.0, 0.0, 2.0, 0.0)),
        );
        assert_eq!(entry.pixels().len(), 3);
        entry.replace_shape(Shape::Line(Line::from_coords(0.0, 0.0, 5.0, 0.0)));
        assert_eq!(entry.pixels().len(), 6);
    }
}
