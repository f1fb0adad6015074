//! Quick shapes and cube projections.

use crate::error::{ensure_finite, Error, Result};
use crate::geometry::{ensure_point, quantize, Circle, CubicBezier, Pixel, Point, Polygon};
use crate::render::{rasterize_line, rasterize_polygon};
use crate::shape::Shape;
use std::f64::consts::TAU;

/// Radius shared by the circle and hexagon presets.
const PRESET_RADIUS: f64 = 25.0;

/// Ready-made shapes centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Circle of radius 25.
    Circle,
    /// Arch-shaped Bezier curve from (-30, 0) to (30, 0).
    Curve,
    /// Regular hexagon on radius 25 with integer vertices.
    Hexagon,
    /// Self-intersecting five-point star.
    Star,
}

impl Preset {
    /// Build the preset's geometry; curves are sampled with `curve_steps`.
    #[must_use]
    pub fn shape(self, curve_steps: usize) -> Shape {
        match self {
            Self::Circle => Shape::Circle(Circle::new_unchecked(Point::ORIGIN, PRESET_RADIUS)),
            Self::Curve => Shape::Curve {
                bezier: CubicBezier::new(
                    Point::new(-30.0, 0.0),
                    Point::new(-15.0, 30.0),
                    Point::new(15.0, 30.0),
                    Point::new(30.0, 0.0),
                ),
                steps: curve_steps.max(1),
            },
            Self::Hexagon => {
                let vertices = (0..6)
                    .map(|i| {
                        let angle = f64::from(i) * TAU / 6.0;
                        Point::new(
                            f64::from(quantize(PRESET_RADIUS * angle.cos())),
                            f64::from(quantize(PRESET_RADIUS * angle.sin())),
                        )
                    })
                    .collect();
                Shape::Polygon(Polygon::new_unchecked(vertices))
            }
            Self::Star => Shape::Polygon(Polygon::new_unchecked(vec![
                Point::new(0.0, 30.0),
                Point::new(20.0, -25.0),
                Point::new(-20.0, 10.0),
                Point::new(20.0, 10.0),
                Point::new(-20.0, -25.0),
            ])),
        }
    }
}

/// How a cube is projected onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionKind {
    /// Front face only.
    Orthographic,
    /// Front face, a diagonally offset back face and the four connecting edges.
    Oblique,
}

/// Front face of a cube with edge `size` centered on `center`.
///
/// Counter-clockwise from the bottom-left corner.
fn front_face(center: Point, size: f64) -> [Point; 4] {
    let half = size / 2.0;
    [
        center.offset(-half, -half),
        center.offset(half, -half),
        center.offset(half, half),
        center.offset(-half, half),
    ]
}

/// Build the projection of a cube with edge `size` centered on `center`.
///
/// The oblique back face is shifted by `size / 2 * oblique_factor` along both
/// axes.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `size` is not a positive number or
/// any corner is not finite or lies outside the coordinate domain.
pub fn projection(
    center: Point,
    kind: ProjectionKind,
    size: f64,
    oblique_factor: f64,
) -> Result<Shape> {
    ensure_finite("cube_size", size)?;
    if size <= 0.0 {
        return Err(Error::invalid("cube_size", format!("must be positive, got {size}")));
    }
    let front = front_face(ensure_point("center", center)?, size);
    for &v in &front {
        ensure_point("cube_size", v)?;
    }
    match kind {
        ProjectionKind::Orthographic => Ok(Shape::Polygon(Polygon::new(front.to_vec())?)),
        ProjectionKind::Oblique => {
            let offset = ensure_finite("oblique_factor", oblique_factor)? * size / 2.0;
            let back = front.map(|v| v.offset(offset, offset));
            for &v in &back {
                ensure_point("oblique_factor", v)?;
            }

            let mut pixels: Vec<Pixel> = rasterize_polygon(&front);
            pixels.extend(rasterize_polygon(&back));
            for (f, b) in front.iter().zip(&back) {
                pixels.extend(rasterize_line(*f, *b));
            }
            Ok(Shape::Projection(pixels))
        }
    }
}
