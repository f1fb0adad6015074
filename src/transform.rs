//! Affine transforms of polygon vertices.
//!
//! Rotation and scaling act about a pivot. The pivot is usually chosen with
//! [`nearest_vertex`], which scans every vertex of every polygon for the one
//! closest to a clicked point.

use crate::error::{ensure_finite, Error, Result};
use crate::geometry::{Point, Polygon};
use crate::shape::ShapeId;

/// Default maximum distance between a click and the vertex it selects.
pub const DEFAULT_PIVOT_THRESHOLD: f64 = 5.0;

/// An affine transform applied to every vertex of a polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Shift by `(dx, dy)`.
    Translate {
        /// X offset.
        dx: f64,
        /// Y offset.
        dy: f64,
    },
    /// Rotate counter-clockwise about `pivot`.
    Rotate {
        /// Fixed point of the rotation.
        pivot: Point,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Scale independently along x and y about `pivot`.
    Scale {
        /// Fixed point of the scaling.
        pivot: Point,
        /// X factor.
        sx: f64,
        /// Y factor.
        sy: f64,
    },
}

impl Transform {
    /// Check that every parameter is a finite number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Translate { dx, dy } => {
                ensure_finite("dx", dx)?;
                ensure_finite("dy", dy)?;
            }
            Self::Rotate { pivot, degrees } => {
                ensure_finite("angle", degrees)?;
                ensure_pivot(pivot)?;
            }
            Self::Scale { pivot, sx, sy } => {
                ensure_finite("scale_x", sx)?;
                ensure_finite("scale_y", sy)?;
                ensure_pivot(pivot)?;
            }
        }
        Ok(())
    }

    /// Apply the transform to one point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        match *self {
            Self::Translate { dx, dy } => p.offset(dx, dy),
            Self::Rotate { pivot, degrees } => {
                let (sin, cos) = degrees.to_radians().sin_cos();
                let tx = p.x - pivot.x;
                let ty = p.y - pivot.y;
                Point::new(tx * cos - ty * sin + pivot.x, tx * sin + ty * cos + pivot.y)
            }
            Self::Scale { pivot, sx, sy } => {
                Point::new((p.x - pivot.x) * sx + pivot.x, (p.y - pivot.y) * sy + pivot.y)
            }
        }
    }

    /// Apply the transform to every vertex.
    #[must_use]
    pub fn apply_all(&self, vertices: &[Point]) -> Vec<Point> {
        vertices.iter().map(|&v| self.apply(v)).collect()
    }
}

fn ensure_pivot(pivot: Point) -> Result<()> {
    if pivot.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid("pivot", "coordinates must be finite"))
    }
}

impl Polygon {
    /// A new polygon with `transform` applied to every vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the transform has non-finite
    /// parameters or moves a vertex out of the coordinate domain.
    pub fn transformed(&self, transform: &Transform) -> Result<Self> {
        transform.validate()?;
        Self::new(transform.apply_all(self.vertices()))
    }
}

/// The vertex chosen as a rotation or scaling pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotSelection {
    /// Polygon owning the vertex.
    pub shape: ShapeId,
    /// Index of the vertex in that polygon.
    pub vertex_index: usize,
    /// Vertex position.
    pub pivot: Point,
    /// Distance from the clicked point.
    pub distance: f64,
}

/// Find the vertex nearest to `click` across all `polygons`.
///
/// Ties keep the first vertex encountered.
///
/// # Errors
///
/// Returns [`Error::NoTargetFound`] if there are no polygons or the nearest
/// vertex is farther than `threshold`.
pub fn nearest_vertex<'a, I>(polygons: I, click: Point, threshold: f64) -> Result<PivotSelection>
where
    I: IntoIterator<Item = (ShapeId, &'a Polygon)>,
{
    let mut best: Option<PivotSelection> = None;

    for (shape, polygon) in polygons {
        for (vertex_index, &v) in polygon.vertices().iter().enumerate() {
            let distance = click.distance(v);
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PivotSelection {
                    shape,
                    vertex_index,
                    pivot: v,
                    distance,
                });
            }
        }
    }

    best.filter(|b| b.distance <= threshold)
        .ok_or(Error::NoTargetFound("no polygon vertex near the selected point"))
}
