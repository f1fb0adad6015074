//! Drawing session: the ordered shape history and every operation on it.
//!
//! A [`Session`] owns its shapes and hands out [`ShapeId`] handles that stay
//! valid across transforms and clips. Every operation validates its input
//! before touching the history, so a failed call leaves the session exactly as
//! it was.

use crate::canvas::CanvasExtent;
use crate::clip::{clip_segment, ClipOutcome};
use crate::config::KernelConfig;
use crate::error::{Error, Result};
use crate::fill::{flood_fill, scanline_fill_circle, scanline_fill_polygon, FillStrategy};
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, ClipWindow, CubicBezier, Line, Pixel, Point, Polygon};
use crate::output::{PngEncoder, Preview};
use crate::preset::{projection, Preset, ProjectionKind};
use crate::shape::{Shape, ShapeEntry, ShapeId};
use crate::transform::{nearest_vertex, PivotSelection, Transform};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// What a clip window did to the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipReport {
    /// Handle of the appended clip window outline.
    pub window: ShapeId,
    /// Entries that were trimmed but kept.
    pub clipped: Vec<ShapeId>,
    /// Entries that fell entirely outside and were removed.
    pub removed: Vec<ShapeId>,
}

/// An ordered, owned history of shapes plus the settings used to draw them.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: KernelConfig,
    extent: CanvasExtent,
    entries: Vec<ShapeEntry>,
    next_id: u64,
    pivot: Option<Point>,
}

impl Session {
    /// Create an empty session.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`KernelConfig::validate`].
    pub fn new(config: KernelConfig) -> Result<Self> {
        let extent = config.validate()?;
        Ok(Self {
            config,
            extent,
            ..Self::default()
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Settings in use.
    #[must_use]
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Canvas extent bounding every fill.
    #[must_use]
    pub fn extent(&self) -> &CanvasExtent {
        &self.extent
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ShapeEntry] {
        &self.entries
    }

    /// Look up an entry by handle.
    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&ShapeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pivot used by the last rotation or scaling about a selected vertex.
    #[must_use]
    pub fn pivot(&self) -> Option<Point> {
        self.pivot
    }

    /// Handle of the most recently drawn polygon.
    #[must_use]
    pub fn latest_polygon(&self) -> Option<ShapeId> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.shape.as_polygon().is_some())
            .map(|e| e.id)
    }

    /// Every pixel currently in the history; the barrier for boundary fill.
    #[must_use]
    pub fn barrier(&self) -> HashSet<Pixel> {
        self.entries.iter().flat_map(|e| e.pixels.iter().copied()).collect()
    }

    /// Remove every entry. Handles are not reused afterwards.
    pub fn clear(&mut self) {
        info!(removed = self.entries.len(), "session cleared");
        self.entries.clear();
        self.pivot = None;
    }

    fn push(&mut self, shape: Shape) -> ShapeId {
        let id = ShapeId::from_raw(self.next_id);
        self.next_id += 1;
        let entry = ShapeEntry::new(id, shape);
        debug!(%id, kind = %entry.shape.kind(), pixels = entry.pixels.len(), "shape added");
        self.entries.push(entry);
        id
    }

    // ========================================================================
    // Drawing
    // ========================================================================

    /// Draw a straight segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if an endpoint is not finite or lies
    /// outside the coordinate domain.
    pub fn draw_line(&mut self, p1: Point, p2: Point) -> Result<ShapeId> {
        let line = Line::try_new(p1, p2)?;
        Ok(self.push(Shape::Line(line)))
    }

    /// Draw a circle outline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a negative, non-finite or
    /// out-of-domain radius or center.
    pub fn draw_circle(&mut self, center: Point, radius: f64) -> Result<ShapeId> {
        let circle = Circle::new(center, radius)?;
        Ok(self.push(Shape::Circle(circle)))
    }

    /// Draw a circle centered at `center` passing through `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for non-finite or out-of-domain
    /// coordinates.
    pub fn draw_circle_through(&mut self, center: Point, edge: Point) -> Result<ShapeId> {
        let circle = Circle::through(center, edge)?;
        Ok(self.push(Shape::Circle(circle)))
    }

    /// Draw a cubic Bezier from `start` to `end` shaped by one or two control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] unless there are one or two controls
    /// and every point is finite and in the coordinate domain.
    pub fn draw_curve(&mut self, start: Point, end: Point, controls: &[Point]) -> Result<ShapeId> {
        let bezier = CubicBezier::from_endpoints(start, end, controls)?;
        Ok(self.push(Shape::Curve {
            bezier,
            steps: self.config.geometry.curve_steps,
        }))
    }

    /// Draw a closed polygon outline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for fewer than three vertices or a
    /// vertex outside the coordinate domain.
    pub fn draw_polygon(&mut self, vertices: Vec<Point>) -> Result<ShapeId> {
        let polygon = Polygon::new(vertices)?;
        Ok(self.push(Shape::Polygon(polygon)))
    }

    /// Draw one of the ready-made shapes.
    pub fn draw_preset(&mut self, preset: Preset) -> ShapeId {
        self.push(preset.shape(self.config.geometry.curve_steps))
    }

    /// Draw a cube projection centered on `center`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for non-finite coordinates.
    pub fn draw_projection(&mut self, center: Point, kind: ProjectionKind) -> Result<ShapeId> {
        let g = &self.config.geometry;
        let shape = projection(center, kind, g.cube_size, g.oblique_factor)?;
        Ok(self.push(shape))
    }

    // ========================================================================
    // Fill
    // ========================================================================

    /// Fill the newest polygon or circle containing `point`.
    ///
    /// Boundary fill grows from `point` up to every pixel already drawn;
    /// scanline fill covers the target's interior from its geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTargetFound`] if no polygon or circle contains `point`.
    pub fn fill_at(&mut self, point: Point, strategy: FillStrategy) -> Result<ShapeId> {
        let target = self
            .entries
            .iter()
            .rev()
            .find(|e| e.shape.contains(point) == Some(true))
            .ok_or(Error::NoTargetFound("no polygon or circle contains the point"))?;
        debug!(shape = %target.id, ?strategy, "fill target selected");

        let pixels = match strategy {
            FillStrategy::Boundary => flood_fill(point, &self.barrier(), &self.extent),
            FillStrategy::Scanline => match &target.shape {
                Shape::Polygon(polygon) => scanline_fill_polygon(polygon.vertices(), &self.extent),
                Shape::Circle(circle) => scanline_fill_circle(circle, &self.extent),
                _ => return Err(Error::NoTargetFound("fill target has no interior")),
            },
        };

        Ok(self.push(Shape::Fill(pixels)))
    }

    // ========================================================================
    // Clip
    // ========================================================================

    /// Apply a clip window spanned by two opposite corners to the whole history.
    ///
    /// Lines are clipped geometrically and re-rasterized; every other entry
    /// keeps only its pixels inside the window. Entries left with nothing are
    /// removed. The window outline is appended last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for non-finite or out-of-domain corners.
    pub fn apply_clip_window(&mut self, corner_a: Point, corner_b: Point) -> Result<ClipReport> {
        let window = ClipWindow::from_corners(corner_a, corner_b)?;
        let mut clipped = Vec::new();
        let mut removed = Vec::new();

        self.entries.retain_mut(|entry| {
            let changed = if let Shape::Line(line) = entry.shape {
                match clip_segment(line.start, line.end, &window) {
                    ClipOutcome::Accepted(p1, p2) => {
                        let trimmed = Line::new(p1, p2);
                        entry.replace_shape(Shape::Line(trimmed));
                        trimmed != line
                    }
                    ClipOutcome::Rejected => {
                        entry.pixels.clear();
                        true
                    }
                }
            } else {
                let before = entry.pixels.len();
                entry.pixels.retain(|&p| window.contains_pixel(p));
                entry.pixels.len() != before
            };

            if entry.pixels.is_empty() {
                removed.push(entry.id);
                false
            } else {
                if changed {
                    clipped.push(entry.id);
                }
                true
            }
        });

        let window = self.push(Shape::ClipWindow(window));
        info!(
            %window,
            clipped = clipped.len(),
            removed = removed.len(),
            "clip window applied"
        );
        Ok(ClipReport {
            window,
            clipped,
            removed,
        })
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    /// Apply `transform` to the polygon `id` and recompute its pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeNotFound`] for an unknown handle,
    /// [`Error::InvalidParameter`] if the shape is not a polygon, the
    /// transform has non-finite parameters or a vertex would leave the
    /// coordinate domain.
    pub fn transform(&mut self, id: ShapeId, transform: &Transform) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(Error::ShapeNotFound(id))?;
        let polygon = entry.shape.as_polygon().ok_or_else(|| {
            Error::invalid("shape", format!("{id} is a {}, not a polygon", entry.shape.kind()))
        })?;

        let moved = polygon.transformed(transform)?;
        entry.replace_shape(Shape::Polygon(moved));
        debug!(%id, ?transform, "polygon transformed");
        Ok(())
    }

    /// Shift the polygon `id` by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// See [`Session::transform`].
    pub fn translate(&mut self, id: ShapeId, dx: f64, dy: f64) -> Result<()> {
        self.transform(id, &Transform::Translate { dx, dy })
    }

    /// Rotate the polygon `id` counter-clockwise by `degrees` about `pivot`.
    ///
    /// # Errors
    ///
    /// See [`Session::transform`].
    pub fn rotate(&mut self, id: ShapeId, pivot: Point, degrees: f64) -> Result<()> {
        self.transform(id, &Transform::Rotate { pivot, degrees })
    }

    /// Scale the polygon `id` by `(sx, sy)` about `pivot`.
    ///
    /// # Errors
    ///
    /// See [`Session::transform`].
    pub fn scale(&mut self, id: ShapeId, pivot: Point, sx: f64, sy: f64) -> Result<()> {
        self.transform(id, &Transform::Scale { pivot, sx, sy })
    }

    /// Find the polygon vertex nearest to `click` within the pivot threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTargetFound`] if no vertex is close enough.
    pub fn select_pivot(&self, click: Point) -> Result<PivotSelection> {
        let polygons = self
            .entries
            .iter()
            .filter_map(|e| e.shape.as_polygon().map(|p| (e.id, p)));
        nearest_vertex(polygons, click, self.config.geometry.pivot_threshold)
    }

    /// Rotate the polygon owning the vertex nearest to `click` about that vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTargetFound`] if no vertex is close enough, or
    /// [`Error::InvalidParameter`] for a non-finite angle.
    pub fn rotate_about_nearest(&mut self, click: Point, degrees: f64) -> Result<PivotSelection> {
        let selection = self.select_pivot(click)?;
        self.rotate(selection.shape, selection.pivot, degrees)?;
        self.pivot = Some(selection.pivot);
        Ok(selection)
    }

    /// Scale the polygon owning the vertex nearest to `click` about that vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoTargetFound`] if no vertex is close enough, or
    /// [`Error::InvalidParameter`] for non-finite factors.
    pub fn scale_about_nearest(&mut self, click: Point, sx: f64, sy: f64) -> Result<PivotSelection> {
        let selection = self.select_pivot(click)?;
        self.scale(selection.shape, selection.pivot, sx, sy)?;
        self.pivot = Some(selection.pivot);
        Ok(selection)
    }

    // ========================================================================
    // Preview
    // ========================================================================

    /// Paint the history into a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be created.
    pub fn render(&self) -> Result<Framebuffer> {
        Preview::new(&self.extent, &self.config.render)?.to_framebuffer(&self.entries)
    }

    /// Render and encode as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.render()?)
    }

    /// Render and write a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, encoding or writing fails.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        PngEncoder::write_to_file(&self.render()?, path)
    }
}
