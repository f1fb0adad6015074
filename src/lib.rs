//! # raster-kernel
//!
//! A 2D rasterization kernel for teaching-style drawing tools: integer
//! rasterizers, containment tests, clipping, region fill and polygon
//! transforms, plus a session that keeps an editable shape history.
//!
//! ## Features
//!
//! - **Rasterizers**: Bresenham lines, midpoint circles, sampled cubic Bezier
//!   curves, closed polygon outlines
//! - **Containment**: non-zero winding point-in-polygon, point-in-circle
//! - **Clipping**: Cohen–Sutherland segment clipping with region codes
//! - **Fill**: stack-based boundary fill and winding scanline fill, both
//!   bounded by the canvas
//! - **Transforms**: translate, rotate and scale about a pivot, with
//!   nearest-vertex pivot selection
//! - **Preview**: RGBA framebuffer rendering and PNG export
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_kernel::prelude::*;
//!
//! let mut session = Session::default();
//! let square = session.draw_polygon(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ])?;
//! let fill = session.fill_at(Point::new(5.0, 5.0), FillStrategy::Scanline)?;
//! session.rotate(square, Point::ORIGIN, 45.0)?;
//!
//! assert!(session.get(fill).is_some());
//! # Ok::<(), raster_kernel::Error>(())
//! ```
//!
//! ## Coordinates
//!
//! All geometry lives in a logical plane with y pointing up. Real-valued
//! points are rounded half away from zero when they become pixels.
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Cohen, D., & Sutherland, I. (1967). Two-dimensional line clipping.
//! - Hormann, K., & Agathos, A. (2001). "The point in polygon problem for arbitrary polygons."

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Points, pixels and shape geometry.
pub mod geometry;

/// Shape variants, handles and history entries.
pub mod shape;

/// Logical canvas extent.
pub mod canvas;

// ============================================================================
// Algorithm Modules
// ============================================================================

/// Rasterization of lines, circles, curves and polygons.
pub mod render;

/// Point containment tests.
pub mod containment;

/// Cohen–Sutherland segment clipping.
pub mod clip;

/// Boundary and scanline fill.
pub mod fill;

/// Polygon transforms and pivot selection.
pub mod transform;

/// Preset shapes and cube projections.
pub mod preset;

// ============================================================================
// Session & Output
// ============================================================================

/// Shape history and request orchestration.
pub mod session;

/// Kernel configuration.
pub mod config;

/// RGBA colors.
pub mod color;

/// Pixel buffer for preview rendering.
pub mod framebuffer;

/// Output encoders (PNG) and the preview painter.
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-kernel operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_kernel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::CanvasExtent;
    pub use crate::clip::{clip_segment, ClipOutcome, RegionCode};
    pub use crate::color::Rgba;
    pub use crate::config::KernelConfig;
    pub use crate::containment::{point_in_circle, point_in_polygon};
    pub use crate::error::{Error, Result};
    pub use crate::fill::{flood_fill, scanline_fill_circle, scanline_fill_polygon, FillStrategy};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{
        Circle, ClipWindow, CubicBezier, Line, Pixel, Point, Polygon, MAX_COORDINATE,
    };
    pub use crate::preset::{Preset, ProjectionKind};
    pub use crate::render::{
        evaluate_bezier, rasterize_circle, rasterize_curve, rasterize_line, rasterize_polygon,
        Rasterize,
    };
    pub use crate::session::{ClipReport, Session};
    pub use crate::shape::{Shape, ShapeEntry, ShapeId, ShapeKind};
    pub use crate::transform::{nearest_vertex, PivotSelection, Transform};
}

// ============================================================================
// Tests
// ============================================================================
