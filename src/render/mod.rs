//! Rasterization of geometric primitives.
//!
//! Converts continuous shapes into integer pixel lists in logical coordinates.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error accumulation, 8-connected output
//! - **Midpoint Circle**: one octant computed, mirrored eight ways
//! - **Cubic Bezier**: uniform sampling in `t`, samples joined by Bresenham segments
//! - **Polygon Outline**: cyclic vertex-to-vertex segments
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a digital plotter."

mod primitives;

pub use primitives::{
    evaluate_bezier, rasterize_circle, rasterize_curve, rasterize_line, rasterize_polygon,
    rasterize_polyline, Rasterize, DEFAULT_CURVE_STEPS, MAX_CURVE_STEPS,
};
