//! Logical canvas extent.
//!
//! The logical coordinate space has a fixed height (100 units by default) and
//! a width proportional to the device aspect ratio, centered on the origin
//! with the y axis pointing up. Fills are bounded by the integer pixel range
//! that covers this window.

use crate::error::{ensure_finite, Error, Result};
use crate::geometry::{Pixel, Point};

/// Real-valued logical window plus the integer pixel bound covering it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasExtent {
    /// Logical left edge.
    pub x_min: f64,
    /// Logical right edge.
    pub x_max: f64,
    /// Logical bottom edge.
    pub y_min: f64,
    /// Logical top edge.
    pub y_max: f64,
}

impl CanvasExtent {
    /// Build the extent for a device surface of `width_px` x `height_px`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized surface and
    /// [`Error::InvalidParameter`] for a non-positive logical height.
    pub fn from_device(width_px: u32, height_px: u32, logical_height: f64) -> Result<Self> {
        if width_px == 0 || height_px == 0 {
            return Err(Error::InvalidDimensions {
                width: width_px,
                height: height_px,
            });
        }
        ensure_finite("logical_height", logical_height)?;
        if logical_height <= 0.0 {
            return Err(Error::invalid(
                "logical_height",
                format!("must be positive, got {logical_height}"),
            ));
        }

        let logical_width = f64::from(width_px) / f64::from(height_px) * logical_height;
        Ok(Self::centered(logical_width, logical_height))
    }

    /// A window of the given logical size centered on the origin.
    #[must_use]
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            x_min: -width / 2.0,
            x_max: width / 2.0,
            y_min: -height / 2.0,
            y_max: height / 2.0,
        }
    }

    /// Logical width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Logical height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Inclusive integer x range covering the window.
    #[must_use]
    pub fn pixel_x_range(&self) -> (i32, i32) {
        (self.x_min.floor() as i32, self.x_max.ceil() as i32)
    }

    /// Inclusive integer y range covering the window.
    #[must_use]
    pub fn pixel_y_range(&self) -> (i32, i32) {
        (self.y_min.floor() as i32, self.y_max.ceil() as i32)
    }

    /// Check if a pixel is within the integer bound.
    #[must_use]
    pub fn contains_pixel(&self, px: Pixel) -> bool {
        let (x0, x1) = self.pixel_x_range();
        let (y0, y1) = self.pixel_y_range();
        (x0..=x1).contains(&px.x) && (y0..=y1).contains(&px.y)
    }

    /// Check if a logical point is within the window.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }

    /// True if the pixel lies on the outermost ring of the integer bound.
    #[must_use]
    pub fn is_edge_pixel(&self, px: Pixel) -> bool {
        let (x0, x1) = self.pixel_x_range();
        let (y0, y1) = self.pixel_y_range();
        px.x == x0 || px.x == x1 || px.y == y0 || px.y == y1
    }

    /// Number of pixels in the integer bound; the upper limit of any fill.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        let (x0, x1) = self.pixel_x_range();
        let (y0, y1) = self.pixel_y_range();
        let w = (i64::from(x1) - i64::from(x0) + 1).max(0) as usize;
        let h = (i64::from(y1) - i64::from(y0) + 1).max(0) as usize;
        w * h
    }
}

impl Default for CanvasExtent {
    /// 800x600 surface with a logical height of 100.
    fn default() -> Self {
        Self::centered(800.0 / 600.0 * 100.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_device_keeps_aspect_ratio() {
        let extent = CanvasExtent::from_device(1000, 500, 100.0).unwrap();
        assert_relative_eq!(extent.width(), 200.0);
        assert_relative_eq!(extent.height(), 100.0);
        assert_relative_eq!(extent.x_min, -100.0);
        assert_relative_eq!(extent.y_max, 50.0);
    }

    #[test]
    fn test_invalid_device_size() {
        assert!(matches!(
            CanvasExtent::from_device(0, 600, 100.0),
            Err(Error::InvalidDimensions { .. })
        ));
        assert!(CanvasExtent::from_device(800, 600, 0.0).is_err());
        assert!(CanvasExtent::from_device(800, 600, f64::NAN).is_err());
    }

    #[test]
    fn test_pixel_bound_covers_fractional_window() {
        let extent = CanvasExtent::default();
        assert_eq!(extent.pixel_x_range(), (-67, 67));
        assert_eq!(extent.pixel_y_range(), (-50, 50));
        assert_eq!(extent.pixel_count(), 135 * 101);
        assert!(extent.contains_pixel(Pixel::new(-67, 50)));
        assert!(!extent.contains_pixel(Pixel::new(0, 51)));
        assert!(extent.is_edge_pixel(Pixel::new(67, 0)));
        assert!(!extent.is_edge_pixel(Pixel::new(0, 0)));
    }

    #[test]
    fn test_contains_point() {
        let extent = CanvasExtent::centered(20.0, 10.0);
        assert!(extent.contains(Point::new(10.0, -5.0)));
        assert!(!extent.contains(Point::new(10.5, 0.0)));
    }
}
