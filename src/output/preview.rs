//! CPU preview of a shape history.
//!
//! Each logical pixel becomes a `scale x scale` block. Logical y points up,
//! device y points down, so rows are flipped against the canvas extent.

use crate::canvas::CanvasExtent;
use crate::config::{Palette, RenderConfig};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Pixel;
use crate::shape::{ShapeEntry, ShapeKind};

/// Paints shape entries onto a framebuffer covering a canvas extent.
#[derive(Debug, Clone)]
pub struct Preview {
    x_range: (i32, i32),
    y_range: (i32, i32),
    width: u32,
    height: u32,
    scale: u32,
    grid_size: u32,
    palette: Palette,
}

impl Preview {
    /// Largest device width or height a preview may have.
    pub const MAX_DIMENSION: u32 = 16_384;

    /// Create a painter for `extent` with the given render settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a color does not parse, the scale is zero, or the
    /// device surface would exceed [`Preview::MAX_DIMENSION`] on either axis.
    pub fn new(extent: &CanvasExtent, config: &RenderConfig) -> Result<Self> {
        if config.scale == 0 {
            return Err(Error::invalid("scale", "must be at least 1"));
        }
        let x_range = extent.pixel_x_range();
        let y_range = extent.pixel_y_range();
        let width = device_span(x_range, config.scale);
        let height = device_span(y_range, config.scale);

        let limit = u64::from(Self::MAX_DIMENSION);
        if width > limit || height > limit {
            return Err(Error::InvalidDimensions {
                width: u32::try_from(width).unwrap_or(u32::MAX),
                height: u32::try_from(height).unwrap_or(u32::MAX),
            });
        }

        Ok(Self {
            x_range,
            y_range,
            width: width as u32,
            height: height as u32,
            scale: config.scale,
            grid_size: config.grid_size,
            palette: config.palette()?,
        })
    }

    /// Device width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Device height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Top-left device corner of a logical pixel's block, if it is on the canvas.
    #[must_use]
    pub fn to_device(&self, p: Pixel) -> Option<(u32, u32)> {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        if p.x < x0 || p.x > x1 || p.y < y0 || p.y > y1 {
            return None;
        }
        Some((
            (p.x - x0).unsigned_abs() * self.scale,
            (y1 - p.y).unsigned_abs() * self.scale,
        ))
    }

    /// Paint background, grid, axes and every entry in order.
    pub fn render(&self, fb: &mut Framebuffer, entries: &[ShapeEntry]) {
        fb.clear(self.palette.background);
        self.draw_grid(fb);

        for entry in entries {
            let color = match entry.shape().kind() {
                ShapeKind::Fill => self.palette.fill,
                ShapeKind::ClipWindow => self.palette.clip,
                _ => self.palette.stroke,
            };
            for &p in entry.pixels() {
                if let Some((x, y)) = self.to_device(p) {
                    fb.fill_rect(x, y, self.scale, self.scale, color);
                }
            }
        }
    }

    /// Render to a new framebuffer sized to the canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn to_framebuffer(&self, entries: &[ShapeEntry]) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width(), self.height())?;
        self.render(&mut fb, entries);
        Ok(fb)
    }

    fn draw_grid(&self, fb: &mut Framebuffer) {
        let (width, height) = (fb.width(), fb.height());
        let mid = self.scale / 2;
        let step = i32::try_from(self.grid_size).unwrap_or(i32::MAX);

        for x in self.x_range.0..=self.x_range.1 {
            let color = if x == 0 {
                self.palette.axis
            } else if step > 0 && x.rem_euclid(step) == 0 {
                self.palette.grid
            } else {
                continue;
            };
            if let Some((dx, _)) = self.to_device(Pixel::new(x, self.y_range.0)) {
                fb.fill_rect(dx + mid, 0, 1, height, color);
            }
        }

        for y in self.y_range.0..=self.y_range.1 {
            let color = if y == 0 {
                self.palette.axis
            } else if step > 0 && y.rem_euclid(step) == 0 {
                self.palette.grid
            } else {
                continue;
            };
            if let Some((_, dy)) = self.to_device(Pixel::new(self.x_range.0, y)) {
                fb.fill_rect(0, dy + mid, width, 1, color);
            }
        }
    }
}

/// Device pixels covering an inclusive logical range, saturating instead of
/// overflowing.
fn device_span(range: (i32, i32), scale: u32) -> u64 {
    let cells = (i64::from(range.1) - i64::from(range.0) + 1).max(0).unsigned_abs();
    cells.saturating_mul(u64::from(scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::geometry::{Line, Point};
    use crate::shape::{Shape, ShapeId};

    fn small_preview(scale: u32) -> Preview {
        let extent = CanvasExtent::centered(10.0, 10.0);
        let config = RenderConfig {
            scale,
            ..RenderConfig::default()
        };
        Preview::new(&extent, &config).unwrap()
    }

    #[test]
    fn test_device_size_covers_pixel_range() {
        let preview = small_preview(3);
        // -5..=5 on both axes.
        assert_eq!(preview.width(), 33);
        assert_eq!(preview.height(), 33);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let preview = small_preview(1);
        assert_eq!(preview.to_device(Pixel::new(-5, 5)), Some((0, 0)));
        assert_eq!(preview.to_device(Pixel::new(5, -5)), Some((10, 10)));
        assert_eq!(preview.to_device(Pixel::new(6, 0)), None);
    }

    #[test]
    fn test_entries_are_painted_with_kind_colors() {
        let preview = small_preview(2);
        let entries = vec![
            ShapeEntry::new(
                ShapeId::from_raw(0),
                Shape::Line(Line::new(Point::new(1.0, 3.0), Point::new(3.0, 3.0))),
            ),
            ShapeEntry::new(ShapeId::from_raw(1), Shape::Fill(vec![Pixel::new(-3, -3)])),
        ];

        let fb = preview.to_framebuffer(&entries).unwrap();
        let (x, y) = preview.to_device(Pixel::new(2, 3)).unwrap();
        assert_eq!(fb.get_pixel(x, y), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(x + 1, y + 1), Some(Rgba::BLACK));

        let (x, y) = preview.to_device(Pixel::new(-3, -3)).unwrap();
        assert_eq!(fb.get_pixel(x, y).map(|c| c.to_string()), Some("#4a90d9".to_string()));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let extent = CanvasExtent::default();
        let config = RenderConfig {
            scale: 0,
            ..RenderConfig::default()
        };
        assert!(Preview::new(&extent, &config).is_err());
    }

    #[test]
    fn test_oversized_surface_rejected() {
        let extent = CanvasExtent::default();
        let config = RenderConfig {
            scale: u32::MAX,
            ..RenderConfig::default()
        };
        assert!(matches!(
            Preview::new(&extent, &config),
            Err(Error::InvalidDimensions { width: u32::MAX, .. })
        ));

        // 135 columns * 121 = 16335 fits; * 122 = 16470 does not.
        let fits = RenderConfig {
            scale: 121,
            ..RenderConfig::default()
        };
        assert_eq!(Preview::new(&extent, &fits).unwrap().width(), 16_335);
        let too_wide = RenderConfig {
            scale: 122,
            ..RenderConfig::default()
        };
        assert!(Preview::new(&extent, &too_wide).is_err());
    }
}
