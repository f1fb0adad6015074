//! Kernel configuration.
//!
//! Every field has a default, so an empty YAML document is a valid
//! configuration. Values are checked by [`KernelConfig::validate`] before a
//! session uses them.

use crate::canvas::CanvasExtent;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::output::Preview;
use crate::render::{DEFAULT_CURVE_STEPS, MAX_CURVE_STEPS};
use crate::transform::DEFAULT_PIVOT_THRESHOLD;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Device surface and logical coordinate settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Device width in pixels.
    #[serde(default = "default_width_px")]
    pub width_px: u32,

    /// Device height in pixels.
    #[serde(default = "default_height_px")]
    pub height_px: u32,

    /// Height of the logical coordinate window.
    #[serde(default = "default_logical_height")]
    pub logical_height: f64,
}

fn default_width_px() -> u32 {
    800
}
fn default_height_px() -> u32 {
    600
}
fn default_logical_height() -> f64 {
    100.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width_px: default_width_px(),
            height_px: default_height_px(),
            logical_height: default_logical_height(),
        }
    }
}

/// Geometry tolerances and construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Maximum click-to-vertex distance for pivot selection.
    #[serde(default = "default_pivot_threshold")]
    pub pivot_threshold: f64,

    /// Parameter steps used to sample Bezier curves.
    #[serde(default = "default_curve_steps")]
    pub curve_steps: usize,

    /// Edge length of projected cubes.
    #[serde(default = "default_cube_size")]
    pub cube_size: f64,

    /// Back-face offset of oblique projections, as a fraction of half the cube size.
    #[serde(default = "default_oblique_factor")]
    pub oblique_factor: f64,
}

fn default_pivot_threshold() -> f64 {
    DEFAULT_PIVOT_THRESHOLD
}
fn default_curve_steps() -> usize {
    DEFAULT_CURVE_STEPS
}
fn default_cube_size() -> f64 {
    20.0
}
fn default_oblique_factor() -> f64 {
    0.7
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            pivot_threshold: default_pivot_threshold(),
            curve_steps: default_curve_steps(),
            cube_size: default_cube_size(),
            oblique_factor: default_oblique_factor(),
        }
    }
}

/// Preview renderer settings. Colors are `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Device pixels per logical unit.
    #[serde(default = "default_scale")]
    pub scale: u32,

    /// Grid spacing in logical units; 0 disables the grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    /// Background color.
    #[serde(default = "default_background")]
    pub background: String,

    /// Outline color for geometric shapes.
    #[serde(default = "default_stroke")]
    pub stroke: String,

    /// Color of fill entries.
    #[serde(default = "default_fill")]
    pub fill: String,

    /// Color of clip window outlines.
    #[serde(default = "default_clip")]
    pub clip: String,

    /// Grid line color.
    #[serde(default = "default_grid")]
    pub grid: String,

    /// Axis color.
    #[serde(default = "default_axis")]
    pub axis: String,
}

fn default_scale() -> u32 {
    6
}
fn default_grid_size() -> u32 {
    10
}
fn default_background() -> String {
    "#ffffff".to_string()
}
fn default_stroke() -> String {
    "#000000".to_string()
}
fn default_fill() -> String {
    "#4a90d9".to_string()
}
fn default_clip() -> String {
    "#d94a4a".to_string()
}
fn default_grid() -> String {
    "#e9e9e9".to_string()
}
fn default_axis() -> String {
    "#9a9a9a".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            grid_size: default_grid_size(),
            background: default_background(),
            stroke: default_stroke(),
            fill: default_fill(),
            clip: default_clip(),
            grid: default_grid(),
            axis: default_axis(),
        }
    }
}

/// Parsed render colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background color.
    pub background: Rgba,
    /// Outline color.
    pub stroke: Rgba,
    /// Fill color.
    pub fill: Rgba,
    /// Clip window color.
    pub clip: Rgba,
    /// Grid color.
    pub grid: Rgba,
    /// Axis color.
    pub axis: Rgba,
}

impl RenderConfig {
    /// Parse every color string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for the first malformed color.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            background: self.background.parse()?,
            stroke: self.stroke.parse()?,
            fill: self.fill.parse()?,
            clip: self.clip.parse()?,
            grid: self.grid.parse()?,
            axis: self.axis.parse()?,
        })
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Geometry settings.
    #[serde(default)]
    pub geometry: GeometryConfig,

    /// Preview renderer settings.
    #[serde(default)]
    pub render: RenderConfig,
}

impl KernelConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Check every value and derive the canvas extent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`], [`Error::InvalidDimensions`] or
    /// [`Error::InvalidColor`] for the first out-of-domain value.
    pub fn validate(&self) -> Result<CanvasExtent> {
        let extent = CanvasExtent::from_device(
            self.canvas.width_px,
            self.canvas.height_px,
            self.canvas.logical_height,
        )?;

        let g = &self.geometry;
        if !(g.pivot_threshold.is_finite() && g.pivot_threshold >= 0.0) {
            return Err(Error::invalid("pivot_threshold", "must be a non-negative number"));
        }
        if !(1..=MAX_CURVE_STEPS).contains(&g.curve_steps) {
            return Err(Error::invalid(
                "curve_steps",
                format!("must be between 1 and {MAX_CURVE_STEPS}, got {}", g.curve_steps),
            ));
        }
        if !(g.cube_size.is_finite() && g.cube_size > 0.0) {
            return Err(Error::invalid("cube_size", "must be a positive number"));
        }
        if !g.oblique_factor.is_finite() {
            return Err(Error::invalid("oblique_factor", "must be a finite number"));
        }
        Preview::new(&extent, &self.render)?;

        Ok(extent)
    }
}
