// src/config.rs

//! Defines the configuration structures for the heart renderer.
//!
//! Every value the render depends on lives here, grouped into the canvas
//! (which coordinates are scanned), the depth march (how each column is
//! searched) and the shading (how a gradient becomes a glyph). The process
//! never reads these from a file or the command line: `CONFIG` always holds
//! the defaults below.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Process-wide configuration, initialised on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// The scanned coordinate grid.
    pub canvas: CanvasConfig,
    /// The per-column depth search.
    pub march: MarchConfig,
    /// Gradient-to-glyph mapping.
    pub shading: ShadingConfig,
}

impl Config {
    /// Rejects values that would make the render degenerate.
    pub fn validate(&self) -> Result<()> {
        let canvas = &self.canvas;
        if canvas.columns == 0 || canvas.rows == 0 {
            bail!(
                "canvas must have at least one row and column, got {}x{}",
                canvas.columns,
                canvas.rows
            );
        }
        if !(canvas.x_step > 0.0) || !(canvas.z_step > 0.0) {
            bail!(
                "canvas steps must be positive, got x_step={} z_step={}",
                canvas.x_step,
                canvas.z_step
            );
        }

        let march = &self.march;
        if march.samples == 0 {
            bail!("depth march needs at least one sample");
        }
        if !(march.y_step > 0.0) {
            bail!("depth march step must be positive, got {}", march.y_step);
        }
        if !(march.probe_offset > 0.0) {
            bail!("probe offset must be positive, got {}", march.probe_offset);
        }

        if !(self.shading.scale > 0.0) {
            bail!("shading scale must be positive, got {}", self.shading.scale);
        }
        if self.shading.ramp.is_empty() {
            bail!("glyph ramp must not be empty");
        }
        Ok(())
    }
}

// --- Canvas Configuration ---

/// The grid of (x, z) coordinates visited by the rasterizer.
///
/// Columns run left to right with increasing x starting at `x_origin`.
/// Rows run top to bottom with *decreasing* z starting at `z_origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub columns: usize,
    pub rows: usize,
    pub x_origin: f64,
    pub x_step: f64,
    pub z_origin: f64,
    /// Magnitude of the per-row decrement of z.
    pub z_step: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            columns: 120, // [-1.5, 1.5) / 0.025
            rows: 60,     // (-1.5, 1.5] / 0.05
            x_origin: -1.5,
            x_step: 0.025,
            z_origin: 1.5,
            z_step: 0.05,
        }
    }
}

impl CanvasConfig {
    /// x coordinate of column `col`.
    pub fn x_at(&self, col: usize) -> f64 {
        self.x_origin + col as f64 * self.x_step
    }

    /// z coordinate of row `row`.
    pub fn z_at(&self, row: usize) -> f64 {
        self.z_origin - row as f64 * self.z_step
    }
}

// --- Depth March Configuration ---

/// Settings for the downward search along y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchConfig {
    /// First y tested.
    pub y_start: f64,
    /// Decrement between samples.
    pub y_step: f64,
    /// Number of samples, `y_start` included. The default visits
    /// y = 1.0, 0.999, ..., 0.0.
    pub samples: usize,
    /// Offset used for the finite-difference probes along x and z. Also
    /// used as the constant y component of the gradient.
    pub probe_offset: f64,
}

impl Default for MarchConfig {
    fn default() -> Self {
        MarchConfig {
            y_start: 1.0,
            y_step: 0.001,
            samples: 1001,
            probe_offset: 0.01,
        }
    }
}

impl MarchConfig {
    /// y coordinate of sample `k`.
    pub fn y_at(&self, k: usize) -> f64 {
        self.y_start - k as f64 * self.y_step
    }
}

// --- Shading Configuration ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Glyphs from darkest to brightest.
    pub ramp: String,
    /// Brightness multiplier applied before truncating to a ramp index.
    pub scale: f64,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        ShadingConfig {
            ramp: ".:-=+*#%@".to_string(),
            scale: 5.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn default_canvas_covers_documented_domain() {
        let canvas = CanvasConfig::default();
        assert_eq!(canvas.x_at(0), -1.5);
        assert!((canvas.x_at(canvas.columns - 1) - 1.475).abs() < 1e-12);
        assert!(canvas.x_at(canvas.columns - 1) < 1.5);
        assert_eq!(canvas.z_at(0), 1.5);
        assert!((canvas.z_at(canvas.rows - 1) + 1.45).abs() < 1e-12);
        assert!(canvas.z_at(canvas.rows - 1) > -1.5);
    }

    #[test_log::test]
    fn default_march_ends_at_zero() {
        let march = MarchConfig::default();
        assert_eq!(march.y_at(0), 1.0);
        assert!(march.y_at(march.samples - 1).abs() < 1e-12);
    }

    #[test_log::test]
    fn defaults_validate() {
        assert!(CONFIG.validate().is_ok());
        assert_eq!(*CONFIG, Config::default());
    }

    #[test_log::test]
    fn validate_rejects_degenerate_values() {
        let mut config = Config::default();
        config.canvas.rows = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.shading.ramp.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.march.y_step = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.canvas.z_step = -0.05;
        assert!(config.validate().is_err());
    }

    #[test_log::test]
    fn validate_rejects_unusable_shading_scale() {
        for scale in [0.0, -5.0, f64::NAN] {
            let mut config = Config::default();
            config.shading.scale = scale;
            let err = config.validate().expect_err("scale must be rejected");
            assert!(err.to_string().contains("shading scale"), "{}", err);
        }
    }
}
