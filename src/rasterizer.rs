// src/rasterizer.rs

//! Scan-converts the heart into rows of glyphs.
//!
//! The canvas is scanned row by row with z decreasing from the top, and
//! column by column with x increasing. Every coordinate is derived from its
//! integer row/column index, so the grid always has exactly
//! `rows x columns` cells regardless of floating-point rounding.
//!
//! Per cell:
//!
//! ```text
//! f(x, 0, z) > 0 ?  ──yes──▶  ' '
//!       │no
//!       ▼
//! y0 = h(x, z)  →  Gradient::probe  →  brightness  →  GlyphRamp
//! ```

use crate::config::Config;
use crate::depth::surface_depth;
use crate::field::is_inside;
use crate::glyph::{GlyphRamp, BLANK};
use crate::shading::Gradient;
use anyhow::{anyhow, Context, Result};
use log::{debug, trace};
use std::fmt;

/// Converts grid cells to glyphs for one configuration.
#[derive(Debug, Clone)]
pub struct Rasterizer {
    config: Config,
    ramp: GlyphRamp,
}

impl Rasterizer {
    /// Creates a rasterizer, validating `config` first.
    pub fn new(config: Config) -> Result<Self> {
        config.validate().context("Invalid render configuration")?;
        let ramp = GlyphRamp::new(&config.shading.ramp, config.shading.scale)
            .ok_or_else(|| anyhow!("glyph ramp must not be empty"))?;
        debug!(
            "Rasterizer ready: {}x{} cells, ramp {:?}",
            config.canvas.columns, config.canvas.rows, config.shading.ramp
        );
        Ok(Self { config, ramp })
    }

    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    /// (columns, rows) of the canvas.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.config.canvas.columns, self.config.canvas.rows)
    }

    /// Glyph for the cell at `(x, z)`.
    pub fn shade_cell(&self, x: f64, z: f64) -> char {
        // Silhouette test on the y = 0 plane.
        if !is_inside(x, 0.0, z) {
            return BLANK;
        }
        let march = &self.config.march;
        let y0 = surface_depth(march, x, z);
        let gradient = Gradient::probe(march, x, z, y0);
        self.ramp.glyph_for(gradient.brightness())
    }

    /// One row of the picture, without its line terminator.
    pub fn rasterize_row(&self, row: usize) -> String {
        let canvas = &self.config.canvas;
        let z = canvas.z_at(row);
        let line: String = (0..canvas.columns)
            .map(|col| self.shade_cell(canvas.x_at(col), z))
            .collect();
        trace!("Row {} (z = {:.3}): {:?}", row, z, line.trim_end());
        line
    }

    /// Rows in output order, computed lazily.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.config.canvas.rows).map(move |row| self.rasterize_row(row))
    }

    /// The whole picture, collected in memory.
    pub fn frame(&self) -> Frame {
        Frame {
            rows: self.rows().collect(),
        }
    }
}

/// A fully rasterized picture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub rows: Vec<String>,
}

impl Frame {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of visible (non-blank) cells.
    pub fn ink(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().filter(|&c| c != BLANK).count())
            .sum()
    }
}

impl fmt::Display for Frame {
    /// Rows joined the way they are written to stdout: each one ends in '\n'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
