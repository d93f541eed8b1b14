// src/glyph.rs

//! Defines the `GlyphRamp`, the ordered set of characters used to turn a
//! brightness value into a visible cell, and the blank glyph emitted outside
//! the silhouette.

use log::trace;
use std::fmt;

/// Glyph emitted for cells outside the heart's outline.
pub const BLANK: char = ' ';

/// Default ramp, darkest first.
pub const DEFAULT_RAMP: &str = ".:-=+*#%@";

/// An ordered, non-empty run of glyphs of increasing visual density.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
    scale: f64,
}

impl GlyphRamp {
    /// Builds a ramp from `chars`. Returns `None` when `chars` is empty.
    pub fn new(chars: &str, scale: f64) -> Option<Self> {
        let glyphs: Vec<char> = chars.chars().collect();
        if glyphs.is_empty() {
            return None;
        }
        Some(Self { glyphs, scale })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Maps a brightness to a ramp index: `floor(brightness * scale)`,
    /// clamped into the ramp.
    ///
    /// Brightness values outside the nominal range (and NaN, which arises
    /// from a zero-length gradient) would otherwise index past either end.
    /// NaN maps to the first glyph.
    pub fn index_for(&self, brightness: f64) -> usize {
        let last = self.glyphs.len() - 1;
        let raw = (brightness * self.scale).floor();
        if raw.is_nan() {
            trace!("brightness {} is not a number, using glyph 0", brightness);
            return 0;
        }
        if raw < 0.0 || raw > last as f64 {
            trace!(
                "glyph index {} outside 0..={}, clamping (brightness {})",
                raw,
                last,
                brightness
            );
        }
        raw.clamp(0.0, last as f64) as usize
    }

    /// The glyph for `brightness`. Always a character of the ramp.
    pub fn glyph_for(&self, brightness: f64) -> char {
        self.glyphs[self.index_for(brightness)]
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
            scale: 5.0,
        }
    }
}

impl fmt::Display for GlyphRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.glyphs {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
