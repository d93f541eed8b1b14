// src/depth.rs

//! Column depth search.
//!
//! For a fixed `(x, z)` the surface is located by walking y downward from
//! `MarchConfig::y_start` in fixed steps and stopping at the first sample
//! inside the heart. There is no refinement between samples, so the depth
//! resolution is exactly one step.
//!
//! A column that never enters the heart yields `0.0`, which cannot be told
//! apart from a genuine hit at y = 0. Callers only search columns whose
//! y = 0 sample is already known to be inside, so in the render the
//! ambiguity is harmless.

use crate::config::MarchConfig;
use crate::field::is_inside;

/// Depth returned for a column that never enters the surface.
pub const NO_HIT: f64 = 0.0;

/// Returns the largest sampled y at which `(x, y, z)` is inside the heart,
/// or [`NO_HIT`].
pub fn surface_depth(march: &MarchConfig, x: f64, z: f64) -> f64 {
    (0..march.samples)
        .map(|k| march.y_at(k))
        .find(|&y| is_inside(x, y, z))
        .unwrap_or(NO_HIT)
}
