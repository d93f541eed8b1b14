// src/shading.rs

//! Turns a surface depth into a brightness.
//!
//! The normal is approximated by finite differences of the depth field:
//! the depth is probed one `probe_offset` to the right and one
//! `probe_offset` toward positive z. The y component of the gradient is not
//! measured; it is the probe offset itself. Brightness is then
//!
//! ```text
//! d = (nx + ny - nz) / |n| * 0.5 + 0.5
//! ```
//!
//! This is a cheap fixed-light heuristic, not a Lambertian term, and `d` can
//! land outside [0, 1]. `GlyphRamp::index_for` clamps whatever comes out.

use crate::config::MarchConfig;
use crate::depth::surface_depth;

/// Finite-difference gradient of the depth field at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub nx: f64,
    pub ny: f64,
    pub nz: f64,
}

impl Gradient {
    /// Probes the depth field around `(x, z)`, whose own depth is `y0`.
    pub fn probe(march: &MarchConfig, x: f64, z: f64, y0: f64) -> Self {
        let step = march.probe_offset;
        Gradient {
            nx: surface_depth(march, x + step, z) - y0,
            ny: step,
            nz: surface_depth(march, x, z + step) - y0,
        }
    }

    pub fn norm(&self) -> f64 {
        (self.nx * self.nx + self.ny * self.ny + self.nz * self.nz).sqrt()
    }

    /// Brightness of the cell. NaN when the gradient has zero length.
    pub fn brightness(&self) -> f64 {
        let inv_norm = 1.0 / self.norm();
        (self.nx + self.ny - self.nz) * inv_norm * 0.5 + 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn flat_patch_is_fully_lit() {
        // A surface parallel to the view plane only has the fixed y term.
        let g = Gradient { nx: 0.0, ny: 0.01, nz: 0.0 };
        assert!((g.brightness() - 1.0).abs() < 1e-12);
    }

    #[test_log::test]
    fn brightness_ignores_gradient_length() {
        let a = Gradient { nx: 0.003, ny: 0.01, nz: -0.002 };
        let b = Gradient { nx: 0.03, ny: 0.1, nz: -0.02 };
        assert!((a.brightness() - b.brightness()).abs() < 1e-12);
    }

    #[test_log::test]
    fn brightness_can_leave_unit_interval() {
        let dark = Gradient { nx: -1.0, ny: 0.0, nz: 1.0 };
        assert!(dark.brightness() < 0.0);
        let bright = Gradient { nx: 1.0, ny: 1.0, nz: -1.0 };
        assert!(bright.brightness() > 1.0);
    }

    #[test_log::test]
    fn zero_gradient_is_nan() {
        let g = Gradient { nx: 0.0, ny: 0.0, nz: 0.0 };
        assert!(g.brightness().is_nan());
    }

    #[test_log::test]
    fn probe_uses_constant_y_component() {
        let march = MarchConfig::default();
        let y0 = surface_depth(&march, 0.0, 0.0);
        let g = Gradient::probe(&march, 0.0, 0.0, y0);
        assert_eq!(g.ny, march.probe_offset);
        // Moving right from the center the surface can only drop.
        assert!(g.nx <= 0.0);
        assert!(g.norm() > 0.0);
    }

    #[test_log::test]
    fn probe_matches_reference_cells() {
        use crate::glyph::GlyphRamp;

        let march = MarchConfig::default();
        let ramp = GlyphRamp::default();
        // (x, z, y0, nx, nz, brightness, glyph)
        let cells = [
            (0.0, 0.0, 0.666, 0.0, 0.001, 0.947_766_735_594_489, '+'),
            (-0.5, 0.5, 0.607, 0.003, -0.001, 1.167_423_812_471_914_7, '*'),
            (0.5, -0.5, 0.283, -0.011, 0.013, 0.145_541_221_520_716_4, '.'),
            (0.25, 0.9, 0.485, 0.001, -0.007, 1.234_846_922_834_953_5, '#'),
        ];
        for (x, z, y0, nx, nz, brightness, glyph) in cells {
            let depth = surface_depth(&march, x, z);
            assert!((depth - y0).abs() < 1e-9, "h({x}, {z}) = {depth}");
            let g = Gradient::probe(&march, x, z, depth);
            assert!((g.nx - nx).abs() < 1e-9, "nx at ({x}, {z}) = {}", g.nx);
            assert!((g.nz - nz).abs() < 1e-9, "nz at ({x}, {z}) = {}", g.nz);
            assert!((g.brightness() - brightness).abs() < 1e-9);
            assert_eq!(ramp.glyph_for(g.brightness()), glyph);
        }
    }
}
