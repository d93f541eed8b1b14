// src/field.rs

//! The implicit heart surface.
//!
//! The surface is the zero set of
//!
//! ```text
//! f(x, y, z) = (x² + 9/4·y² + z² − 1)³ − x²·z³ − 9/80·y²·z³
//! ```
//!
//! Points where `f <= 0` are inside the heart. z is the vertical axis of the
//! shape (the lobes are at positive z), y is the viewing axis.

/// Evaluates the heart field at `(x, y, z)`.
pub fn heart(x: f64, y: f64, z: f64) -> f64 {
    let (x2, y2, z3) = (x * x, y * y, z * z * z);
    let a = x2 + 9.0 / 4.0 * y2 + z * z - 1.0;
    a * a * a - x2 * z3 - 9.0 / 80.0 * y2 * z3
}

/// Returns true when `(x, y, z)` lies on or inside the surface.
#[inline]
pub fn is_inside(x: f64, y: f64, z: f64) -> bool {
    heart(x, y, z) <= 0.0
}
