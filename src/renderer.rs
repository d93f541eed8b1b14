// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` writes the rows produced by a `Rasterizer` to an output
//! stream. Rows are written as soon as they are computed, top row first,
//! each followed by a newline, and the stream is flushed once at the end.
//! The bytes written are identical to `Rasterizer::frame().to_string()`.

use crate::rasterizer::Rasterizer;
use anyhow::{Context, Result};
use log::{debug, trace};
use std::io::Write;

/// Streams a `Rasterizer`'s picture to a writer.
///
/// Stateless beyond the scope of a single `draw` call.
#[derive(Debug, Default)]
pub struct Renderer {}

impl Renderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Rasterizes every row and writes it to `out`.
    ///
    /// # Returns
    ///
    /// * `Result<usize>`: the number of rows written, or the first I/O error
    ///   annotated with the row it occurred on.
    pub fn draw(&self, rasterizer: &Rasterizer, out: &mut dyn Write) -> Result<usize> {
        let (columns, rows) = rasterizer.dimensions();
        debug!("Renderer: drawing {} rows of {} columns", rows, columns);

        let mut written = 0;
        for (y, line) in rasterizer.rows().enumerate() {
            out.write_all(line.as_bytes())
                .and_then(|_| out.write_all(b"\n"))
                .with_context(|| format!("Failed to write row {} of {}", y, rows))?;
            trace!("Renderer: wrote row {}", y);
            written += 1;
        }
        out.flush().context("Failed to flush output")?;

        debug!("Renderer: finished, {} rows written", written);
        Ok(written)
    }
}
