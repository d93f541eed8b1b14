// In src/main.rs

//! Main entry point for `ascii-heart`.

use ascii_heart::{config::CONFIG, rasterizer::Rasterizer, renderer::Renderer};

use anyhow::Context;
use log::{debug, info};

/// Renders the heart to stdout.
fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the picture. Default filter is
    // "warn" if RUST_LOG is not set, so a plain run is silent there.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    info!("Starting ascii-heart...");
    debug!("Configuration: {:?}", *CONFIG);

    let rasterizer =
        Rasterizer::new(CONFIG.clone()).context("Failed to initialize rasterizer")?;
    let renderer = Renderer::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rows = renderer
        .draw(&rasterizer, &mut out)
        .context("Failed to render heart to stdout")?;

    info!("ascii-heart exited successfully ({} rows).", rows);
    Ok(())
}
