//! Renders a preset to an SVG file.
//!
//! `cargo run --example preset_svg -- "Fractal plant" fractal-plant.svg`
//!
//! Run with `RUST_LOG=debug` to watch each expansion pass.

use anyhow::{Context, Result};
use aoer_lsystem::config::presets::{preset_names, DEFAULT_PRESET};
use aoer_lsystem::prelude::*;
use geo_types::{coord, Rect};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| DEFAULT_PRESET.to_string());
    let output = args.next().unwrap_or_else(|| "lsystem.svg".to_string());

    let mut config = LSystemConfig::default();
    if let Err(err) = config.load_preset(&name) {
        let known: Vec<&str> = preset_names().collect();
        anyhow::bail!("{}; known presets: {}", err, known.join(", "));
    }
    let drawing = config.refresh()?;

    // A4 portrait, in mm, with the turtle's "up" pointing up the page.
    let page = Rect::new(coord! {x: 0.0, y: 0.0}, coord! {x: 210.0, y: 297.0});
    let document = drawing
        .to_multiline()
        .to_svg(&Arrangement::FitCenterMargin(15.0, page, true), "black", 0.3)?;

    svg::save(&output, &document).with_context(|| format!("writing {}", output))?;
    tracing::info!(preset = %name, output = %output, "saved");
    Ok(())
}
