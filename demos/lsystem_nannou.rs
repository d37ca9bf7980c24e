//! Interactive L-system viewer.
//!
//! Left/Right cycle through the presets, Up/Down change the iteration count.
//! Run with `cargo run --features nannou --example lsystem_nannou`.

use aoer_lsystem::config::presets::{DEFAULT_PRESET, PRESETS};
use aoer_lsystem::config::{Drawing, LSystemConfig};
use geo::BoundingRect;
use nannou::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The Model holds the session configuration and the last successful drawing.
struct Model {
    preset: usize,
    config: LSystemConfig,
    drawing: Drawing,
}

impl Model {
    /// Recomputes the drawing, keeping the old one if the refresh fails.
    fn refresh(&mut self) {
        match self.config.refresh() {
            Ok(drawing) => self.drawing = drawing,
            Err(err) => tracing::warn!("refresh failed: {}", err),
        }
    }

    fn select(&mut self, preset: usize) {
        self.preset = preset % PRESETS.len();
        if let Err(err) = self.config.load_preset(PRESETS[self.preset].name) {
            tracing::warn!("{}", err);
        }
        self.refresh();
    }
}

fn model(app: &App) -> Model {
    app.new_window()
        .size(900, 900)
        .key_pressed(key_pressed)
        .view(view)
        .build()
        .unwrap();

    let config = LSystemConfig::default();
    let drawing = config.refresh().unwrap();
    let mut model = Model {
        preset: 0,
        config,
        drawing,
    };
    let start = PRESETS
        .iter()
        .position(|p| p.name == DEFAULT_PRESET)
        .unwrap_or(0);
    model.select(start);
    model
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Right => model.select(model.preset + 1),
        Key::Left => model.select(model.preset + PRESETS.len() - 1),
        Key::Up if model.config.iterations < 8 => {
            model.config.iterations += 1;
            model.refresh();
        }
        Key::Down if model.config.iterations > 0 => {
            model.config.iterations -= 1;
            model.refresh();
        }
        _ => {}
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    frame.clear(WHITE);

    let lines = model.drawing.to_multiline();
    let win = app.window_rect().pad(40.0);
    if let Some(bounds) = lines.bounding_rect() {
        let scale = (win.w() as f64 / bounds.width().max(1e-9))
            .min(win.h() as f64 / bounds.height().max(1e-9));
        let center = bounds.center();
        // Nannou's y axis already points up, matching a turtle heading of 0.
        for line in lines.iter() {
            let mut points = line.points().map(|p| {
                pt2(
                    ((p.x() - center.x) * scale) as f32,
                    ((p.y() - center.y) * scale) as f32,
                )
            });
            if let (Some(start), Some(end)) = (points.next(), points.next()) {
                draw.line().start(start).end(end).weight(1.0).color(NAVY);
            }
        }
    }

    draw.text(&format!(
        "{} (N = {}): {}",
        PRESETS[model.preset].name,
        model.config.iterations,
        model.drawing.status()
    ))
    .xy(app.window_rect().bottom_left() + vec2(220.0, 20.0))
    .w(400.0)
    .color(BLACK);

    draw.to_frame(app, &frame).unwrap();
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    nannou::app(model).run();
}
