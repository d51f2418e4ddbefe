//! Snake frame renderer (default binary).
//!
//! Renders one arena frame and emits it once: as an inline terminal image by
//! default, or as a PNG file when `--out` or `SNAKE_FRAME_OUTPUT` is set.

use anyhow::{Context, Result};
use log::info;

use snake_frame::cli::{default_scene, load_scene, parse_args};
use snake_frame::core::{FrameAssembler, HudStats};
use snake_frame::term::ExportConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&args)?;

    let scene = match &args.scene {
        Some(path) => load_scene(path)?,
        None => default_scene(HudStats {
            score: args.score,
            best_score: args.best,
        })?,
    };

    let mut config = ExportConfig::from_env();
    if args.out.is_some() {
        config.output = args.out.clone();
    }

    let canvas = FrameAssembler::default()
        .render(&scene)
        .context("rendering frame")?;
    info!(
        "rendered {}x{} frame with {} tiles",
        canvas.width(),
        canvas.height(),
        scene.tiles.len()
    );

    config
        .sink()
        .emit(&canvas)
        .context("emitting frame")?;
    Ok(())
}
