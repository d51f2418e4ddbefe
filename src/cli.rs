//! Command-line arguments for the `snake-frame` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::core::{HudStats, SnakeArena};
use crate::types::{Cell, GridSpec, Scene, CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Food position of the default scene.
pub const DEFAULT_FOOD: Cell = Cell::new(10, 10);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// JSON scene to render instead of the default arena.
    pub scene: Option<PathBuf>,
    /// Write a PNG here instead of streaming to the terminal.
    pub out: Option<PathBuf>,
    pub score: u32,
    pub best: u32,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--scene" | "--out" | "--score" | "--best" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                match flag {
                    "--scene" => parsed.scene = Some(PathBuf::from(v)),
                    "--out" => parsed.out = Some(PathBuf::from(v)),
                    "--score" => parsed.score = parse_count(flag, v)?,
                    _ => parsed.best = parse_count(flag, v)?,
                }
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(parsed)
}

fn parse_count(flag: &str, v: &str) -> Result<u32> {
    v.parse::<u32>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// The 800x600 arena with a single food tile and the score HUD.
pub fn default_scene(stats: HudStats) -> Result<Scene> {
    let grid = GridSpec::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE)?;
    Ok(SnakeArena::new(grid)
        .with_food(DEFAULT_FOOD)
        .with_stats(stats)
        .into_scene())
}

pub fn load_scene(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading scene {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing scene {}", path.display()))
}
