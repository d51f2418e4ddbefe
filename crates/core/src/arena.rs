//! Snake arena scenes: palette, HUD labels and a scene builder.
//!
//! Game code owns the snake and food positions; this module only turns a
//! snapshot of them into a [`Scene`] with the right z-order (food under snake).

use crate::types::{Cell, Color, GridSpec, Label, Scene, Tile, HUD_MARGIN};

/// Help text shown in the bottom-left corner.
pub const INSTRUCTIONS: &str = "Use arrow keys to change snake direction!";

/// Colors for every layer of an arena frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub fill: Color,
    /// Arena interior. Transparent lets the terminal background show through.
    pub background: Color,
    pub grid_line: Color,
    pub snake: Color,
    pub food: Color,
    pub text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill: Color::WHITE,
            background: Color::TRANSPARENT,
            grid_line: Color::MEDIUM_AQUAMARINE,
            snake: Color::TEAL,
            food: Color::RED,
            text: Color::WHITE,
        }
    }
}

/// Score readout for the HUD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStats {
    pub score: u32,
    pub best_score: u32,
}

/// The three HUD labels, with baselines `HUD_MARGIN` above the bottom edge:
/// instructions on the left, best score from the middle, score near the right.
pub fn hud_labels(grid: GridSpec, stats: HudStats, color: Color) -> Vec<Label> {
    let width = grid.pixel_width() as i32;
    let y = grid.pixel_height() as i32 - HUD_MARGIN;
    vec![
        Label::new(10, y, INSTRUCTIONS, color),
        Label::new(
            width / 2 + 10,
            y,
            format!("Best Score: {}", stats.best_score),
            color,
        ),
        Label::new(width - 100, y, format!("Score: {}", stats.score), color),
    ]
}

/// Builder for a snake arena [`Scene`].
#[derive(Debug, Clone)]
pub struct SnakeArena {
    grid: GridSpec,
    palette: Palette,
    food: Vec<Cell>,
    snake: Vec<Cell>,
    stats: Option<HudStats>,
}

impl SnakeArena {
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            palette: Palette::default(),
            food: Vec::new(),
            snake: Vec::new(),
            stats: None,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_food(mut self, cell: Cell) -> Self {
        self.food.push(cell);
        self
    }

    /// Snake segments, head first.
    pub fn with_snake(mut self, segments: impl IntoIterator<Item = Cell>) -> Self {
        self.snake.extend(segments);
        self
    }

    pub fn with_stats(mut self, stats: HudStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Build the scene. Food tiles come first so a segment on top of food
    /// hides it.
    pub fn into_scene(self) -> Scene {
        let p = self.palette;
        let tiles = self
            .food
            .iter()
            .map(|&cell| Tile::new(cell, p.food))
            .chain(self.snake.iter().map(|&cell| Tile::new(cell, p.snake)))
            .collect();
        let labels = self
            .stats
            .map(|stats| hud_labels(self.grid, stats, p.text))
            .unwrap_or_default();

        Scene {
            grid: self.grid,
            fill: p.fill,
            background: p.background,
            grid_line: p.grid_line,
            tiles,
            labels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

    fn window_grid() -> GridSpec {
        GridSpec::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE).unwrap()
    }

    #[test]
    fn hud_labels_follow_the_window_layout() {
        let stats = HudStats {
            score: 7,
            best_score: 42,
        };
        let labels = hud_labels(window_grid(), stats, Color::WHITE);
        let placed: Vec<_> = labels.iter().map(|l| (l.x, l.y, l.text.as_str())).collect();
        assert_eq!(
            placed,
            vec![
                (10, 590, INSTRUCTIONS),
                (410, 590, "Best Score: 42"),
                (700, 590, "Score: 7"),
            ]
        );
    }

    #[test]
    fn food_is_drawn_before_snake() {
        let cell = Cell::new(3, 3);
        let scene = SnakeArena::new(window_grid())
            .with_snake([cell, Cell::new(3, 2)])
            .with_food(cell)
            .into_scene();

        let palette = Palette::default();
        let colors: Vec<_> = scene.tiles.iter().map(|t| t.color).collect();
        assert_eq!(colors, vec![palette.food, palette.snake, palette.snake]);
        assert_eq!(scene.tiles[1].cell, cell);
        assert!(scene.labels.is_empty());
    }

    #[test]
    fn palette_flows_into_scene_colors() {
        let palette = Palette {
            fill: Color::BLACK,
            background: Color::WHITE,
            grid_line: Color::RED,
            snake: Color::rgb(1, 1, 1),
            food: Color::rgb(2, 2, 2),
            text: Color::rgb(3, 3, 3),
        };
        let scene = SnakeArena::new(window_grid())
            .with_palette(palette)
            .with_stats(HudStats::default())
            .into_scene();

        assert_eq!(scene.fill, Color::BLACK);
        assert_eq!(scene.background, Color::WHITE);
        assert_eq!(scene.grid_line, Color::RED);
        assert_eq!(scene.labels.len(), 3);
        assert!(scene.labels.iter().all(|l| l.color == palette.text));
    }
}
