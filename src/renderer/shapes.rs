//! Shape generation for the 2D scene
//!
//! Turns a `GameState` into a flat list of draw commands. No canvas access
//! here, so the projection can be checked without a browser.

use glam::Vec2;

use crate::sim::{Actor, GameState};

/// Spider body colour (dark purple)
pub const SPIDER_COLOR: &str = "#4B0082";
/// Obstacle colour (dark green)
pub const OBSTACLE_COLOR: &str = "#008000";
pub const SCORE_FILL: &str = "white";
pub const SCORE_STROKE: &str = "black";
pub const SCORE_FONT: &str = "40px \"Press Start 2P\", cursive";
pub const SCORE_OUTLINE_WIDTH: f64 = 4.0;
/// Baseline of the score text
pub const SCORE_Y: f32 = 60.0;

/// 5x5 pixel-art spider, row-major, 1 = filled
pub const SPIDER_PIXELS: [[u8; 5]; 5] = [
    [0, 0, 1, 0, 0],
    [0, 1, 1, 1, 0],
    [1, 1, 1, 1, 1],
    [0, 1, 1, 1, 0],
    [0, 0, 1, 0, 0],
];

/// A single primitive for the canvas backend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Wipe the whole field
    Clear { size: Vec2 },
    FillRect {
        pos: Vec2,
        size: Vec2,
        color: &'static str,
    },
    /// Filled text with an outline, centred on `pos.x`
    OutlinedText {
        text: String,
        pos: Vec2,
        font: &'static str,
        fill: &'static str,
        stroke: &'static str,
        line_width: f64,
    },
}

/// Filled cells of the spider sprite scaled to the actor's box
pub fn spider_pixels(actor: &Actor) -> Vec<DrawCommand> {
    let cols = SPIDER_PIXELS[0].len() as f32;
    let pixel = actor.size.x / cols;
    let mut commands = Vec::with_capacity(13);

    for (r, row) in SPIDER_PIXELS.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == 1 {
                commands.push(DrawCommand::FillRect {
                    pos: actor.pos + Vec2::new(c as f32 * pixel, r as f32 * pixel),
                    size: Vec2::splat(pixel),
                    color: SPIDER_COLOR,
                });
            }
        }
    }
    commands
}

/// Upper and lower columns for every obstacle
pub fn obstacle_columns(state: &GameState) -> Vec<DrawCommand> {
    let width = state.config.obstacle_width;
    let height = state.config.field_height;
    let mut commands = Vec::with_capacity(state.obstacles.len() * 2);

    for ob in &state.obstacles {
        commands.push(DrawCommand::FillRect {
            pos: Vec2::new(ob.x, 0.0),
            size: Vec2::new(width, ob.gap_top),
            color: OBSTACLE_COLOR,
        });
        commands.push(DrawCommand::FillRect {
            pos: Vec2::new(ob.x, ob.gap_bottom),
            size: Vec2::new(width, height - ob.gap_bottom),
            color: OBSTACLE_COLOR,
        });
    }
    commands
}

/// Full frame: clear, obstacles, spider, score on top
pub fn scene(state: &GameState) -> Vec<DrawCommand> {
    let config = &state.config;
    let mut commands = vec![DrawCommand::Clear {
        size: Vec2::new(config.field_width, config.field_height),
    }];
    commands.extend(obstacle_columns(state));
    commands.extend(spider_pixels(&state.actor));
    commands.push(DrawCommand::OutlinedText {
        text: state.score.to_string(),
        pos: Vec2::new(config.field_width / 2.0, SCORE_Y),
        font: SCORE_FONT,
        fill: SCORE_FILL,
        stroke: SCORE_STROKE,
        line_width: SCORE_OUTLINE_WIDTH,
    });
    commands
}
