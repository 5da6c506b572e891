//! Spider Flap - a pixel-art spider flapping through scrolling gaps
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `lifecycle`: Menu / Playing / GameOver controller driving the sim
//! - `renderer`: Projection of game state to 2D canvas draw commands
//! - `platform`: Clock and input abstraction (browser interval, key mapping)
//! - `config`: Construction-time game constants

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use lifecycle::{Game, GameOverSummary, TickReport};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE_HZ: u32 = 60;

    /// Play field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Actor (spider) - fixed column, square sprite
    pub const ACTOR_X: f32 = 100.0;
    pub const ACTOR_SIZE: f32 = 30.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity assigned on jump (pixels/tick, negative = up)
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Obstacle scroll speed (pixels/tick)
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Vertical size of the passable gap
    pub const GAP_HEIGHT: f32 = 200.0;
    /// Minimum distance between the gap and the top/bottom of the field
    pub const GAP_MARGIN: f32 = 50.0;
    /// Gap positions and sizes live on a 1/GAP_GRID pixel grid
    pub const GAP_GRID: f32 = 16.0;
    /// Largest field side for which grid values stay exact in f32
    pub const MAX_FIELD_SIZE: f32 = 65536.0;
    /// A new obstacle spawns once the newest one is this far from the right edge
    pub const SPAWN_SPACING: f32 = 250.0;
}
