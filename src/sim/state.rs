//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Current phase of the game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a session name and a start action
    Menu,
    /// Active gameplay, clock running
    Playing,
    /// Run ended, clock stopped
    GameOver,
}

/// The player-controlled spider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner (x never changes after spawn)
    pub pos: Vec2,
    /// Width and height, constant for the session
    pub size: Vec2,
    /// Vertical velocity (positive = downward)
    pub vel_y: f32,
}

impl Actor {
    /// Spawn at the fixed column, vertically centred, at rest
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.actor_x, config.actor_start_y()),
            size: Vec2::new(config.actor_width, config.actor_height),
            vel_y: 0.0,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Overwrite vertical velocity with the jump impulse
    pub fn jump(&mut self, impulse: f32) {
        self.vel_y = impulse;
    }
}

/// A scrolling column pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (decreases every tick)
    pub x: f32,
    /// Bottom of the upper column
    pub gap_top: f32,
    /// Top of the lower column (`gap_top + gap_height`)
    pub gap_bottom: f32,
    /// Set once the actor has passed this obstacle
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_bottom: gap_top + gap_height,
            scored: false,
        }
    }

    /// Right (trailing) edge for a given column width
    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Fixed parameters for this session
    pub config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    /// Display name captured at start (empty while in Menu)
    pub session_name: String,
    /// Obstacles cleared this run
    pub score: u32,
    /// Ticks elapsed this run
    pub time_ticks: u64,
    pub actor: Actor,
    /// Spawn order == left-to-right screen order
    pub obstacles: VecDeque<Obstacle>,
}

impl GameState {
    /// Fresh state sitting in the menu
    pub fn new(config: GameConfig) -> Self {
        let actor = Actor::new(&config);
        Self {
            config,
            phase: GamePhase::Menu,
            session_name: String::new(),
            score: 0,
            time_ticks: 0,
            actor,
            obstacles: VecDeque::new(),
        }
    }

    /// Reset actor, score and obstacles for a new run
    pub fn reset_run(&mut self) {
        self.actor = Actor::new(&self.config);
        self.score = 0;
        self.time_ticks = 0;
        self.obstacles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert!(state.session_name.is_empty());
        assert_eq!(state.actor.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.actor.vel_y, 0.0);
    }

    #[test]
    fn test_obstacle_gap_height() {
        let ob = Obstacle::new(400.0, 120.0, 200.0);
        assert_eq!(ob.gap_bottom - ob.gap_top, 200.0);
        assert_eq!(ob.right(60.0), 460.0);
        assert!(!ob.scored);
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut actor = Actor::new(&GameConfig::default());
        actor.vel_y = 5.5;
        actor.jump(-8.0);
        assert_eq!(actor.vel_y, -8.0);
        actor.jump(-8.0);
        assert_eq!(actor.vel_y, -8.0);
    }

    #[test]
    fn test_reset_run() {
        let mut state = GameState::new(GameConfig::default());
        state.score = 7;
        state.time_ticks = 500;
        state.actor.pos.y = 12.0;
        state.actor.vel_y = 3.0;
        state.obstacles.push_back(Obstacle::new(10.0, 60.0, 200.0));

        state.reset_run();
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.actor, Actor::new(&state.config));
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_state_snapshot_json() {
        let mut state = GameState::new(GameConfig::default());
        state.obstacles.push_back(Obstacle::new(250.0, 80.0, 200.0));
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.obstacles, state.obstacles);
        assert_eq!(restored.phase, GamePhase::Menu);
    }
}
