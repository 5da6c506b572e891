//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected (seedable) RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{CollisionKind, Rect, award_passed, detect_collision};
pub use state::{Actor, GamePhase, GameState, Obstacle};
pub use tick::{TickOutcome, tick};
