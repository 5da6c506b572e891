//! Fixed timestep simulation tick
//!
//! One tick = physics, then collision, then scoring. A tick is applied in
//! full before the next one can start.

use rand::Rng;

use super::collision::{CollisionKind, award_passed, detect_collision};
use super::physics;
use super::state::GameState;

/// Result of advancing the simulation by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still flying; number of obstacles cleared this tick
    Continue { scored: u32 },
    /// The run ended this tick (nothing was scored)
    Collided(CollisionKind),
}

/// Advance the game state by one fixed timestep
///
/// Does not look at the lifecycle phase; callers only tick while playing.
pub fn tick<R: Rng>(state: &mut GameState, rng: &mut R) -> TickOutcome {
    state.time_ticks += 1;

    physics::step(state, rng);

    if let Some(kind) = detect_collision(state) {
        return TickOutcome::Collided(kind);
    }

    let scored = award_passed(state);
    TickOutcome::Continue { scored }
}
