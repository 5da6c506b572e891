//! Actor integration and obstacle scrolling
//!
//! Pure state transitions: no collision, scoring or lifecycle logic here.

use rand::Rng;

use super::state::{Actor, GameState, Obstacle};
use crate::config::GameConfig;
use crate::consts::GAP_GRID;

/// Apply gravity, then move the actor by its new velocity
pub fn integrate_actor(actor: &mut Actor, gravity: f32) {
    actor.vel_y += gravity;
    actor.pos.y += actor.vel_y;
}

/// Scroll every obstacle left by the same amount
pub fn advance_obstacles(state: &mut GameState) {
    let speed = state.config.obstacle_speed;
    for obstacle in state.obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Drop obstacles whose right edge has left the field, front first
///
/// Stops at the first obstacle still (partly) visible, so nothing behind it
/// is ever removed out of order. Returns the number removed.
pub fn recycle_obstacles(state: &mut GameState) -> usize {
    let width = state.config.obstacle_width;
    let mut removed = 0;
    while state
        .obstacles
        .front()
        .is_some_and(|front| front.right(width) < 0.0)
    {
        state.obstacles.pop_front();
        removed += 1;
    }
    if removed > 0 {
        log::debug!("Recycled {} obstacle(s), {} left", removed, state.obstacles.len());
    }
    removed
}

/// Whether the newest obstacle has scrolled far enough to make room
pub fn needs_spawn(state: &GameState) -> bool {
    let threshold = state.config.field_width - state.config.spawn_spacing;
    state.obstacles.back().is_none_or(|newest| newest.x < threshold)
}

/// Create an obstacle at the right edge with a random gap fully on screen
///
/// `gap_top` is snapped down to the `GAP_GRID`; with a validated config the
/// margin and gap height sit on the same grid, so the gap stays inside the
/// band and `gap_bottom - gap_top == gap_height` exactly.
pub fn spawn_obstacle<R: Rng>(config: &GameConfig, rng: &mut R) -> Obstacle {
    let raw = rng.random_range(config.gap_top_range());
    let gap_top = (raw * GAP_GRID).floor() / GAP_GRID;
    Obstacle::new(config.field_width, gap_top, config.gap_height)
}

/// Append a new obstacle if spacing allows; returns true if one was spawned
pub fn maybe_spawn<R: Rng>(state: &mut GameState, rng: &mut R) -> bool {
    if !needs_spawn(state) {
        return false;
    }
    let obstacle = spawn_obstacle(&state.config, rng);
    log::debug!(
        "Spawned obstacle at x={} gap=[{:.1}, {:.1})",
        obstacle.x,
        obstacle.gap_top,
        obstacle.gap_bottom
    );
    state.obstacles.push_back(obstacle);
    true
}

/// One physics step: actor, scroll, recycle, spawn
pub fn step<R: Rng>(state: &mut GameState, rng: &mut R) {
    integrate_actor(&mut state.actor, state.config.gravity);
    advance_obstacles(state);
    recycle_obstacles(state);
    maybe_spawn(state, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> GameState {
        GameState::new(GameConfig::default())
    }

    #[test]
    fn test_integrate_actor() {
        let mut s = state();
        integrate_actor(&mut s.actor, 0.5);
        assert_eq!(s.actor.vel_y, 0.5);
        assert_eq!(s.actor.pos.y, 300.5);
        integrate_actor(&mut s.actor, 0.5);
        assert_eq!(s.actor.vel_y, 1.0);
        assert_eq!(s.actor.pos.y, 301.5);
        // x is never touched
        assert_eq!(s.actor.pos.x, 100.0);
    }

    #[test]
    fn test_spawn_when_empty() {
        let mut s = state();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(maybe_spawn(&mut s, &mut rng));
        assert_eq!(s.obstacles.len(), 1);
        let ob = &s.obstacles[0];
        assert_eq!(ob.x, 400.0);
        assert!(ob.gap_top >= 50.0 && ob.gap_top < 350.0);
        assert_eq!(ob.gap_bottom - ob.gap_top, 200.0);
        assert!(!ob.scored);
    }

    #[test]
    fn test_spawn_respects_spacing() {
        let mut s = state();
        let mut rng = Pcg32::seed_from_u64(2);
        // Newest obstacle exactly at the threshold: not yet
        s.obstacles.push_back(Obstacle::new(150.0, 100.0, 200.0));
        assert!(!maybe_spawn(&mut s, &mut rng));
        // Just past the threshold: spawn
        s.obstacles.back_mut().unwrap().x = 149.0;
        assert!(maybe_spawn(&mut s, &mut rng));
        assert_eq!(s.obstacles.len(), 2);
        assert_eq!(s.obstacles.back().unwrap().x, 400.0);
    }

    #[test]
    fn test_recycle_only_offscreen_front() {
        let mut s = state();
        // Right edge exactly at 0 stays
        s.obstacles.push_back(Obstacle::new(-60.0, 100.0, 200.0));
        s.obstacles.push_back(Obstacle::new(190.0, 100.0, 200.0));
        assert_eq!(recycle_obstacles(&mut s), 0);
        assert_eq!(s.obstacles.len(), 2);

        s.obstacles[0].x = -60.5;
        assert_eq!(recycle_obstacles(&mut s), 1);
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.obstacles[0].x, 190.0);
    }

    #[test]
    fn test_recycle_catches_up_after_backlog() {
        let mut s = state();
        s.obstacles.push_back(Obstacle::new(-400.0, 100.0, 200.0));
        s.obstacles.push_back(Obstacle::new(-150.0, 100.0, 200.0));
        s.obstacles.push_back(Obstacle::new(100.0, 100.0, 200.0));
        assert_eq!(recycle_obstacles(&mut s), 2);
        assert_eq!(s.obstacles.len(), 1);
        assert_eq!(s.obstacles[0].x, 100.0);
    }

    #[test]
    fn test_advance_is_uniform() {
        let mut s = state();
        s.obstacles.push_back(Obstacle::new(10.0, 100.0, 200.0));
        s.obstacles.push_back(Obstacle::new(260.0, 100.0, 200.0));
        advance_obstacles(&mut s);
        assert_eq!(s.obstacles[0].x, 8.0);
        assert_eq!(s.obstacles[1].x, 258.0);
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let mut a = state();
        let mut b = state();
        let mut rng_a = Pcg32::seed_from_u64(42);
        let mut rng_b = Pcg32::seed_from_u64(42);
        for _ in 0..600 {
            step(&mut a, &mut rng_a);
            step(&mut b, &mut rng_b);
        }
        assert_eq!(a.obstacles, b.obstacles);
    }

    proptest! {
        #[test]
        fn prop_gap_always_on_screen(
            seed in any::<u64>(),
            gap_steps in 1u32..6400,
            margin_steps in 0u32..1600,
        ) {
            let config = GameConfig {
                gap_height: gap_steps as f32 / GAP_GRID,
                gap_margin: margin_steps as f32 / GAP_GRID,
                ..GameConfig::default()
            };
            prop_assume!(config.validate().is_ok());

            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..50 {
                let ob = spawn_obstacle(&config, &mut rng);
                prop_assert!(ob.gap_top >= config.gap_margin);
                prop_assert!(ob.gap_bottom <= config.field_height - config.gap_margin);
                prop_assert_eq!(ob.gap_bottom - ob.gap_top, config.gap_height);
            }
        }

        #[test]
        fn prop_scrolling_keeps_order_and_spacing(seed in any::<u64>(), ticks in 1usize..2000) {
            let mut s = state();
            let mut rng = Pcg32::seed_from_u64(seed);
            let width = s.config.obstacle_width;
            for _ in 0..ticks {
                advance_obstacles(&mut s);
                recycle_obstacles(&mut s);
                maybe_spawn(&mut s, &mut rng);

                prop_assert!(!s.obstacles.is_empty());
                // Front is visible after recycling
                prop_assert!(s.obstacles[0].right(width) >= 0.0);
                // Strictly left-to-right
                for pair in s.obstacles.iter().collect::<Vec<_>>().windows(2) {
                    prop_assert!(pair[0].x < pair[1].x);
                }
            }
        }
    }
}
