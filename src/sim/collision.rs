//! Collision detection and scoring
//!
//! Everything is axis-aligned: the actor is a box, each obstacle is a column
//! that is solid everywhere except its gap.

use glam::Vec2;

use super::state::{Actor, GameState, Obstacle};

/// What the actor ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Touched the floor or left through the ceiling
    Bounds,
    /// Hit the solid part of the obstacle at this index
    Obstacle { index: usize },
}

/// Axis-aligned rectangle given by its min/max corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Open-interval overlap on the horizontal axis
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.min.x < right && self.max.x > left
    }
}

impl From<&Actor> for Rect {
    fn from(actor: &Actor) -> Self {
        Rect::from_pos_size(actor.pos, actor.size)
    }
}

/// Check if the actor left the field vertically
pub fn actor_out_of_bounds(actor: &Actor, field_height: f32) -> bool {
    actor.bottom() > field_height || actor.top() < 0.0
}

/// Check if the actor is inside an obstacle's column but outside its gap
pub fn actor_obstacle_collision(actor: &Actor, obstacle: &Obstacle, width: f32) -> bool {
    let bounds = Rect::from(actor);
    bounds.overlaps_x(obstacle.x, obstacle.right(width))
        && (bounds.min.y < obstacle.gap_top || bounds.max.y > obstacle.gap_bottom)
}

/// Find the first collision, bounds before obstacles
pub fn detect_collision(state: &GameState) -> Option<CollisionKind> {
    let actor = &state.actor;
    if actor_out_of_bounds(actor, state.config.field_height) {
        return Some(CollisionKind::Bounds);
    }

    let width = state.config.obstacle_width;
    state
        .obstacles
        .iter()
        .position(|ob| actor_obstacle_collision(actor, ob, width))
        .map(|index| CollisionKind::Obstacle { index })
}

/// Score every obstacle whose trailing edge is now behind the actor
///
/// Each obstacle scores at most once; returns the points awarded.
pub fn award_passed(state: &mut GameState) -> u32 {
    let actor_x = state.actor.left();
    let width = state.config.obstacle_width;
    let mut awarded = 0;
    for obstacle in state.obstacles.iter_mut() {
        if !obstacle.scored && actor_x > obstacle.right(width) {
            obstacle.scored = true;
            awarded += 1;
        }
    }
    state.score += awarded;
    awarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn state_with(obstacles: &[Obstacle]) -> GameState {
        let mut state = GameState::new(GameConfig::default());
        state.obstacles.extend(obstacles.iter().cloned());
        state
    }

    #[test]
    fn test_bounds_collision() {
        let mut state = state_with(&[]);
        assert_eq!(detect_collision(&state), None);

        // Bottom edge exactly on the floor is still fine
        state.actor.pos.y = 570.0;
        assert_eq!(detect_collision(&state), None);
        state.actor.pos.y = 570.5;
        assert_eq!(detect_collision(&state), Some(CollisionKind::Bounds));

        state.actor.pos.y = 0.0;
        assert_eq!(detect_collision(&state), None);
        state.actor.pos.y = -0.1;
        assert_eq!(detect_collision(&state), Some(CollisionKind::Bounds));
    }

    #[test]
    fn test_bounds_beats_obstacles() {
        // Obstacle overlapping the actor's column, gap far away
        let mut state = state_with(&[Obstacle::new(90.0, 400.0, 150.0)]);
        state.actor.pos.y = -5.0;
        assert_eq!(detect_collision(&state), Some(CollisionKind::Bounds));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        // Actor spans y 300..330, gap 250..450
        let state = state_with(&[Obstacle::new(90.0, 250.0, 200.0)]);
        assert_eq!(detect_collision(&state), None);
    }

    #[test]
    fn test_hits_upper_and_lower_column() {
        // Actor top (300) above gap top (310)
        let state = state_with(&[Obstacle::new(90.0, 310.0, 200.0)]);
        assert_eq!(
            detect_collision(&state),
            Some(CollisionKind::Obstacle { index: 0 })
        );

        // Actor bottom (330) below gap bottom (320)
        let state = state_with(&[
            Obstacle::new(300.0, 100.0, 200.0),
            Obstacle::new(90.0, 120.0, 200.0),
        ]);
        assert_eq!(
            detect_collision(&state),
            Some(CollisionKind::Obstacle { index: 1 })
        );
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Actor spans x 100..130. Obstacle ending exactly at 100, and one starting at 130
        let state = state_with(&[
            Obstacle::new(40.0, 0.0, 10.0),
            Obstacle::new(130.0, 0.0, 10.0),
        ]);
        assert_eq!(detect_collision(&state), None);
    }

    #[test]
    fn test_award_passed_once() {
        let mut state = state_with(&[
            Obstacle::new(30.0, 100.0, 200.0),
            Obstacle::new(40.0, 100.0, 200.0),
            Obstacle::new(250.0, 100.0, 200.0),
        ]);
        // 30 + 60 = 90 < 100 scores; 40 + 60 = 100 is not yet behind
        assert_eq!(award_passed(&mut state), 1);
        assert_eq!(state.score, 1);
        assert!(state.obstacles[0].scored);
        assert!(!state.obstacles[1].scored);

        // Re-running does not double count
        assert_eq!(award_passed(&mut state), 0);
        assert_eq!(state.score, 1);

        state.obstacles[1].x = 39.0;
        assert_eq!(award_passed(&mut state), 1);
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_rect_overlap() {
        let rect = Rect::from_pos_size(Vec2::new(10.0, 0.0), Vec2::new(5.0, 5.0));
        assert!(rect.overlaps_x(14.0, 20.0));
        assert!(!rect.overlaps_x(15.0, 20.0));
        assert!(!rect.overlaps_x(0.0, 10.0));
    }
}
