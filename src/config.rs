//! Game configuration
//!
//! Fixed for the lifetime of a `Game`. Defaults come from `crate::consts`;
//! the web shell may override them once at construction time.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Construction-time parameters of the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Actor ===
    /// Fixed horizontal position of the actor's left edge
    pub actor_x: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,

    // === Obstacles ===
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub gap_margin: f32,
    pub spawn_spacing: f32,

    // === Clock ===
    pub tick_rate_hz: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            actor_x: ACTOR_X,
            actor_width: ACTOR_SIZE,
            actor_height: ACTOR_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            spawn_spacing: SPAWN_SPACING,

            tick_rate_hz: TICK_RATE_HZ,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config on a field of a different size
    pub fn with_field_size(mut self, width: f32, height: f32) -> Self {
        self.field_width = width;
        self.field_height = height;
        self
    }

    /// Check that the simulation can run with these values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("gravity", self.gravity),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("spawn_spacing", self.spawn_spacing),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be positive, got {}", value),
                ));
            }
        }

        let sides = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
        ];
        for (field, value) in sides {
            if value > MAX_FIELD_SIZE {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be at most {}, got {}", MAX_FIELD_SIZE, value),
                ));
            }
        }

        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return Err(ConfigError::invalid(
                "jump_impulse",
                format!("must be negative (upward), got {}", self.jump_impulse),
            ));
        }
        if !(self.gap_margin.is_finite() && self.gap_margin >= 0.0) {
            return Err(ConfigError::invalid(
                "gap_margin",
                format!("must not be negative, got {}", self.gap_margin),
            ));
        }
        // Keeps gap_bottom - gap_top == gap_height exact after snapping
        let gridded = [
            ("gap_height", self.gap_height),
            ("gap_margin", self.gap_margin),
        ];
        for (field, value) in gridded {
            if (value * GAP_GRID).fract() != 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a multiple of 1/{} px, got {}", GAP_GRID, value),
                ));
            }
        }
        // Spawn band [margin, height - gap - margin) must be non-empty
        if self.gap_height + 2.0 * self.gap_margin >= self.field_height {
            return Err(ConfigError::invalid(
                "gap_height",
                format!(
                    "gap {} plus margins {} does not fit a field of height {}",
                    self.gap_height,
                    2.0 * self.gap_margin,
                    self.field_height
                ),
            ));
        }
        if self.actor_height >= self.field_height {
            return Err(ConfigError::invalid(
                "actor_height",
                "actor does not fit in the field",
            ));
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::invalid("tick_rate_hz", "must be at least 1"));
        }
        Ok(())
    }

    /// Clock period in milliseconds
    pub fn tick_period_ms(&self) -> f64 {
        1000.0 / self.tick_rate_hz as f64
    }

    /// Vertical start position of the actor (centre of the field)
    pub fn actor_start_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// Range of valid gap-top values for a fresh obstacle
    pub fn gap_top_range(&self) -> std::ops::Range<f32> {
        self.gap_margin..self.field_height - self.gap_height - self.gap_margin
    }
}
