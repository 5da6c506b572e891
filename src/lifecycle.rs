//! Lifecycle controller
//!
//! Owns the game state, the RNG and the clock, and moves between
//! Menu -> Playing -> GameOver -> Playing. Input handlers and the clock
//! callback only ever touch the state through these entry points.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::error::{ConfigError, GameError};
use crate::platform::{Clock, InputAction};
use crate::sim::{GamePhase, GameState, TickOutcome, tick};

/// Final result shown on the game-over screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverSummary {
    pub session_name: String,
    pub score: u32,
}

impl GameOverSummary {
    pub fn message(&self) -> String {
        format!("Game over, {}!", self.session_name)
    }
}

/// What a clock callback did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickReport {
    /// Not playing; nothing changed
    Idle,
    /// One tick applied; state is ready to render
    Advanced { scored: u32 },
    /// The run just ended; clock already stopped
    GameOver(GameOverSummary),
}

/// The game: state machine plus the clock that drives it
pub struct Game<C: Clock> {
    state: GameState,
    rng: Pcg32,
    clock: C,
}

impl<C: Clock> Game<C> {
    /// Create a game sitting in the menu; the config is checked here so a
    /// bad value never reaches the tick loop
    pub fn new(config: GameConfig, seed: u64, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
            rng: Pcg32::seed_from_u64(seed),
            clock,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Final result, available from game over until the next start
    pub fn summary(&self) -> Option<GameOverSummary> {
        (self.state.phase == GamePhase::GameOver).then(|| GameOverSummary {
            session_name: self.state.session_name.clone(),
            score: self.state.score,
        })
    }

    /// Menu -> Playing with the given session name
    pub fn on_start(&mut self, name: &str) -> Result<(), GameError> {
        if self.state.phase != GamePhase::Menu {
            return Err(self.reject("start"));
        }
        let name = name.trim();
        if name.is_empty() {
            log::warn!("Start rejected: empty session name");
            return Err(GameError::EmptySessionName);
        }
        self.state.session_name = name.to_string();
        self.begin_run();
        Ok(())
    }

    /// GameOver -> Playing, keeping the session name
    pub fn on_restart(&mut self) -> Result<(), GameError> {
        if self.state.phase != GamePhase::GameOver {
            return Err(self.reject("restart"));
        }
        self.begin_run();
        Ok(())
    }

    /// Jump; ignored unless playing
    pub fn on_jump(&mut self) {
        if self.state.phase == GamePhase::Playing {
            let impulse = self.state.config.jump_impulse;
            self.state.actor.jump(impulse);
        }
    }

    /// Dispatch an input-adapter action
    pub fn apply(&mut self, action: InputAction) -> Result<(), GameError> {
        match action {
            InputAction::Jump => {
                self.on_jump();
                Ok(())
            }
            InputAction::Start { name } => self.on_start(&name),
            InputAction::Restart => self.on_restart(),
        }
    }

    /// Clock callback: run one tick while playing
    pub fn on_clock(&mut self) -> TickReport {
        if self.state.phase != GamePhase::Playing {
            return TickReport::Idle;
        }

        match tick(&mut self.state, &mut self.rng) {
            TickOutcome::Continue { scored } => {
                if scored > 0 {
                    log::debug!("Score: {}", self.state.score);
                }
                TickReport::Advanced { scored }
            }
            TickOutcome::Collided(kind) => {
                self.state.phase = GamePhase::GameOver;
                self.clock.stop();
                log::info!(
                    "Game over for {} after {} ticks ({:?}), score {}",
                    self.state.session_name,
                    self.state.time_ticks,
                    kind,
                    self.state.score
                );
                TickReport::GameOver(GameOverSummary {
                    session_name: self.state.session_name.clone(),
                    score: self.state.score,
                })
            }
        }
    }

    fn begin_run(&mut self) {
        self.state.reset_run();
        self.state.phase = GamePhase::Playing;
        self.clock.start(self.state.config.tick_period_ms());
        log::info!("Run started for {}", self.state.session_name);
    }

    fn reject(&self, action: &'static str) -> GameError {
        log::warn!("Ignoring {} while in {:?}", action, self.state.phase);
        GameError::InvalidPhase {
            phase: self.state.phase,
            action,
        }
    }
}
