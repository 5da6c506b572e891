//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - The fixed-rate clock driving ticks
//! - Input events (key codes to game actions)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Periodic timer that calls back into the game while running
///
/// Implementations must treat `stop` as idempotent.
pub trait Clock {
    /// Begin firing every `period_ms` milliseconds
    fn start(&mut self, period_ms: f64);
    /// Stop firing; no-op if already stopped
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Clock advanced by hand: headless runs and tests
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    period_ms: Option<f64>,
    /// Number of times the clock actually started
    pub starts: u32,
    /// Number of times a running clock was actually stopped
    pub stops: u32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Period of the current run, if running
    pub fn period_ms(&self) -> Option<f64> {
        self.period_ms
    }
}

impl Clock for ManualClock {
    fn start(&mut self, period_ms: f64) {
        if self.period_ms.is_none() {
            self.starts += 1;
        }
        self.period_ms = Some(period_ms);
    }

    fn stop(&mut self) {
        if self.period_ms.take().is_some() {
            self.stops += 1;
        }
    }

    fn is_running(&self) -> bool {
        self.period_ms.is_some()
    }
}

/// Game actions produced by the input adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Jump,
    Start { name: String },
    Restart,
}

impl InputAction {
    /// Map a `KeyboardEvent.code` to an action
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "Space" => Some(InputAction::Jump),
            _ => None,
        }
    }
}
