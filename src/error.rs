//! Error types
//!
//! Nothing here ever reaches the tick loop: lifecycle errors are returned to
//! the input adapter, config errors to whoever constructs the game.

use std::fmt;

use crate::sim::GamePhase;

/// Rejected lifecycle action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Start requested without a (non-blank) session name
    EmptySessionName,
    /// Action is not accepted in the current phase
    InvalidPhase {
        phase: GamePhase,
        action: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::EmptySessionName => write!(f, "session name must not be empty"),
            GameError::InvalidPhase { phase, action } => {
                write!(f, "cannot {} while in {:?}", action, phase)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Invalid construction-time configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config JSON could not be parsed
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "malformed config: {}", err),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GameError::EmptySessionName.to_string(),
            "session name must not be empty"
        );
        let err = GameError::InvalidPhase {
            phase: GamePhase::Playing,
            action: "restart",
        };
        assert_eq!(err.to_string(), "cannot restart while in Playing");

        let err = ConfigError::invalid("gap_height", "must be positive");
        assert_eq!(
            err.to_string(),
            "invalid config field `gap_height`: must be positive"
        );
    }

    #[test]
    fn test_parse_error_has_source() {
        use std::error::Error;

        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ConfigError::from(json_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("malformed config"));
    }
}
