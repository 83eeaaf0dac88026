//! Error types for the Tally scoreboard.

use thiserror::Error;

/// The error type shared by every Tally crate.
///
/// Controller operations either succeed with a state change or fail with one
/// of these variants and leave the scoreboard untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// Player count input was not a number in `1..=MAX_PLAYERS`.
    #[error("Invalid player count '{input}': enter a number from 1 to 7")]
    InvalidPlayerCount { input: String },

    /// A per-player operation referenced a player that is not on the board.
    #[error("Player index {index} out of range (players: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation is not accepted in the current mode.
    #[error("Cannot {operation} while in {mode}")]
    InvalidTransition {
        operation: &'static str,
        mode: String,
    },

    /// Custom score input was not an integer.
    #[error("Invalid score '{input}': enter a whole number")]
    InvalidScore { input: String },

    /// No preset button exists for this number of trains.
    #[error("No preset for {trains} train(s)")]
    UnknownPreset { trains: u8 },

    /// Blank player names are rejected by the validation policy.
    #[error("Player name cannot be blank")]
    BlankName,

    /// Negative custom scores are rejected by the validation policy.
    #[error("Negative score {value} not allowed")]
    NegativeScore { value: i64 },

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TallyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidPlayerCount error
    pub fn invalid_player_count(input: impl Into<String>) -> Self {
        Self::InvalidPlayerCount {
            input: input.into(),
        }
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(operation: &'static str, mode: impl ToString) -> Self {
        Self::InvalidTransition {
            operation,
            mode: mode.to_string(),
        }
    }

    /// Creates an InvalidScore error
    pub fn invalid_score(input: impl Into<String>) -> Self {
        Self::InvalidScore {
            input: input.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidPlayerCount error
    pub fn is_invalid_player_count(&self) -> bool {
        matches!(self, Self::InvalidPlayerCount { .. })
    }

    /// Check if this is an IndexOutOfRange error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is an InvalidTransition error
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }

    /// Check if this error came from user input the caller can simply retry.
    ///
    /// Returns false for contract violations (bad index, wrong mode) and for
    /// config file problems.
    pub fn is_retryable_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidPlayerCount { .. }
                | Self::InvalidScore { .. }
                | Self::UnknownPreset { .. }
                | Self::BlankName
                | Self::NegativeScore { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for TallyError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TallyError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TallyError>`.
pub type Result<T> = std::result::Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_retryable() {
        assert!(TallyError::invalid_player_count("9").is_retryable_input());
        assert!(TallyError::invalid_score("abc").is_retryable_input());
        assert!(TallyError::UnknownPreset { trains: 5 }.is_retryable_input());
        assert!(!TallyError::IndexOutOfRange { index: 3, len: 2 }.is_retryable_input());
        assert!(!TallyError::invalid_transition("add score", "main menu").is_retryable_input());
    }

    #[test]
    fn test_io_error_conversion_keeps_kind() {
        let err: TallyError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        match err {
            TallyError::Io { message } => assert!(message.contains("PermissionDenied")),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        let err = TallyError::IndexOutOfRange { index: 4, len: 3 };
        assert_eq!(err.to_string(), "Player index 4 out of range (players: 3)");

        let err = TallyError::invalid_transition("confirm player count", "main menu");
        assert_eq!(err.to_string(), "Cannot confirm player count while in main menu");
    }
}
