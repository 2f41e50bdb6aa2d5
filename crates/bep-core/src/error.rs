//! Error handling for the playground crates

use core::fmt;

/// Result type alias for playground operations
pub type BepResult<T> = Result<T, BepError>;

/// Error type shared by the playground crates
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BepError {
    /// Content document could not be parsed
    ContentFormat {
        /// Description of the parse failure
        reason: String,
    },

    /// Invalid playback or rendering configuration
    InvalidConfig {
        /// Description of the configuration error
        reason: &'static str,
    },
}

impl fmt::Display for BepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BepError::ContentFormat { reason } => {
                write!(f, "Content format error: {}", reason)
            }
            BepError::InvalidConfig { reason } => {
                write!(f, "Invalid configuration: {}", reason)
            }
        }
    }
}

impl std::error::Error for BepError {}
