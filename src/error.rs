use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("semantic scorer unavailable: {0}")]
    SemanticUnavailable(String),

    #[error("semantic scorer timed out after {}ms", .0.as_millis())]
    SemanticTimeout(Duration),

    #[error("rubric weights must sum to 100, got {sum}")]
    InvalidWeights { sum: u32 },

    #[error("invalid settings: {0}")]
    Settings(String),
}

impl ScoringError {
    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        Self::SemanticUnavailable(err.to_string())
    }

    /// Stable identifier for the error kind, used at the transport boundary.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SemanticUnavailable(_) => "semantic_unavailable",
            Self::SemanticTimeout(_) => "semantic_timeout",
            Self::InvalidWeights { .. } => "invalid_weights",
            Self::Settings(_) => "invalid_settings",
        }
    }

    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::SemanticUnavailable(_) | Self::SemanticTimeout(_))
    }
}

pub type Result<T> = std::result::Result<T, ScoringError>;
