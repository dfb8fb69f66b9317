pub mod error;
pub mod scoring;
pub mod server;
pub mod settings;
pub mod utils;

pub use error::{Result, ScoringError};
pub use scoring::{score_transcript, EngineOptions, ScoreReport};
