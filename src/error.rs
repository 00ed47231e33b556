//! Errors raised while loading configuration and world data.
//!
//! Gameplay never produces these: a wrong direction or a missing item is an
//! ordinary [`Outcome`](crate::Outcome). Anything here means the game could
//! not start.

use std::path::PathBuf;

use thiserror::Error;

use crate::world::ValidationError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data file '{}': {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file '{}': {message}", .path.display())]
    ConfigValue { path: PathBuf, message: String },

    #[error("world data is inconsistent:\n{}", list_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn list_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, GameError>;
