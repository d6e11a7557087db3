//! CLI error types

use evoforge_engine::EvolutionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config render error: {0}")]
    TomlRender(#[from] toml::ser::Error),

    #[error(transparent)]
    Evolution(#[from] EvolutionError),

    #[error("evolution task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type CliResult<T> = Result<T, CliError>;
