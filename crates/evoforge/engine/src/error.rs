//! Error types for the evolution engine.

use thiserror::Error;

/// Errors surfaced by [`crate::EvolutionController`].
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// No component with the given id is alive.
    #[error("component not found: {0}")]
    NotFound(String),

    /// Configuration rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `evolve_generation` called before a population exists.
    #[error("population has not been seeded")]
    PopulationNotSeeded,

    /// The stop handle was set before any generation ran.
    #[error("evolution cancelled")]
    Cancelled,
}

/// Result type for evolution operations.
pub type EvolutionResult<T> = Result<T, EvolutionError>;
