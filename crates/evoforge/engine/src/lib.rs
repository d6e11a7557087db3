#![deny(unsafe_code)]
//! # evoforge-engine
//!
//! The [`EvolutionController`] owns a population and runs it through
//! discrete generations:
//!
//! 1. tournament parent selection
//! 2. sexual or asexual reproduction, with hill-climbing mutation of offspring
//! 3. probabilistic [`EnvironmentalPressure`] boosts
//! 4. elitist roulette survivor selection back to the target size
//! 5. one lifecycle step for every survivor
//!
//! Each call returns a [`GenerationRecord`]. Runs are reproducible under a
//! fixed [`EvolutionConfig::seed`].

pub mod config;
pub mod controller;
pub mod error;
pub mod pressure;
pub mod record;

pub use config::EvolutionConfig;
pub use controller::{EvolutionController, SEED_GENES_MAX, SEED_GENES_MIN};
pub use error::{EvolutionError, EvolutionResult};
pub use pressure::{EnvironmentalPressure, PressureKind, DEFAULT_PRESSURE_PROBABILITY};
pub use record::{
    EvolutionSummary, FitnessStats, GenerationRecord, Lineage, PopulationSnapshot,
    PopulationSummary,
};
pub use evoforge_selection::ReproductionMode;
