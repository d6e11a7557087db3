#![deny(unsafe_code)]
//! # evoforge-genome
//!
//! Genetic material for the evoforge synthesis engine.
//!
//! Leaves first:
//! - [`UnitInterval`]: every bounded quantity, clamped to `[0, 1]`
//! - [`Gene`]: an atomic code fragment with expression, contribution and coherence
//! - [`Chromosome`]: an ordered gene list for one [`ComponentType`], with a
//!   fitness that is never stale
//! - [`Component`]: one or more chromosomes plus a [`LifecycleStage`] and lineage
//! - [`GeneLibrary`]: the read-only template catalog new genes are copied from

pub mod chromosome;
pub mod component;
pub mod gene;
pub mod ids;
pub mod library;
pub mod lifecycle;
pub mod phenotype;
pub mod unit;

pub use chromosome::{Chromosome, FitnessEvaluator};
pub use component::Component;
pub use gene::{Gene, GeneKind, ACTIVATION_THRESHOLD};
pub use ids::{ChromosomeId, ComponentId, GeneId};
pub use library::GeneLibrary;
pub use lifecycle::LifecycleStage;
pub use phenotype::ComponentType;
pub use unit::UnitInterval;
