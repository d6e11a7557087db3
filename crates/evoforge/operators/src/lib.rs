#![deny(unsafe_code)]
//! # evoforge-operators
//!
//! Genetic operators. [`Mutator`] applies one of five [`MutationKind`]s
//! speculatively and keeps the result only when chromosome fitness does not
//! drop. [`crossover`] breeds a child chromosome from two parents' gene pool
//! with no acceptance filter.

pub mod crossover;
pub mod mutation;

pub use crossover::{crossover, MAX_CROSSOVER_GENES};
pub use mutation::{MutationKind, MutationOutcome, MutationVerdict, Mutator};
