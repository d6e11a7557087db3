#![deny(unsafe_code)]
//! # evoforge-selection
//!
//! Who breeds and who survives.
//!
//! - [`select_parents`]: tiered eligibility, then size-3 tournaments
//! - [`reproduce`]: sexual crossover between parents, or asexual cloning
//!   when only one parent is available
//! - [`select_survivors`]: elitism followed by roulette-wheel sampling
//!   without replacement, padded or trimmed to the target size

pub mod parents;
pub mod reproduction;
pub mod survivors;

#[cfg(test)]
mod test_support;

pub use parents::{select_parents, EligibilityTier, ParentSelection, TOURNAMENT_SIZE};
pub use reproduction::{reproduce, Reproduction, ReproductionMode, MAX_CROSSOVERS_PER_CHILD};
pub use survivors::{elite_count, select_survivors, SurvivorSelection};

use evoforge_genome::Component;
use std::cmp::Ordering;

/// Descending aggregate fitness.
pub(crate) fn by_fitness_desc(a: &Component, b: &Component) -> Ordering {
    b.fitness().value().total_cmp(&a.fitness().value())
}
