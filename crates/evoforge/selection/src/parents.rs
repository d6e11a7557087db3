//! Parent selection: tiered eligibility followed by tournaments.

use crate::by_fitness_desc;
use evoforge_genome::Component;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Contestants per tournament, fewer when the eligible pool is smaller.
pub const TOURNAMENT_SIZE: usize = 3;
/// Mature components above this fitness are eligible.
pub const PRIMARY_FITNESS_FLOOR: f64 = 0.6;
/// Widened floor, at any lifecycle stage, when the primary tier is too small.
pub const FALLBACK_FITNESS_FLOOR: f64 = 0.3;

/// Which eligibility rule produced the candidate pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityTier {
    /// Adult or Breeding, fitness above 0.6.
    Primary,
    /// Any stage, fitness above 0.3.
    Fallback,
}

/// Outcome of parent selection.
#[derive(Debug)]
pub struct ParentSelection<'a> {
    /// Tournament winners; the same component may win more than once.
    pub parents: Vec<&'a Component>,
    pub eligible: usize,
    pub tier: EligibilityTier,
}

fn primary(c: &Component) -> bool {
    c.stage().can_reproduce() && c.fitness().value() > PRIMARY_FITNESS_FLOOR
}

fn fallback(c: &Component) -> bool {
    c.fitness().value() > FALLBACK_FITNESS_FLOOR
}

/// Pick parents from `population`.
///
/// With two or more eligible components, runs `max(2, eligible / 2)`
/// tournaments. With exactly one, that component is the only parent. With
/// none, `parents` is empty.
pub fn select_parents<'a, R, I>(population: I, rng: &mut R) -> ParentSelection<'a>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Component>,
{
    let all: Vec<&'a Component> = population.into_iter().collect();

    let mut tier = EligibilityTier::Primary;
    let mut eligible: Vec<&'a Component> = all.iter().copied().filter(|c| primary(c)).collect();
    if eligible.len() < 2 {
        tier = EligibilityTier::Fallback;
        eligible = all.iter().copied().filter(|c| fallback(c)).collect();
    }

    let parents = match eligible.len() {
        0 => Vec::new(),
        1 => vec![eligible[0]],
        n => (0..(n / 2).max(2)).map(|_| tournament(&eligible, rng)).collect(),
    };

    debug!(
        eligible = eligible.len(),
        ?tier,
        parents = parents.len(),
        "parents selected"
    );

    ParentSelection {
        parents,
        eligible: eligible.len(),
        tier,
    }
}

/// Draw up to [`TOURNAMENT_SIZE`] distinct contestants and return the fittest.
///
/// `candidates` must not be empty.
fn tournament<'a, R: Rng + ?Sized>(candidates: &[&'a Component], rng: &mut R) -> &'a Component {
    let size = TOURNAMENT_SIZE.min(candidates.len());
    index::sample(rng, candidates.len(), size)
        .into_iter()
        .map(|i| candidates[i])
        .min_by(|a, b| by_fitness_desc(a, b))
        .unwrap_or(candidates[0])
}
