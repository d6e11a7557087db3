//! Offspring production from selected parents.

use evoforge_genome::{Chromosome, Component, ComponentId, FitnessEvaluator};
use evoforge_operators::crossover;
use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Upper bound on crossovers, and thus chromosomes, per sexual offspring.
pub const MAX_CROSSOVERS_PER_CHILD: usize = 3;

/// How a generation's offspring were produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReproductionMode {
    Sexual,
    Asexual,
    /// No eligible parents; no offspring this generation.
    None,
}

impl std::fmt::Display for ReproductionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sexual => write!(f, "sexual"),
            Self::Asexual => write!(f, "asexual"),
            Self::None => write!(f, "none"),
        }
    }
}

#[derive(Debug)]
pub struct Reproduction {
    pub mode: ReproductionMode,
    pub offspring: Vec<Component>,
    pub crossovers: usize,
}

/// Produce `max(2, parents.len())` offspring.
///
/// Two or more parent slots reproduce sexually; a single parent is cloned.
/// Offspring start at `Egg` in `generation` and never alias parent material.
pub fn reproduce<R: Rng + ?Sized>(
    parents: &[&Component],
    generation: u64,
    evaluator: &dyn FitnessEvaluator,
    rng: &mut R,
) -> Reproduction {
    let count = parents.len().max(2);
    match parents.len() {
        0 => {
            warn!(generation, "no eligible parents; skipping reproduction");
            Reproduction {
                mode: ReproductionMode::None,
                offspring: Vec::new(),
                crossovers: 0,
            }
        }
        1 => {
            let offspring = (0..count)
                .map(|_| parents[0].clone_fresh(rng, generation))
                .collect();
            Reproduction {
                mode: ReproductionMode::Asexual,
                offspring,
                crossovers: 0,
            }
        }
        n => {
            let mut offspring = Vec::with_capacity(count);
            let mut crossovers = 0;
            for _ in 0..count {
                let pair = index::sample(rng, n, 2);
                let (a, b) = (parents[pair.index(0)], parents[pair.index(1)]);
                if let Some((child, done)) = mate(a, b, generation, evaluator, rng) {
                    crossovers += done;
                    offspring.push(child);
                }
            }
            Reproduction {
                mode: ReproductionMode::Sexual,
                offspring,
                crossovers,
            }
        }
    }
}

/// Breed one child from two parents' pooled chromosomes.
fn mate<R: Rng + ?Sized>(
    a: &Component,
    b: &Component,
    generation: u64,
    evaluator: &dyn FitnessEvaluator,
    rng: &mut R,
) -> Option<(Component, usize)> {
    let pool: Vec<&Chromosome> = a.chromosomes().iter().chain(b.chromosomes()).collect();
    let rounds = rng.gen_range(1..=MAX_CROSSOVERS_PER_CHILD);

    let mut chromosomes = Vec::with_capacity(rounds);
    for _ in 0..rounds {
        let (left, right) = if pool.len() >= 2 {
            let pick = index::sample(rng, pool.len(), 2);
            (pool[pick.index(0)], pool[pick.index(1)])
        } else {
            (pool[0], pool[0])
        };
        if let Some(child) = crossover(left, right, generation, evaluator, rng) {
            chromosomes.push(child);
        }
    }

    let mut chromosomes = chromosomes.into_iter();
    let Some(primary) = chromosomes.next() else {
        debug!(left = %a.id(), right = %b.id(), "crossover pool had no genes");
        return None;
    };
    let done = chromosomes.len() + 1;

    let mut parent_ids: Vec<ComponentId> = vec![a.id().clone()];
    if b.id() != a.id() {
        parent_ids.push(b.id().clone());
    }

    let id = ComponentId::random(rng);
    let name = format!("{}-{}", primary.component_type(), id.short());
    let child = chromosomes
        .fold(Component::new(id, name, primary, generation), Component::with_chromosome)
        .with_parents(parent_ids);
    Some((child, done))
}
