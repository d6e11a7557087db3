//! Gene-pool crossover between two chromosomes.

use evoforge_genome::{Chromosome, ChromosomeId, FitnessEvaluator, Gene};
use rand::seq::index;
use rand::Rng;
use tracing::debug;

/// Upper bound on the number of genes a crossover child receives.
pub const MAX_CROSSOVER_GENES: usize = 6;

/// Breed a child chromosome from the pooled genes of `a` and `b`.
///
/// The child takes between 1 and [`MAX_CROSSOVER_GENES`] genes drawn without
/// replacement from the pool, each copied under a fresh id. Its type tag comes
/// from a parent chosen uniformly. Returns `None` when both parents are empty.
pub fn crossover<R: Rng + ?Sized>(
    a: &Chromosome,
    b: &Chromosome,
    generation: u64,
    evaluator: &dyn FitnessEvaluator,
    rng: &mut R,
) -> Option<Chromosome> {
    let pool: Vec<&Gene> = a.genes().iter().chain(b.genes()).collect();
    if pool.is_empty() {
        return None;
    }

    let take = rng.gen_range(1..=pool.len().min(MAX_CROSSOVER_GENES));
    let genes: Vec<Gene> = index::sample(rng, pool.len(), take)
        .into_iter()
        .map(|i| pool[i].duplicate(rng))
        .collect();
    let component_type = if rng.gen_bool(0.5) {
        a.component_type()
    } else {
        b.component_type()
    };

    let child = Chromosome::new(ChromosomeId::random(rng), component_type, genes, generation, evaluator)
        .with_parents(vec![a.id().clone(), b.id().clone()]);
    debug!(
        child = %child.id(),
        left = %a.id(),
        right = %b.id(),
        genes = child.len(),
        fitness = child.fitness().value(),
        "crossover"
    );
    Some(child)
}
