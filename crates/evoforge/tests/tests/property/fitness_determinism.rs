//! Property tests: chromosome fitness is the evaluator's output, never stale.

use evoforge_fitness::CompositeEvaluator;
use evoforge_genome::{
    Chromosome, ChromosomeId, ComponentType, FitnessEvaluator, GeneLibrary,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_type() -> impl Strategy<Value = ComponentType> {
    prop::sample::select(ComponentType::all().to_vec())
}

proptest! {
    /// Re-evaluating an unchanged chromosome yields the stored fitness.
    #[test]
    fn evaluation_is_pure(n in 0usize..20, seed in any::<u64>(), ty in arb_type()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genes = GeneLibrary::canonical().sample(n, &mut rng);
        let chromosome = Chromosome::new(ChromosomeId::random(&mut rng), ty, genes, 0, &CompositeEvaluator);

        let stored = chromosome.fitness();
        prop_assert!((0.0..=1.0).contains(&stored.value()));
        prop_assert_eq!(CompositeEvaluator.evaluate(&chromosome), stored);
        prop_assert_eq!(CompositeEvaluator.evaluate(&chromosome), stored);
    }

    /// Edits through `edit_genes` always leave fitness current.
    #[test]
    fn edits_rescore(n in 1usize..12, keep in 1usize..12, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genes = GeneLibrary::canonical().sample(n, &mut rng);
        let mut chromosome =
            Chromosome::new(ChromosomeId::random(&mut rng), ComponentType::Core, genes, 0, &CompositeEvaluator);

        chromosome.edit_genes(&CompositeEvaluator, |genes| genes.truncate(keep));
        prop_assert_eq!(chromosome.fitness(), CompositeEvaluator.evaluate(&chromosome));
    }

    /// Ids and ages do not influence the score.
    #[test]
    fn fresh_clone_scores_the_same(n in 0usize..12, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genes = GeneLibrary::canonical().sample(n, &mut rng);
        let mut chromosome =
            Chromosome::new(ChromosomeId::random(&mut rng), ComponentType::Guard, genes, 0, &CompositeEvaluator);
        let clone = chromosome.clone_fresh(&mut rng, 3);
        chromosome.age_genes();
        prop_assert_eq!(CompositeEvaluator.evaluate(&clone), CompositeEvaluator.evaluate(&chromosome));
    }
}
