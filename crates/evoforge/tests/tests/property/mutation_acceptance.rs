//! Property tests: hill-climbing acceptance and the one-gene floor.

use evoforge_fitness::CompositeEvaluator;
use evoforge_genome::{Chromosome, ChromosomeId, ComponentType, GeneLibrary};
use evoforge_operators::{MutationKind, MutationVerdict, Mutator};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    /// Fitness never decreases across N mutation attempts.
    #[test]
    fn accepted_mutations_never_regress(
        n in 1usize..10,
        attempts in 1usize..150,
        seed in any::<u64>(),
    ) {
        let library = GeneLibrary::canonical();
        let mutator = Mutator::new(&library, &CompositeEvaluator);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut chromosome = Chromosome::new(
            ChromosomeId::random(&mut rng),
            ComponentType::Api,
            library.sample(n, &mut rng),
            0,
            &CompositeEvaluator,
        );

        let mut previous = chromosome.fitness();
        for _ in 0..attempts {
            let outcome = mutator.attempt(&mut chromosome, &mut rng);
            if outcome.verdict == MutationVerdict::Accepted {
                prop_assert!(outcome.fitness_after >= outcome.fitness_before);
            }
            prop_assert!(chromosome.fitness() >= previous);
            previous = chromosome.fitness();
        }
    }

    /// Deletion never takes a chromosome below one gene.
    #[test]
    fn deletion_keeps_one_gene(n in 1usize..6, attempts in 1usize..40, seed in any::<u64>()) {
        let library = GeneLibrary::canonical();
        let mutator = Mutator::new(&library, &CompositeEvaluator);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut chromosome = Chromosome::new(
            ChromosomeId::random(&mut rng),
            ComponentType::Core,
            library.sample(n, &mut rng),
            0,
            &CompositeEvaluator,
        );
        for _ in 0..attempts {
            mutator.attempt_kind(&mut chromosome, MutationKind::Deletion, &mut rng);
            prop_assert!(chromosome.len() >= 1);
        }
    }
}
