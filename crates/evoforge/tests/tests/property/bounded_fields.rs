//! Property tests: every bounded genome quantity stays within [0, 1].

use evoforge_fitness::CompositeEvaluator;
use evoforge_genome::{Chromosome, ChromosomeId, ComponentType, Gene, GeneId, GeneKind, GeneLibrary};
use evoforge_operators::{MutationKind, Mutator};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn in_unit(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}

fn assert_gene_bounded(gene: &Gene) {
    assert!(in_unit(gene.expression.value()), "expression {}", gene.expression);
    assert!(in_unit(gene.coherence.value()), "coherence {}", gene.coherence);
    assert!(
        in_unit(gene.fitness_contribution.value()),
        "contribution {}",
        gene.fitness_contribution
    );
    assert!(gene.mutation_affinity >= 0.0);
}

fn arb_kind() -> impl Strategy<Value = MutationKind> {
    prop::sample::select(MutationKind::all().to_vec())
}

proptest! {
    /// Builders clamp any input, including NaN and infinities.
    #[test]
    fn gene_builders_clamp(
        expression in prop::num::f64::ANY,
        coherence in prop::num::f64::ANY,
        contribution in prop::num::f64::ANY,
        affinity in prop::num::f64::ANY,
    ) {
        let gene = Gene::new(GeneId::from("g"), GeneKind::Parameter, "const X: u8 = 1;")
            .with_expression(expression)
            .with_coherence(coherence)
            .with_fitness_contribution(contribution)
            .with_mutation_affinity(affinity);
        assert_gene_bounded(&gene);
    }

    /// Sampling jitter never pushes expression out of range.
    #[test]
    fn library_samples_are_bounded(n in 0usize..40, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genes = GeneLibrary::canonical().sample(n, &mut rng);
        prop_assert_eq!(genes.len(), n);
        for gene in &genes {
            assert_gene_bounded(gene);
        }
    }

    /// Arbitrary operator sequences, applied raw without the acceptance
    /// filter, keep every gene bounded.
    #[test]
    fn operators_keep_genes_bounded(
        seed in any::<u64>(),
        kinds in prop::collection::vec(arb_kind(), 1..60),
    ) {
        let library = GeneLibrary::canonical();
        let mutator = Mutator::new(&library, &CompositeEvaluator);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut genes = library.sample(4, &mut rng);
        for kind in kinds {
            mutator.apply(kind, &mut genes, &mut rng);
            prop_assert!(!genes.is_empty());
            for gene in &genes {
                assert_gene_bounded(gene);
            }
        }
        let chromosome = Chromosome::new(
            ChromosomeId::random(&mut rng),
            ComponentType::Transform,
            genes,
            0,
            &CompositeEvaluator,
        );
        prop_assert!(in_unit(chromosome.fitness().value()));
    }
}
