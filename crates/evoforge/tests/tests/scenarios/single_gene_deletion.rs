//! Repeated deletion on a one-gene chromosome.

use evoforge_fitness::CompositeEvaluator;
use evoforge_genome::{Chromosome, ChromosomeId, ComponentType, Gene, GeneId, GeneKind, GeneLibrary};
use evoforge_operators::{MutationKind, MutationVerdict, Mutator};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn single_gene_survives_repeated_deletion() {
    let library = GeneLibrary::canonical();
    let mutator = Mutator::new(&library, &CompositeEvaluator);
    let mut rng = StdRng::seed_from_u64(13);

    let gene = Gene::new(GeneId::from("last-gene"), GeneKind::Class, "pub struct Last;")
        .with_expression(0.6);
    let mut chromosome = Chromosome::new(
        ChromosomeId::from("lonely"),
        ComponentType::Core,
        vec![gene],
        0,
        &CompositeEvaluator,
    );
    let before = chromosome.clone();

    for _ in 0..100 {
        let outcome = mutator.attempt_kind(&mut chromosome, MutationKind::Deletion, &mut rng);
        assert_eq!(outcome.verdict, MutationVerdict::Skipped);
        assert_eq!(chromosome.len(), 1);
        assert_eq!(chromosome.genes()[0].id.as_str(), "last-gene");
    }
    assert_eq!(chromosome, before);
}
