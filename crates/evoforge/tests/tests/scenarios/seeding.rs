//! Seeding a population over all four component types.

use evoforge_engine::{EvolutionController, SEED_GENES_MAX, SEED_GENES_MIN};
use evoforge_genome::{ComponentType, GeneLibrary, LifecycleStage};
use evoforge_tests::config;
use std::sync::Arc;

#[test]
fn initial_population_of_twenty() {
    let mut cfg = config(20, 2024);
    cfg.component_types = ComponentType::all().to_vec();
    let mut controller = EvolutionController::new(cfg, Arc::new(GeneLibrary::canonical())).unwrap();

    let summary = controller.create_initial_population(20).unwrap();
    assert_eq!(summary.count, 20);
    assert_eq!(summary.type_distribution.values().sum::<usize>(), 20);
    assert!(summary
        .type_distribution
        .keys()
        .all(|ty| ComponentType::all().contains(ty)));
    assert!((0.0..=1.0).contains(&summary.mean_fitness));

    assert_eq!(controller.population().count(), 20);
    for component in controller.population() {
        assert!(!component.chromosomes().is_empty());
        assert!((0.0..=1.0).contains(&component.fitness().value()));
        assert_eq!(component.stage(), LifecycleStage::Egg);
        assert!((SEED_GENES_MIN..=SEED_GENES_MAX).contains(&component.gene_count()));
    }
}

#[test]
fn seeding_restricted_types() {
    let mut cfg = config(10, 3);
    cfg.component_types = vec![ComponentType::Guard];
    let mut controller = EvolutionController::new(cfg, Arc::new(GeneLibrary::canonical())).unwrap();
    let summary = controller.create_initial_population(10).unwrap();
    assert_eq!(summary.type_distribution.get(&ComponentType::Guard), Some(&10));
}

#[test]
fn reseeding_resets_counters() {
    let mut controller = evoforge_tests::seeded_controller(8, 4);
    controller.run(2).unwrap();
    controller.create_initial_population(8).unwrap();
    let summary = controller.get_evolution_summary();
    assert_eq!(summary.generations_evolved, 0);
    assert_eq!(summary.total_crossovers, 0);
    assert!(controller.history().is_empty());
}
