//! Shared fixtures for evoforge integration and property tests.

use evoforge_engine::{EvolutionConfig, EvolutionController};
use evoforge_genome::{
    Chromosome, ChromosomeId, Component, ComponentId, ComponentType, FitnessEvaluator, Gene,
    GeneId, GeneKind, GeneLibrary, LifecycleStage, UnitInterval,
};
use std::sync::Arc;

/// Config for a seeded run with the reference rates.
pub fn config(population_size: usize, seed: u64) -> EvolutionConfig {
    EvolutionConfig {
        population_size,
        mutation_rate: 0.05,
        crossover_rate: 0.7,
        elitism_rate: 0.1,
        seed: Some(seed),
        ..Default::default()
    }
}

/// A controller over the canonical library with `population_size` components seeded.
pub fn seeded_controller(population_size: usize, seed: u64) -> EvolutionController {
    let mut controller =
        EvolutionController::new(config(population_size, seed), Arc::new(GeneLibrary::canonical()))
            .expect("valid config");
    controller
        .create_initial_population(population_size)
        .expect("seeding succeeds");
    controller
}

/// Scores a chromosome as its first gene's expression, so tests can pin fitness.
pub struct LeadExpression;

impl FitnessEvaluator for LeadExpression {
    fn evaluate(&self, chromosome: &Chromosome) -> UnitInterval {
        chromosome
            .genes()
            .first()
            .map(|g| g.expression)
            .unwrap_or(UnitInterval::ZERO)
    }
}

/// A one-gene component scoring `fitness` under [`LeadExpression`].
pub fn pinned_component(id: &str, fitness: f64, stage: LifecycleStage) -> Component {
    let gene = Gene::new(GeneId::from(format!("{id}-gene")), GeneKind::Function, "fn f() {}")
        .with_expression(fitness);
    let chromosome = Chromosome::new(
        ChromosomeId::from(format!("{id}-chromosome")),
        ComponentType::Api,
        vec![gene],
        0,
        &LeadExpression,
    );
    Component::new(ComponentId::from(id), id, chromosome, 0).with_stage(stage)
}
