//! A population with a single eligible parent falls back to cloning.

use evoforge_engine::{EvolutionConfig, EvolutionController, ReproductionMode};
use evoforge_genome::{ComponentId, GeneLibrary, LifecycleStage};
use evoforge_tests::{pinned_component, LeadExpression};
use std::collections::HashSet;
use std::sync::Arc;

fn controller(size: usize) -> EvolutionController {
    let cfg = EvolutionConfig {
        population_size: size,
        mutation_rate: 0.0,
        pressures: Vec::new(),
        seed: Some(17),
        ..Default::default()
    };
    EvolutionController::with_evaluator(cfg, Arc::new(GeneLibrary::canonical()), Arc::new(LeadExpression))
        .unwrap()
}

#[test]
fn lone_parent_yields_single_lineage_offspring() {
    let mut controller = controller(8);
    let mut components = vec![pinned_component("champion", 0.9, LifecycleStage::Adult)];
    components.extend(
        (0..7).map(|i| pinned_component(&format!("weak-{i}"), 0.05, LifecycleStage::Breeding)),
    );
    let previous: HashSet<ComponentId> = components.iter().map(|c| c.id().clone()).collect();
    controller.restore_population(components).unwrap();

    let record = controller.evolve_generation().unwrap();
    assert_eq!(record.reproduction, ReproductionMode::Asexual);
    assert_eq!(record.parent_count, 1);
    assert_eq!(record.offspring_count, 2);
    assert_eq!(record.crossovers, 0);
    assert_eq!(record.population_size, 8);

    let champion = ComponentId::from("champion");
    for component in controller.population() {
        if !previous.contains(component.id()) {
            assert_eq!(component.parent_ids(), &[champion.clone()]);
        }
    }
    let lineage = controller.lineage(&champion).unwrap();
    assert_eq!(lineage.offspring.len(), 2);
    assert!(lineage.parents.is_empty());
}

#[test]
fn no_eligible_parents_still_completes_generation() {
    let mut controller = controller(5);
    let components = (0..5)
        .map(|i| pinned_component(&format!("dud-{i}"), 0.1, LifecycleStage::Adult))
        .collect();
    controller.restore_population(components).unwrap();

    let record = controller.evolve_generation().unwrap();
    assert_eq!(record.reproduction, ReproductionMode::None);
    assert_eq!(record.offspring_count, 0);
    assert_eq!(record.survivor_count, 5);
    assert_eq!(controller.population().count(), 5);
}
