//! Snapshots survive serialization; the stop handle is honoured at boundaries.

use evoforge_engine::{EvolutionController, EvolutionError, PopulationSnapshot};
use evoforge_genome::GeneLibrary;
use evoforge_tests::{config, seeded_controller};
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[test]
fn snapshot_round_trips_through_json() {
    let mut controller = seeded_controller(10, 21);
    controller.run(3).unwrap();
    let snapshot = controller.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: PopulationSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.generation, snapshot.generation);
    assert_eq!(back.components.len(), snapshot.components.len());
    for (restored, original) in back.components.iter().zip(&snapshot.components) {
        assert_eq!(restored.id(), original.id());
        assert_eq!(restored.stage(), original.stage());
        assert_eq!(restored.gene_count(), original.gene_count());
        assert!((restored.fitness().value() - original.fitness().value()).abs() < 1e-12);
    }

    let mut cfg = config(10, 22);
    cfg.pressures.clear();
    let mut restored = EvolutionController::new(cfg, Arc::new(GeneLibrary::canonical())).unwrap();
    restored.restore(back).unwrap();
    assert_eq!(restored.generation(), 3);
    assert_eq!(restored.population().count(), 10);
    restored.evolve_generation().unwrap();
    assert_eq!(restored.population().count(), 10);
}

#[test]
fn preset_stop_cancels_before_any_generation() {
    let mut controller = seeded_controller(6, 23);
    let stop = controller.stop_handle();
    stop.store(true, Ordering::Relaxed);
    assert!(matches!(controller.run(4), Err(EvolutionError::Cancelled)));
    assert_eq!(controller.generation(), 0);

    stop.store(false, Ordering::Relaxed);
    assert_eq!(controller.run(2).unwrap().len(), 2);
}

#[test]
fn snapshot_with_chromosome_less_component_is_rejected() {
    let mut source = seeded_controller(10, 24);
    source.run(2).unwrap();
    let mut value = serde_json::to_value(source.snapshot()).unwrap();
    value["components"][0]["chromosomes"] = serde_json::json!([]);
    let tampered: PopulationSnapshot = serde_json::from_value(value).unwrap();

    let mut controller = seeded_controller(10, 25);
    let before = controller.snapshot();
    let result = controller.restore(tampered);
    assert!(matches!(result, Err(EvolutionError::InvalidConfiguration(_))));

    assert_eq!(controller.snapshot(), before);
    assert_eq!(controller.get_evolution_summary().population_size, 10);
    controller.evolve_generation().unwrap();
}
