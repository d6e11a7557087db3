//! Queries against ids that are not in the population.

use evoforge_engine::EvolutionError;
use evoforge_genome::ComponentId;
use evoforge_tests::seeded_controller;

#[test]
fn generate_code_for_unknown_id_is_not_found() {
    let controller = seeded_controller(5, 11);
    let result = controller.generate_code(&ComponentId::from("nonexistent-id"));
    match result {
        Err(EvolutionError::NotFound(id)) => assert_eq!(id, "nonexistent-id"),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(controller.lineage(&ComponentId::from("nonexistent-id")).is_err());
    assert!(controller.component(&ComponentId::from("nonexistent-id")).is_none());
}

#[test]
fn generate_code_renders_header_and_chromosomes() {
    let mut controller = seeded_controller(6, 12);
    controller.run(2).unwrap();
    let best = controller.best_component().unwrap();
    let code = controller.generate_code(best.id()).unwrap();

    assert!(code.starts_with(&format!("// component: {} ({})", best.name(), best.id())));
    assert!(code.contains("| stage: "));
    assert!(code.contains("mod "));
}
