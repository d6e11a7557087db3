//! Multi-generation runs at the reference rates.

use evoforge_genome::LifecycleStage;
use evoforge_tests::seeded_controller;

#[test]
fn five_generations_keep_twenty_components() {
    let mut controller = seeded_controller(20, 7);
    let cfg = controller.config();
    assert_eq!(
        (cfg.mutation_rate, cfg.crossover_rate, cfg.elitism_rate),
        (0.05, 0.7, 0.1)
    );

    let records: Vec<_> = (0..5).map(|_| controller.evolve_generation().unwrap()).collect();
    assert_eq!(records.len(), 5);
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.index, i as u64 + 1);
        assert_eq!(record.population_size, 20);
        assert!(record.survivor_count <= 20);
        assert!(record.mutations_accepted <= record.mutations_attempted);
        assert!(record.fitness.best >= record.fitness.worst);
    }
    assert_eq!(controller.population().count(), 20);
    assert_eq!(controller.generation(), 5);
    assert_eq!(controller.history().len(), 5);
}

#[test]
fn survivors_advance_one_stage_per_generation() {
    let mut controller = seeded_controller(12, 8);
    controller.evolve_generation().unwrap();
    for component in controller.population() {
        assert_ne!(component.stage(), LifecycleStage::Egg);
    }
}

#[test]
fn summary_is_idempotent_between_generations() {
    let mut controller = seeded_controller(15, 9);
    controller.run(4).unwrap();

    let first = controller.get_evolution_summary();
    let second = controller.get_evolution_summary();
    assert_eq!(first, second);
    assert_eq!(first.generations_evolved, 4);
    assert_eq!(first.population_size, 15);

    let recorded: u64 = controller.history().iter().map(|r| r.crossovers as u64).sum();
    assert_eq!(first.total_crossovers, recorded);
}

#[test]
fn fixed_seed_runs_are_reproducible() {
    let run = |seed| {
        let mut controller = seeded_controller(16, seed);
        let records = controller.run(5).unwrap();
        let shape: Vec<_> = records
            .iter()
            .map(|r| (r.offspring_count, r.parent_count, r.mutations_accepted, r.crossovers, r.fitness))
            .collect();
        (shape, controller.snapshot(), controller.get_evolution_summary())
    };
    assert_eq!(run(31), run(31));
}
