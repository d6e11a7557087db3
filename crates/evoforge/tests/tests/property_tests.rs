#[path = "property/bounded_fields.rs"]
mod bounded_fields;

#[path = "property/fitness_determinism.rs"]
mod fitness_determinism;

#[path = "property/mutation_acceptance.rs"]
mod mutation_acceptance;

#[path = "property/population_invariants.rs"]
mod population_invariants;

#[path = "property/survivor_selection.rs"]
mod survivor_selection;
