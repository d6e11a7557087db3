#[path = "scenarios/seeding.rs"]
mod seeding;

#[path = "scenarios/generational_run.rs"]
mod generational_run;

#[path = "scenarios/missing_component.rs"]
mod missing_component;

#[path = "scenarios/single_gene_deletion.rs"]
mod single_gene_deletion;

#[path = "scenarios/asexual_fallback.rs"]
mod asexual_fallback;

#[path = "scenarios/snapshot_and_stop.rs"]
mod snapshot_and_stop;

#[path = "scenarios/inert_rates_and_pressures.rs"]
mod inert_rates_and_pressures;
