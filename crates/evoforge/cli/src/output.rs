//! Output formatting utilities

use colored::*;
use evoforge_engine::{EvolutionSummary, GenerationRecord, PopulationSummary};
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// JSON report
    Json,
}

/// One table row per generation record
#[derive(Debug, Tabled)]
pub struct GenerationRow {
    #[tabled(rename = "gen")]
    pub index: u64,
    #[tabled(rename = "pop")]
    pub population: usize,
    pub survivors: usize,
    pub offspring: usize,
    pub parents: usize,
    pub mode: String,
    pub pressures: String,
    pub mean: String,
    pub best: String,
    pub worst: String,
    #[tabled(rename = "std")]
    pub std_dev: String,
    #[tabled(rename = "mutations")]
    pub mutations: String,
    #[tabled(rename = "xovers")]
    pub crossovers: usize,
    pub ms: u64,
}

impl From<&GenerationRecord> for GenerationRow {
    fn from(record: &GenerationRecord) -> Self {
        let pressures = if record.pressures_applied.is_empty() {
            "-".to_string()
        } else {
            record
                .pressures_applied
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        Self {
            index: record.index,
            population: record.population_size,
            survivors: record.survivor_count,
            offspring: record.offspring_count,
            parents: record.parent_count,
            mode: record.reproduction.to_string(),
            pressures,
            mean: format!("{:.4}", record.fitness.mean),
            best: format!("{:.4}", record.fitness.best),
            worst: format!("{:.4}", record.fitness.worst),
            std_dev: format!("{:.4}", record.fitness.std_dev),
            mutations: format!("{}/{}", record.mutations_accepted, record.mutations_attempted),
            crossovers: record.crossovers,
            ms: record.duration_ms,
        }
    }
}

/// Everything a run produced, for JSON output
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub seeded: &'a PopulationSummary,
    pub generations: &'a [GenerationRecord],
    pub summary: &'a EvolutionSummary,
}

pub fn print_seeded(summary: &PopulationSummary) {
    let types = summary
        .type_distribution
        .iter()
        .map(|(ty, n)| format!("{}={}", ty.symbol(), n))
        .collect::<Vec<_>>()
        .join(" ");
    print_info(&format!(
        "seeded {} components ({}), mean fitness {:.4}",
        summary.count, types, summary.mean_fitness
    ));
}

pub fn print_generations(records: &[GenerationRecord]) {
    if records.is_empty() {
        println!("{}", "No generations evolved".dimmed());
        return;
    }
    let rows: Vec<GenerationRow> = records.iter().map(GenerationRow::from).collect();
    println!("{}", Table::new(rows));
}

pub fn print_summary(summary: &EvolutionSummary) {
    println!();
    println!("{}", "Evolution summary".bold());
    println!("  Generations:  {}", summary.generations_evolved);
    println!("  Population:   {}", summary.population_size);
    println!(
        "  Fitness:      mean {:.4} | best {} | worst {:.4}",
        summary.fitness.mean,
        format!("{:.4}", summary.fitness.best).green(),
        summary.fitness.worst
    );
    println!(
        "  Mutations:    {} accepted of {} attempted",
        summary.total_mutations_accepted, summary.total_mutations_attempted
    );
    println!("  Crossovers:   {}", summary.total_crossovers);

    let stages = summary
        .lifecycle_distribution
        .iter()
        .map(|(stage, n)| format!("{stage}={n}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  Lifecycle:    {}", stages);

    let types = summary
        .type_distribution
        .iter()
        .map(|(ty, n)| format!("{}={}", ty.symbol(), n))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  Types:        {}", types);
    println!(
        "  Rates:        mutation {} | crossover {} | elitism {} | diversity {}",
        summary.mutation_rate,
        summary.crossover_rate,
        summary.elitism_rate,
        summary.diversity_threshold
    );
}

pub fn print_json<T: Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
