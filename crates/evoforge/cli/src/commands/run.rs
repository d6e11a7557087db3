//! Seed a population and evolve it

use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat, RunReport};
use clap::Args;
use evoforge_engine::{EvolutionConfig, EvolutionController, EvolutionError};
use evoforge_genome::GeneLibrary;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

/// Arguments for `evoforge run`
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Generations to evolve
    #[arg(short = 'n', long, default_value_t = 10)]
    pub generations: u64,

    /// Target population size
    #[arg(long)]
    pub population_size: Option<usize>,

    /// RNG seed for a reproducible run
    #[arg(long, env = "EVOFORGE_SEED")]
    pub seed: Option<u64>,

    /// Per-offspring mutation probability
    #[arg(long)]
    pub mutation_rate: Option<f64>,

    /// Fraction kept unconditionally by fitness
    #[arg(long)]
    pub elitism_rate: Option<f64>,

    /// Print the generated code of the fittest component
    #[arg(long)]
    pub emit_best: bool,

    /// Write the final population snapshot to this JSON file
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

/// Execute a run
pub async fn execute(args: RunArgs, config: EvolutionConfig, format: OutputFormat) -> CliResult<()> {
    if args.generations == 0 {
        return Err(CliError::InvalidArgument(
            "--generations must be at least 1".into(),
        ));
    }

    let library = Arc::new(GeneLibrary::canonical());
    let mut controller = EvolutionController::new(config, library)?;
    let size = controller.config().population_size;
    let seeded = controller.create_initial_population(size)?;
    if format == OutputFormat::Table {
        output::print_seeded(&seeded);
    }

    let stop = controller.stop_handle();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupt received, stopping after the current generation");
            stop.store(true, Ordering::Relaxed);
        }
    });

    let generations = args.generations;
    let (controller, outcome) = tokio::task::spawn_blocking(move || {
        let outcome = controller.run(generations);
        (controller, outcome)
    })
    .await?;
    watcher.abort();

    let records = match outcome {
        Ok(records) => records,
        Err(EvolutionError::Cancelled) => Vec::new(),
        Err(e) => return Err(e.into()),
    };
    if (records.len() as u64) < generations {
        warn!(
            completed = records.len(),
            requested = generations,
            "run interrupted"
        );
        if format == OutputFormat::Table {
            output::print_warning(&format!(
                "stopped after {} of {} generations",
                records.len(),
                generations
            ));
        }
    }

    let summary = controller.get_evolution_summary();
    match format {
        OutputFormat::Table => {
            output::print_generations(&records);
            output::print_summary(&summary);
        }
        OutputFormat::Json => output::print_json(&RunReport {
            seeded: &seeded,
            generations: &records,
            summary: &summary,
        })?,
    }

    if args.emit_best {
        if let Some(best) = controller.best_component() {
            let code = controller.generate_code(best.id())?;
            println!();
            println!("{}", code);
        }
    }

    if let Some(path) = args.snapshot {
        let json = serde_json::to_string_pretty(&controller.snapshot())?;
        std::fs::write(&path, json)?;
        info!(path = %path.display(), "snapshot written");
        if format == OutputFormat::Table {
            output::print_success(&format!("snapshot written to {}", path.display()));
        }
    }

    Ok(())
}
