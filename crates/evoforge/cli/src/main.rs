//! Evoforge CLI - drive evolution runs from the terminal
//!
//! - `evoforge run`: seed a population, evolve it, report per-generation
//!   statistics and the final summary
//! - `evoforge config`: print the effective configuration as TOML

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::run::RunArgs;
use config::ConfigOverrides;
use error::CliResult;

/// Evoforge CLI application
#[derive(Parser)]
#[command(name = "evoforge")]
#[command(about = "Evoforge - evolutionary code synthesis", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, env = "EVOFORGE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Seed a population and evolve it
    Run(RunArgs),

    /// Show the effective configuration
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = dispatch(cli).await {
        eprintln!("{} {}", colored::Colorize::red("✗"), e);
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let mut config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Run(args) => {
            ConfigOverrides {
                population_size: args.population_size,
                seed: args.seed,
                mutation_rate: args.mutation_rate,
                elitism_rate: args.elitism_rate,
            }
            .apply(&mut config);
            commands::run::execute(args, config, cli.output).await
        }
        Commands::Config => commands::config::execute(&config),
    }
}
