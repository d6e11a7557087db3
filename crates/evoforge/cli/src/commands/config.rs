//! Show the effective configuration

use crate::error::CliResult;
use evoforge_engine::EvolutionConfig;

/// Print `config` as TOML after validating it.
pub fn execute(config: &EvolutionConfig) -> CliResult<()> {
    config.validate()?;
    print!("{}", render(config)?);
    Ok(())
}

fn render(config: &EvolutionConfig) -> CliResult<String> {
    Ok(toml::to_string_pretty(config)?)
}
