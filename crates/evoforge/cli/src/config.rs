//! Configuration loading for the CLI

use crate::error::CliResult;
use evoforge_engine::EvolutionConfig;
use std::path::Path;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub population_size: Option<usize>,
    pub seed: Option<u64>,
    pub mutation_rate: Option<f64>,
    pub elitism_rate: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut EvolutionConfig) {
        if let Some(size) = self.population_size {
            config.population_size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(rate) = self.mutation_rate {
            config.mutation_rate = rate;
        }
        if let Some(rate) = self.elitism_rate {
            config.elitism_rate = rate;
        }
    }
}

/// Read a TOML config file, or fall back to defaults when no path is given.
pub fn load(path: Option<&Path>) -> CliResult<EvolutionConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(EvolutionConfig::default()),
    }
}
