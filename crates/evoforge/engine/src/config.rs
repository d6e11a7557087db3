//! Configuration for the evolution controller

use crate::error::{EvolutionError, EvolutionResult};
use crate::pressure::EnvironmentalPressure;
use evoforge_genome::ComponentType;
use serde::{Deserialize, Serialize};

/// Evolution run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Live components after every survivor selection
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Probability that an offspring attempts one mutation
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,

    /// Accepted and reported; does not gate crossover
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,

    /// Fraction of the target population kept unconditionally by fitness
    #[serde(default = "default_elitism_rate")]
    pub elitism_rate: f64,

    /// Reserved
    #[serde(default = "default_diversity_threshold")]
    pub diversity_threshold: f64,

    /// RNG seed; entropy when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Types drawn from when seeding
    #[serde(default = "default_component_types")]
    pub component_types: Vec<ComponentType>,

    /// Generation records retained by the controller
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Pressures rolled once per generation
    #[serde(default = "EnvironmentalPressure::defaults")]
    pub pressures: Vec<EnvironmentalPressure>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            mutation_rate: default_mutation_rate(),
            crossover_rate: default_crossover_rate(),
            elitism_rate: default_elitism_rate(),
            diversity_threshold: default_diversity_threshold(),
            seed: None,
            component_types: default_component_types(),
            max_history: default_max_history(),
            pressures: EnvironmentalPressure::defaults(),
        }
    }
}

impl EvolutionConfig {
    /// Reject configurations the controller cannot honour.
    pub fn validate(&self) -> EvolutionResult<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be positive"));
        }
        for (name, rate) in [
            ("mutation_rate", self.mutation_rate),
            ("crossover_rate", self.crossover_rate),
            ("elitism_rate", self.elitism_rate),
            ("diversity_threshold", self.diversity_threshold),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(invalid(format!("{name} must be within [0, 1], got {rate}")));
            }
        }
        if self.component_types.is_empty() {
            return Err(invalid("component_types must not be empty"));
        }
        for pressure in &self.pressures {
            if !(0.0..=1.0).contains(&pressure.probability) {
                return Err(invalid(format!(
                    "{} pressure probability must be within [0, 1], got {}",
                    pressure.kind, pressure.probability
                )));
            }
            if !(1.0..=2.0).contains(&pressure.boost) {
                return Err(invalid(format!(
                    "{} pressure boost must be within [1, 2], got {}",
                    pressure.kind, pressure.boost
                )));
            }
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> EvolutionError {
    EvolutionError::InvalidConfiguration(message.into())
}

fn default_population_size() -> usize {
    50
}

fn default_mutation_rate() -> f64 {
    0.05
}

fn default_crossover_rate() -> f64 {
    0.7
}

fn default_elitism_rate() -> f64 {
    0.1
}

fn default_diversity_threshold() -> f64 {
    0.3
}

fn default_component_types() -> Vec<ComponentType> {
    ComponentType::all().to_vec()
}

fn default_max_history() -> usize {
    256
}
