//! Generation records, summaries and snapshots.

use crate::pressure::PressureKind;
use chrono::{DateTime, Utc};
use evoforge_genome::{Component, ComponentId, ComponentType, LifecycleStage};
use evoforge_selection::ReproductionMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution statistics over aggregate fitness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessStats {
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl FitnessStats {
    /// All zeros for an empty input.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            best: values.iter().copied().fold(f64::MIN, f64::max),
            worst: values.iter().copied().fold(f64::MAX, f64::min),
            std_dev: variance.sqrt(),
        }
    }

    pub fn of<'a, I>(components: I) -> Self
    where
        I: IntoIterator<Item = &'a Component>,
    {
        let values: Vec<f64> = components.into_iter().map(|c| c.fitness().value()).collect();
        Self::from_values(&values)
    }
}

/// What one `evolve_generation` call did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// 1-based generation number.
    pub index: u64,
    pub population_size: usize,
    /// Members of the previous population still alive.
    pub survivor_count: usize,
    pub offspring_count: usize,
    pub parent_count: usize,
    pub reproduction: ReproductionMode,
    pub pressures_applied: Vec<PressureKind>,
    #[serde(flatten)]
    pub fitness: FitnessStats,
    pub mutations_attempted: usize,
    pub mutations_accepted: usize,
    pub crossovers: usize,
    pub duration_ms: u64,
    pub started_at: DateTime<Utc>,
}

/// Result of seeding a population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    pub count: usize,
    pub type_distribution: BTreeMap<ComponentType, usize>,
    pub mean_fitness: f64,
}

/// Cumulative view of a controller's run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionSummary {
    pub generations_evolved: u64,
    pub population_size: usize,
    pub total_mutations_attempted: u64,
    pub total_mutations_accepted: u64,
    pub total_crossovers: u64,
    pub lifecycle_distribution: BTreeMap<LifecycleStage, usize>,
    pub type_distribution: BTreeMap<ComponentType, usize>,
    pub fitness: FitnessStats,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    pub elitism_rate: f64,
    pub diversity_threshold: f64,
}

/// Direct ancestry of one live component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    pub id: ComponentId,
    pub parents: Vec<ComponentId>,
    pub offspring: Vec<ComponentId>,
}

/// Serializable copy of the live population.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub generation: u64,
    pub components: Vec<Component>,
}

/// Count components per component type.
pub(crate) fn type_distribution<'a, I>(components: I) -> BTreeMap<ComponentType, usize>
where
    I: IntoIterator<Item = &'a Component>,
{
    let mut out = BTreeMap::new();
    for component in components {
        *out.entry(component.component_type()).or_insert(0) += 1;
    }
    out
}

/// Count components per lifecycle stage.
pub(crate) fn lifecycle_distribution<'a, I>(components: I) -> BTreeMap<LifecycleStage, usize>
where
    I: IntoIterator<Item = &'a Component>,
{
    let mut out = BTreeMap::new();
    for component in components {
        *out.entry(component.stage()).or_insert(0) += 1;
    }
    out
}
