//! The generational state machine.

use crate::config::EvolutionConfig;
use crate::error::{EvolutionError, EvolutionResult};
use crate::record::{
    lifecycle_distribution, type_distribution, EvolutionSummary, FitnessStats, GenerationRecord,
    Lineage, PopulationSnapshot, PopulationSummary,
};
use chrono::Utc;
use evoforge_fitness::CompositeEvaluator;
use evoforge_genome::{Chromosome, ChromosomeId, Component, ComponentId, FitnessEvaluator, GeneLibrary};
use evoforge_operators::{MutationVerdict, Mutator};
use evoforge_selection::{reproduce, select_parents, select_survivors, Reproduction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Fewest genes a seeded chromosome starts with.
pub const SEED_GENES_MIN: usize = 3;
/// Most genes a seeded chromosome starts with.
pub const SEED_GENES_MAX: usize = 8;

#[derive(Clone, Copy, Debug, Default)]
struct RunTotals {
    mutations_attempted: u64,
    mutations_accepted: u64,
    crossovers: u64,
}

/// Owns one population and drives it generation by generation.
///
/// The controller is single-threaded: the population and the RNG belong to
/// it alone. The gene library is shared read-only and may back several
/// controllers at once.
pub struct EvolutionController {
    config: EvolutionConfig,
    library: Arc<GeneLibrary>,
    evaluator: Arc<dyn FitnessEvaluator>,
    rng: StdRng,
    population: BTreeMap<ComponentId, Component>,
    generation: u64,
    history: VecDeque<GenerationRecord>,
    totals: RunTotals,
    stop: Arc<AtomicBool>,
}

impl EvolutionController {
    /// Create a controller scoring with [`CompositeEvaluator`].
    pub fn new(config: EvolutionConfig, library: Arc<GeneLibrary>) -> EvolutionResult<Self> {
        Self::with_evaluator(config, library, Arc::new(CompositeEvaluator::new()))
    }

    /// Create a controller with a custom fitness evaluator.
    ///
    /// Fails with `InvalidConfiguration` before any state is built.
    pub fn with_evaluator(
        config: EvolutionConfig,
        library: Arc<GeneLibrary>,
        evaluator: Arc<dyn FitnessEvaluator>,
    ) -> EvolutionResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            population_size = config.population_size,
            seed = ?config.seed,
            templates = library.len(),
            "evolution controller created"
        );
        Ok(Self {
            config,
            library,
            evaluator,
            rng,
            population: BTreeMap::new(),
            generation: 0,
            history: VecDeque::new(),
            totals: RunTotals::default(),
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Generations evolved since the population was seeded or restored.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Shared flag checked by [`run`](Self::run) between generations.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Replace any existing population with `size` fresh components.
    ///
    /// `size` also becomes the target population size. Counters and history
    /// start over.
    pub fn create_initial_population(&mut self, size: usize) -> EvolutionResult<PopulationSummary> {
        if size == 0 {
            return Err(EvolutionError::InvalidConfiguration(
                "initial population size must be positive".into(),
            ));
        }

        self.config.population_size = size;
        self.population.clear();
        self.history.clear();
        self.generation = 0;
        self.totals = RunTotals::default();

        for _ in 0..size {
            let component = self.spawn();
            self.population.insert(component.id().clone(), component);
        }

        let summary = PopulationSummary {
            count: self.population.len(),
            type_distribution: type_distribution(self.population.values()),
            mean_fitness: FitnessStats::of(self.population.values()).mean,
        };
        info!(
            count = summary.count,
            mean_fitness = summary.mean_fitness,
            "population seeded"
        );
        Ok(summary)
    }

    fn spawn(&mut self) -> Component {
        let types = &self.config.component_types;
        let component_type = types[self.rng.gen_range(0..types.len())];
        let genes = self
            .library
            .sample(self.rng.gen_range(SEED_GENES_MIN..=SEED_GENES_MAX), &mut self.rng);
        let chromosome = Chromosome::new(
            ChromosomeId::random(&mut self.rng),
            component_type,
            genes,
            self.generation,
            self.evaluator.as_ref(),
        );
        let id = ComponentId::random(&mut self.rng);
        let name = format!("{}-{}", component_type, id.short());
        Component::new(id, name, chromosome, self.generation)
    }

    /// Run one generation: select parents, reproduce, mutate offspring,
    /// apply pressures, select survivors, advance lifecycles.
    pub fn evolve_generation(&mut self) -> EvolutionResult<GenerationRecord> {
        if self.population.is_empty() {
            return Err(EvolutionError::PopulationNotSeeded);
        }

        let started_at = Utc::now();
        let clock = Instant::now();
        let index = self.generation + 1;

        for component in self.population.values_mut() {
            component.refresh_fitness();
        }
        let previous: BTreeSet<ComponentId> = self.population.keys().cloned().collect();

        let (parent_count, reproduction) = {
            let selection = select_parents(self.population.values(), &mut self.rng);
            let reproduction = reproduce(
                &selection.parents,
                self.generation,
                self.evaluator.as_ref(),
                &mut self.rng,
            );
            (selection.parents.len(), reproduction)
        };
        let Reproduction {
            mode,
            mut offspring,
            crossovers,
        } = reproduction;

        for child in &offspring {
            for parent_id in child.parent_ids() {
                if let Some(parent) = self.population.get_mut(parent_id) {
                    parent.add_offspring(child.id().clone());
                }
            }
        }

        let mut mutations_attempted = 0;
        let mut mutations_accepted = 0;
        let mutator = Mutator::new(&self.library, self.evaluator.as_ref());
        for child in &mut offspring {
            if !self.rng.gen_bool(self.config.mutation_rate) {
                continue;
            }
            let slot = self.rng.gen_range(0..child.chromosomes().len());
            let outcome = child.with_chromosome_mut(slot, |c| mutator.attempt(c, &mut self.rng));
            mutations_attempted += 1;
            if outcome.map(|o| o.verdict) == Some(MutationVerdict::Accepted) {
                child.record_mutation();
                mutations_accepted += 1;
            }
        }

        let mut pressures_applied = Vec::new();
        for pressure in &self.config.pressures {
            if pressure.fires(&mut self.rng) {
                let boosted = pressure.apply(self.population.values_mut().chain(offspring.iter_mut()));
                debug!(kind = %pressure.kind, boosted, "pressure fired");
                pressures_applied.push(pressure.kind);
            }
        }

        let offspring_count = offspring.len();
        let mut pool: Vec<Component> = std::mem::take(&mut self.population).into_values().collect();
        pool.extend(offspring);
        let selection = select_survivors(
            pool,
            self.config.population_size,
            self.config.elitism_rate,
            self.generation,
            &mut self.rng,
        );

        let survivor_count = selection
            .survivors
            .iter()
            .filter(|c| previous.contains(c.id()))
            .count();
        for mut component in selection.survivors {
            component.advance();
            self.population.insert(component.id().clone(), component);
        }
        self.generation = index;

        let record = GenerationRecord {
            index,
            population_size: self.population.len(),
            survivor_count,
            offspring_count,
            parent_count,
            reproduction: mode,
            pressures_applied,
            fitness: FitnessStats::of(self.population.values()),
            mutations_attempted,
            mutations_accepted,
            crossovers,
            duration_ms: clock.elapsed().as_millis() as u64,
            started_at,
        };

        self.totals.mutations_attempted += mutations_attempted as u64;
        self.totals.mutations_accepted += mutations_accepted as u64;
        self.totals.crossovers += crossovers as u64;
        self.remember(record.clone());

        info!(
            generation = index,
            population = record.population_size,
            offspring = offspring_count,
            reproduction = %mode,
            mean_fitness = record.fitness.mean,
            best_fitness = record.fitness.best,
            duration_ms = record.duration_ms,
            "generation evolved"
        );
        Ok(record)
    }

    fn remember(&mut self, record: GenerationRecord) {
        if self.config.max_history == 0 {
            return;
        }
        while self.history.len() >= self.config.max_history {
            self.history.pop_front();
        }
        self.history.push_back(record);
    }

    /// Evolve up to `generations` generations, stopping early when the stop
    /// handle is set.
    ///
    /// Returns the completed records. Fails with `Cancelled` only when the
    /// handle was already set before the first generation.
    pub fn run(&mut self, generations: u64) -> EvolutionResult<Vec<GenerationRecord>> {
        let mut records = Vec::new();
        for _ in 0..generations {
            if self.stop.load(Ordering::Relaxed) {
                if records.is_empty() {
                    warn!(generation = self.generation, "evolution cancelled before start");
                    return Err(EvolutionError::Cancelled);
                }
                warn!(
                    completed = records.len(),
                    requested = generations,
                    "evolution stopped early"
                );
                break;
            }
            records.push(self.evolve_generation()?);
        }
        Ok(records)
    }

    /// Render a live component's phenotype with its metadata header.
    pub fn generate_code(&self, id: &ComponentId) -> EvolutionResult<String> {
        self.population
            .get(id)
            .map(Component::render)
            .ok_or_else(|| EvolutionError::NotFound(id.to_string()))
    }

    /// Cumulative counters and current distributions. Has no side effects.
    pub fn get_evolution_summary(&self) -> EvolutionSummary {
        EvolutionSummary {
            generations_evolved: self.generation,
            population_size: self.population.len(),
            total_mutations_attempted: self.totals.mutations_attempted,
            total_mutations_accepted: self.totals.mutations_accepted,
            total_crossovers: self.totals.crossovers,
            lifecycle_distribution: lifecycle_distribution(self.population.values()),
            type_distribution: type_distribution(self.population.values()),
            fitness: FitnessStats::of(self.population.values()),
            mutation_rate: self.config.mutation_rate,
            crossover_rate: self.config.crossover_rate,
            elitism_rate: self.config.elitism_rate,
            diversity_threshold: self.config.diversity_threshold,
        }
    }

    /// Most recent generation records, oldest first.
    pub fn history(&self) -> &VecDeque<GenerationRecord> {
        &self.history
    }

    pub fn population(&self) -> impl Iterator<Item = &Component> {
        self.population.values()
    }

    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.population.get(id)
    }

    /// The fittest live component.
    pub fn best_component(&self) -> Option<&Component> {
        self.population
            .values()
            .max_by(|a, b| a.fitness().value().total_cmp(&b.fitness().value()))
    }

    pub fn lineage(&self, id: &ComponentId) -> EvolutionResult<Lineage> {
        let component = self
            .population
            .get(id)
            .ok_or_else(|| EvolutionError::NotFound(id.to_string()))?;
        Ok(Lineage {
            id: id.clone(),
            parents: component.parent_ids().to_vec(),
            offspring: component.offspring_ids().to_vec(),
        })
    }

    pub fn snapshot(&self) -> PopulationSnapshot {
        PopulationSnapshot {
            generation: self.generation,
            components: self.population.values().cloned().collect(),
        }
    }

    /// Replace the population with `components`, re-scoring every chromosome.
    ///
    /// Fails without touching the current population when `components` is
    /// empty or any component has no chromosomes.
    ///
    /// The target population size and generation counter are unchanged.
    pub fn restore_population(&mut self, components: Vec<Component>) -> EvolutionResult<()> {
        if components.is_empty() {
            return Err(EvolutionError::InvalidConfiguration(
                "cannot restore an empty population".into(),
            ));
        }
        if let Some(bare) = components.iter().find(|c| c.chromosomes().is_empty()) {
            return Err(EvolutionError::InvalidConfiguration(format!(
                "component {} has no chromosomes",
                bare.id()
            )));
        }
        self.population.clear();
        for mut component in components {
            component.reevaluate(self.evaluator.as_ref());
            self.population.insert(component.id().clone(), component);
        }
        info!(
            count = self.population.len(),
            generation = self.generation,
            "population restored"
        );
        Ok(())
    }

    /// Restore a snapshot, including its generation counter.
    pub fn restore(&mut self, snapshot: PopulationSnapshot) -> EvolutionResult<()> {
        self.restore_population(snapshot.components)?;
        self.generation = snapshot.generation;
        Ok(())
    }
}
