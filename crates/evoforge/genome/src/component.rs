//! Components: evolving individuals made of one or more chromosomes.

use crate::chromosome::{Chromosome, FitnessEvaluator};
use crate::ids::ComponentId;
use crate::lifecycle::LifecycleStage;
use crate::phenotype::ComponentType;
use crate::unit::UnitInterval;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One evolving individual.
///
/// A component always owns at least one chromosome. Its aggregate fitness
/// is the mean chromosome fitness, except between an environmental boost
/// and the next [`Component::refresh_fitness`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    id: ComponentId,
    name: String,
    stage: LifecycleStage,
    chromosomes: Vec<Chromosome>,
    generation: u64,
    fitness: UnitInterval,
    age: u32,
    mutation_count: u32,
    parent_ids: Vec<ComponentId>,
    offspring_ids: Vec<ComponentId>,
}

impl Component {
    pub fn new(
        id: ComponentId,
        name: impl Into<String>,
        primary: Chromosome,
        generation: u64,
    ) -> Self {
        let mut component = Self {
            id,
            name: name.into(),
            stage: LifecycleStage::Egg,
            chromosomes: vec![primary],
            generation,
            fitness: UnitInterval::ZERO,
            age: 0,
            mutation_count: 0,
            parent_ids: Vec::new(),
            offspring_ids: Vec::new(),
        };
        component.refresh_fitness();
        component
    }

    pub fn with_chromosome(mut self, chromosome: Chromosome) -> Self {
        self.chromosomes.push(chromosome);
        self.refresh_fitness();
        self
    }

    pub fn with_parents(mut self, parent_ids: Vec<ComponentId>) -> Self {
        self.parent_ids = parent_ids;
        self
    }

    pub fn with_stage(mut self, stage: LifecycleStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn id(&self) -> &ComponentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stage(&self) -> LifecycleStage {
        self.stage
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fitness(&self) -> UnitInterval {
        self.fitness
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn mutation_count(&self) -> u32 {
        self.mutation_count
    }

    pub fn parent_ids(&self) -> &[ComponentId] {
        &self.parent_ids
    }

    pub fn offspring_ids(&self) -> &[ComponentId] {
        &self.offspring_ids
    }

    /// Type of the primary chromosome.
    ///
    /// A deserialized component with no chromosomes reports `Core`.
    pub fn component_type(&self) -> ComponentType {
        self.chromosomes
            .first()
            .map_or(ComponentType::Core, Chromosome::component_type)
    }

    /// Total genes across all chromosomes.
    pub fn gene_count(&self) -> usize {
        self.chromosomes.iter().map(Chromosome::len).sum()
    }

    /// Mean coherence over every gene, `ZERO` when there are none.
    pub fn mean_coherence(&self) -> UnitInterval {
        UnitInterval::mean(
            self.chromosomes
                .iter()
                .flat_map(|c| c.genes())
                .map(|g| g.coherence),
        )
    }

    /// Reset aggregate fitness to the mean chromosome fitness.
    pub fn refresh_fitness(&mut self) {
        self.fitness = UnitInterval::mean(self.chromosomes.iter().map(Chromosome::fitness));
    }

    /// Re-score every chromosome, then refresh aggregate fitness.
    pub fn reevaluate(&mut self, evaluator: &dyn FitnessEvaluator) {
        for chromosome in &mut self.chromosomes {
            chromosome.reevaluate(evaluator);
        }
        self.refresh_fitness();
    }

    /// Scale aggregate fitness by an environmental boost factor.
    pub fn apply_boost(&mut self, factor: f64) {
        self.fitness = self.fitness.scaled(factor);
    }

    /// Run `f` against one chromosome and refresh aggregate fitness.
    ///
    /// Returns `None` when `index` is out of range.
    pub fn with_chromosome_mut<T>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Chromosome) -> T,
    ) -> Option<T> {
        let chromosome = self.chromosomes.get_mut(index)?;
        let out = f(chromosome);
        self.refresh_fitness();
        Some(out)
    }

    pub fn record_mutation(&mut self) {
        self.mutation_count = self.mutation_count.saturating_add(1);
    }

    pub fn add_offspring(&mut self, id: ComponentId) {
        self.offspring_ids.push(id);
    }

    /// Move one lifecycle step forward and count one more generation.
    pub fn advance(&mut self) -> LifecycleStage {
        self.stage = self.stage.next();
        self.generation += 1;
        self.age = self.age.saturating_add(1);
        for chromosome in &mut self.chromosomes {
            chromosome.age_genes();
        }
        self.stage
    }

    /// Deep copy under fresh ids with this component as the only parent.
    pub fn clone_fresh<R: Rng + ?Sized>(&self, rng: &mut R, generation: u64) -> Self {
        let id = ComponentId::random(rng);
        let chromosomes: Vec<Chromosome> = self
            .chromosomes
            .iter()
            .map(|c| c.clone_fresh(rng, generation))
            .collect();
        let mut child = Self {
            name: format!("{}-{}", self.component_type(), id.short()),
            id,
            stage: LifecycleStage::Egg,
            chromosomes,
            generation,
            fitness: UnitInterval::ZERO,
            age: 0,
            mutation_count: 0,
            parent_ids: vec![self.id.clone()],
            offspring_ids: Vec::new(),
        };
        child.refresh_fitness();
        child
    }

    /// Render a metadata header followed by every chromosome's phenotype.
    pub fn render(&self) -> String {
        let mut out = format!("// component: {} ({})\n", self.name, self.id);
        out.push_str(&format!(
            "// type: {} | stage: {} | generation: {} | age: {}\n",
            self.component_type(),
            self.stage,
            self.generation,
            self.age
        ));
        out.push_str(&format!(
            "// fitness: {} | mutations: {} | chromosomes: {}\n",
            self.fitness,
            self.mutation_count,
            self.chromosomes.len()
        ));
        if !self.parent_ids.is_empty() {
            let parents: Vec<&str> = self.parent_ids.iter().map(|p| p.as_str()).collect();
            out.push_str(&format!("// parents: {}\n", parents.join(", ")));
        }
        for chromosome in &self.chromosomes {
            out.push('\n');
            out.push_str(&chromosome.render());
        }
        out
    }
}
