//! Chromosomes: ordered gene lists with a derived fitness.

use crate::gene::Gene;
use crate::ids::ChromosomeId;
use crate::phenotype::ComponentType;
use crate::unit::UnitInterval;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Scores a chromosome from its current gene list.
///
/// Implementations must be pure: the same genes and component type always
/// produce the same score. Gene ids and ages are not part of the score.
pub trait FitnessEvaluator: Send + Sync {
    fn evaluate(&self, chromosome: &Chromosome) -> UnitInterval;
}

/// An ordered collection of genes for one component type.
///
/// The gene list is only reachable mutably through [`Chromosome::edit_genes`],
/// which re-scores afterwards, so `fitness` always matches the evaluator's
/// output for the current genes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    id: ChromosomeId,
    component_type: ComponentType,
    genes: Vec<Gene>,
    fitness: UnitInterval,
    generation: u64,
    parent_ids: Vec<ChromosomeId>,
}

impl Chromosome {
    pub fn new(
        id: ChromosomeId,
        component_type: ComponentType,
        genes: Vec<Gene>,
        generation: u64,
        evaluator: &dyn FitnessEvaluator,
    ) -> Self {
        let mut chromosome = Self {
            id,
            component_type,
            genes,
            fitness: UnitInterval::ZERO,
            generation,
            parent_ids: Vec::new(),
        };
        chromosome.reevaluate(evaluator);
        chromosome
    }

    pub fn with_parents(mut self, parent_ids: Vec<ChromosomeId>) -> Self {
        self.parent_ids = parent_ids;
        self
    }

    pub fn id(&self) -> &ChromosomeId {
        &self.id
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn fitness(&self) -> UnitInterval {
        self.fitness
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn parent_ids(&self) -> &[ChromosomeId] {
        &self.parent_ids
    }

    /// Genes whose expression exceeds the activation threshold.
    pub fn active_genes(&self) -> impl Iterator<Item = &Gene> {
        self.genes.iter().filter(|g| g.is_active())
    }

    /// Apply `edit` to the gene list, then re-score.
    pub fn edit_genes<T>(
        &mut self,
        evaluator: &dyn FitnessEvaluator,
        edit: impl FnOnce(&mut Vec<Gene>) -> T,
    ) -> T {
        let out = edit(&mut self.genes);
        self.reevaluate(evaluator);
        out
    }

    /// Recompute fitness from the current genes.
    pub fn reevaluate(&mut self, evaluator: &dyn FitnessEvaluator) {
        self.fitness = evaluator.evaluate(self);
    }

    /// Increment the age of every gene.
    pub fn age_genes(&mut self) {
        for gene in &mut self.genes {
            gene.age = gene.age.saturating_add(1);
        }
    }

    /// Render the phenotype: the active genes inside the type's wrapper.
    pub fn render(&self) -> String {
        let active: Vec<&Gene> = self.active_genes().collect();
        self.component_type.render(self.id.short(), &active)
    }

    /// Deep copy with fresh chromosome and gene ids, recording this
    /// chromosome as the sole parent.
    pub fn clone_fresh<R: Rng + ?Sized>(&self, rng: &mut R, generation: u64) -> Self {
        Self {
            id: ChromosomeId::random(rng),
            component_type: self.component_type,
            genes: self.genes.iter().map(|g| g.duplicate(rng)).collect(),
            fitness: self.fitness,
            generation,
            parent_ids: vec![self.id.clone()],
        }
    }
}
