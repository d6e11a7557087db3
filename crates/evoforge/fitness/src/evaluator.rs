use crate::heuristics::StructureReport;
use evoforge_genome::{Chromosome, FitnessEvaluator, Gene, UnitInterval};
use serde::{Deserialize, Serialize};

/// Gene count at which the gene-count score saturates.
pub const GENE_COUNT_CAP: usize = 8;

/// Largest possible population variance of values in `[0, 1]`.
const MAX_UNIT_VARIANCE: f64 = 0.25;

/// The five sub-scores behind a composite fitness value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitnessBreakdown {
    pub gene_count: f64,
    pub expression_diversity: f64,
    pub coherence: f64,
    pub structural_quality: f64,
    pub functionality: f64,
}

impl FitnessBreakdown {
    /// Mean of the five sub-scores, clamped.
    pub fn total(&self) -> UnitInterval {
        UnitInterval::new(
            (self.gene_count
                + self.expression_diversity
                + self.coherence
                + self.structural_quality
                + self.functionality)
                / 5.0,
        )
    }
}

/// Equal-weight composite of gene count, expression diversity, coherence,
/// structural quality and functionality.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompositeEvaluator;

impl CompositeEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn breakdown(&self, chromosome: &Chromosome) -> FitnessBreakdown {
        let genes = chromosome.genes();
        FitnessBreakdown {
            gene_count: gene_count_score(genes),
            expression_diversity: expression_diversity_score(genes),
            coherence: coherence_score(genes),
            structural_quality: StructureReport::inspect(&chromosome.render()).score(),
            functionality: functionality_score(genes),
        }
    }
}

impl FitnessEvaluator for CompositeEvaluator {
    fn evaluate(&self, chromosome: &Chromosome) -> UnitInterval {
        self.breakdown(chromosome).total()
    }
}

fn gene_count_score(genes: &[Gene]) -> f64 {
    (genes.len() as f64 / GENE_COUNT_CAP as f64).min(1.0)
}

fn expression_diversity_score(genes: &[Gene]) -> f64 {
    if genes.len() < 2 {
        return 0.0;
    }
    let n = genes.len() as f64;
    let mean = genes.iter().map(|g| g.expression.value()).sum::<f64>() / n;
    let variance = genes
        .iter()
        .map(|g| (g.expression.value() - mean).powi(2))
        .sum::<f64>()
        / n;
    (variance / MAX_UNIT_VARIANCE).min(1.0)
}

fn coherence_score(genes: &[Gene]) -> f64 {
    UnitInterval::mean(genes.iter().map(|g| g.coherence)).value()
}

fn functionality_score(genes: &[Gene]) -> f64 {
    genes
        .iter()
        .map(|g| g.fitness_contribution.value() * g.expression.value())
        .sum::<f64>()
        .min(1.0)
}
