//! Mutation operators and the hill-climbing acceptance rule.

use evoforge_genome::{Chromosome, FitnessEvaluator, Gene, GeneLibrary, UnitInterval};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Multiplicative range for a point mutation on expression.
pub const POINT_FACTOR: (f64, f64) = (0.9, 1.1);
/// Range a tunneling mutation draws the new coherence floor from.
pub const TUNNEL_COHERENCE: (f64, f64) = (0.5, 1.0);
/// Multiplicative range a tunneling mutation applies to fitness contribution.
pub const TUNNEL_CONTRIBUTION_FACTOR: (f64, f64) = (0.5, 2.0);

/// The five mutation operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// Jitter one gene's expression by ×[0.9, 1.1].
    Point,
    /// Append a fresh library gene.
    Insertion,
    /// Remove one gene, refused on a single-gene chromosome.
    Deletion,
    /// Append a copy of an existing gene under a new id.
    Duplication,
    /// Large-effect jump on one gene's expression, coherence and contribution.
    Tunneling,
}

impl MutationKind {
    pub fn all() -> &'static [MutationKind] {
        &[
            MutationKind::Point,
            MutationKind::Insertion,
            MutationKind::Deletion,
            MutationKind::Duplication,
            MutationKind::Tunneling,
        ]
    }

    /// Uniform draw over all kinds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let all = Self::all();
        all[rng.gen_range(0..all.len())]
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point => write!(f, "point"),
            Self::Insertion => write!(f, "insertion"),
            Self::Deletion => write!(f, "deletion"),
            Self::Duplication => write!(f, "duplication"),
            Self::Tunneling => write!(f, "tunneling"),
        }
    }
}

/// What happened to a mutation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationVerdict {
    /// Applied: fitness did not decrease.
    Accepted,
    /// Discarded: fitness would have decreased.
    Rejected,
    /// The operator had nothing to act on; the chromosome is unchanged.
    Skipped,
}

/// Record of one mutation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub kind: MutationKind,
    pub verdict: MutationVerdict,
    pub fitness_before: UnitInterval,
    /// Fitness the candidate scored; equal to `fitness_before` when skipped.
    pub fitness_after: UnitInterval,
}

impl MutationOutcome {
    pub fn is_accepted(&self) -> bool {
        self.verdict == MutationVerdict::Accepted
    }
}

/// Applies mutations speculatively and keeps only non-regressions.
///
/// There is no exploration term: a mutation that lowers fitness is always
/// discarded, so a chromosome can stall on a local optimum.
pub struct Mutator<'a> {
    library: &'a GeneLibrary,
    evaluator: &'a dyn FitnessEvaluator,
}

impl<'a> Mutator<'a> {
    pub fn new(library: &'a GeneLibrary, evaluator: &'a dyn FitnessEvaluator) -> Self {
        Self { library, evaluator }
    }

    /// Attempt a mutation of a uniformly drawn kind.
    pub fn attempt<R: Rng + ?Sized>(&self, chromosome: &mut Chromosome, rng: &mut R) -> MutationOutcome {
        let kind = MutationKind::random(rng);
        self.attempt_kind(chromosome, kind, rng)
    }

    /// Apply `kind` to a copy, re-score, and keep it iff fitness did not drop.
    pub fn attempt_kind<R: Rng + ?Sized>(
        &self,
        chromosome: &mut Chromosome,
        kind: MutationKind,
        rng: &mut R,
    ) -> MutationOutcome {
        let before = chromosome.fitness();
        let mut candidate = chromosome.clone();
        let changed = candidate.edit_genes(self.evaluator, |genes| self.apply(kind, genes, rng));

        if !changed {
            debug!(chromosome = %chromosome.id(), %kind, "mutation skipped");
            return MutationOutcome {
                kind,
                verdict: MutationVerdict::Skipped,
                fitness_before: before,
                fitness_after: before,
            };
        }

        let after = candidate.fitness();
        let verdict = if after >= before {
            *chromosome = candidate;
            MutationVerdict::Accepted
        } else {
            MutationVerdict::Rejected
        };
        debug!(
            chromosome = %chromosome.id(),
            %kind,
            before = before.value(),
            after = after.value(),
            ?verdict,
            "mutation attempted"
        );

        MutationOutcome {
            kind,
            verdict,
            fitness_before: before,
            fitness_after: after,
        }
    }

    /// Apply `kind` directly to a gene list. Returns `false` on a no-op.
    pub fn apply<R: Rng + ?Sized>(&self, kind: MutationKind, genes: &mut Vec<Gene>, rng: &mut R) -> bool {
        match kind {
            MutationKind::Point => point(genes, rng),
            MutationKind::Insertion => insertion(self.library, genes, rng),
            MutationKind::Deletion => deletion(genes, rng),
            MutationKind::Duplication => duplication(genes, rng),
            MutationKind::Tunneling => tunneling(genes, rng),
        }
    }
}

fn pick<R: Rng + ?Sized>(genes: &[Gene], rng: &mut R) -> Option<usize> {
    if genes.is_empty() {
        None
    } else {
        Some(rng.gen_range(0..genes.len()))
    }
}

fn point<R: Rng + ?Sized>(genes: &mut [Gene], rng: &mut R) -> bool {
    let Some(i) = pick(genes, rng) else {
        return false;
    };
    let factor = rng.gen_range(POINT_FACTOR.0..=POINT_FACTOR.1);
    genes[i].expression = genes[i].expression.scaled(factor);
    true
}

fn insertion<R: Rng + ?Sized>(library: &GeneLibrary, genes: &mut Vec<Gene>, rng: &mut R) -> bool {
    match library.sample(1, rng).pop() {
        Some(gene) => {
            genes.push(gene);
            true
        }
        None => false,
    }
}

fn deletion<R: Rng + ?Sized>(genes: &mut Vec<Gene>, rng: &mut R) -> bool {
    if genes.len() <= 1 {
        return false;
    }
    let i = rng.gen_range(0..genes.len());
    genes.remove(i);
    true
}

fn duplication<R: Rng + ?Sized>(genes: &mut Vec<Gene>, rng: &mut R) -> bool {
    let Some(i) = pick(genes, rng) else {
        return false;
    };
    let copy = genes[i].duplicate(rng);
    genes.push(copy);
    true
}

fn tunneling<R: Rng + ?Sized>(genes: &mut [Gene], rng: &mut R) -> bool {
    let Some(i) = pick(genes, rng) else {
        return false;
    };
    let gene = &mut genes[i];
    gene.expression = UnitInterval::new(rng.gen_range(0.0..=1.0));
    let floor = rng.gen_range(TUNNEL_COHERENCE.0..=TUNNEL_COHERENCE.1);
    gene.coherence = UnitInterval::new(gene.coherence.value().max(floor));
    let factor = rng.gen_range(TUNNEL_CONTRIBUTION_FACTOR.0..=TUNNEL_CONTRIBUTION_FACTOR.1);
    gene.fitness_contribution = gene.fitness_contribution.scaled(factor);
    true
}
