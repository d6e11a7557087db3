//! Genes: atomic code-fragment descriptors.

use crate::ids::GeneId;
use crate::unit::UnitInterval;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Expression level a gene must exceed to appear in a rendered phenotype.
pub const ACTIVATION_THRESHOLD: f64 = 0.1;

/// The syntactic role of a gene's code fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneKind {
    Function,
    Class,
    Method,
    Parameter,
    Import,
}

impl GeneKind {
    pub fn all() -> &'static [GeneKind] {
        &[
            GeneKind::Function,
            GeneKind::Class,
            GeneKind::Method,
            GeneKind::Parameter,
            GeneKind::Import,
        ]
    }
}

impl std::fmt::Display for GeneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Function => write!(f, "function"),
            Self::Class => write!(f, "class"),
            Self::Method => write!(f, "method"),
            Self::Parameter => write!(f, "parameter"),
            Self::Import => write!(f, "import"),
        }
    }
}

/// One code fragment plus the numeric traits the evaluator reads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub id: GeneId,
    pub kind: GeneKind,
    pub code: String,
    /// How strongly the gene manifests in the phenotype.
    pub expression: UnitInterval,
    /// Relative susceptibility to mutation. Informational only.
    pub mutation_affinity: f64,
    pub fitness_contribution: UnitInterval,
    /// Generations the gene has lived through.
    pub age: u32,
    pub coherence: UnitInterval,
}

impl Gene {
    pub fn new(id: GeneId, kind: GeneKind, code: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            code: code.into(),
            expression: UnitInterval::new(0.5),
            mutation_affinity: 0.1,
            fitness_contribution: UnitInterval::new(0.5),
            age: 0,
            coherence: UnitInterval::new(0.5),
        }
    }

    pub fn with_expression(mut self, expression: f64) -> Self {
        self.expression = UnitInterval::new(expression);
        self
    }

    pub fn with_fitness_contribution(mut self, contribution: f64) -> Self {
        self.fitness_contribution = UnitInterval::new(contribution);
        self
    }

    pub fn with_coherence(mut self, coherence: f64) -> Self {
        self.coherence = UnitInterval::new(coherence);
        self
    }

    pub fn with_mutation_affinity(mut self, affinity: f64) -> Self {
        self.mutation_affinity = affinity.max(0.0);
        self
    }

    /// Whether the gene manifests in rendered output.
    pub fn is_active(&self) -> bool {
        self.expression.value() > ACTIVATION_THRESHOLD
    }

    /// Identical contents under a fresh id.
    pub fn duplicate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            id: GeneId::random(rng),
            ..self.clone()
        }
    }
}
