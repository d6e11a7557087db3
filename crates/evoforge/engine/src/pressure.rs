//! Environmental pressures: probabilistic population-wide fitness boosts.

use evoforge_genome::Component;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default firing probability per generation.
pub const DEFAULT_PRESSURE_PROBABILITY: f64 = 0.3;

/// What a pressure rewards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressureKind {
    /// Aggregate fitness above 0.8.
    Performance,
    /// Mean gene coherence above 0.7.
    Coherence,
    /// Fewer than four genes in total.
    Simplicity,
    /// At least one accepted mutation.
    Adaptability,
}

impl PressureKind {
    pub fn all() -> &'static [PressureKind] {
        &[
            PressureKind::Performance,
            PressureKind::Coherence,
            PressureKind::Simplicity,
            PressureKind::Adaptability,
        ]
    }

    pub fn default_boost(&self) -> f64 {
        match self {
            Self::Performance => 1.05,
            Self::Coherence => 1.03,
            Self::Simplicity => 1.02,
            Self::Adaptability => 1.04,
        }
    }

    /// Whether `component` is rewarded when this pressure fires.
    pub fn matches(&self, component: &Component) -> bool {
        match self {
            Self::Performance => component.fitness().value() > 0.8,
            Self::Coherence => component.mean_coherence().value() > 0.7,
            Self::Simplicity => component.gene_count() < 4,
            Self::Adaptability => component.mutation_count() > 0,
        }
    }
}

impl std::fmt::Display for PressureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Performance => write!(f, "performance"),
            Self::Coherence => write!(f, "coherence"),
            Self::Simplicity => write!(f, "simplicity"),
            Self::Adaptability => write!(f, "adaptability"),
        }
    }
}

/// A configured pressure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalPressure {
    pub kind: PressureKind,
    /// Chance of firing in a given generation.
    #[serde(default = "default_probability")]
    pub probability: f64,
    /// Multiplier applied to matching components' aggregate fitness.
    pub boost: f64,
}

fn default_probability() -> f64 {
    DEFAULT_PRESSURE_PROBABILITY
}

impl EnvironmentalPressure {
    pub fn new(kind: PressureKind) -> Self {
        Self {
            kind,
            probability: DEFAULT_PRESSURE_PROBABILITY,
            boost: kind.default_boost(),
        }
    }

    /// The four built-in pressures at their default probability and boost.
    pub fn defaults() -> Vec<Self> {
        PressureKind::all().iter().copied().map(Self::new).collect()
    }

    /// Roll once for this generation.
    pub fn fires<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(self.probability.clamp(0.0, 1.0))
    }

    /// Boost every matching component. Returns how many were boosted.
    pub fn apply<'a, I>(&self, components: I) -> usize
    where
        I: IntoIterator<Item = &'a mut Component>,
    {
        let mut boosted = 0;
        for component in components {
            if self.kind.matches(component) {
                component.apply_boost(self.boost);
                boosted += 1;
            }
        }
        boosted
    }
}
