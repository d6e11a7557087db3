//! Component lifecycle stages.

use serde::{Deserialize, Serialize};

/// Position of a component in its lifecycle.
///
/// Progression is strictly forward, one step per generation, and `Elder`
/// is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStage {
    Egg,
    Larva,
    Pupa,
    Adult,
    Breeding,
    Elder,
}

/// Successor of each stage, indexed by ordinal.
const SUCCESSORS: [LifecycleStage; 6] = [
    LifecycleStage::Larva,
    LifecycleStage::Pupa,
    LifecycleStage::Adult,
    LifecycleStage::Breeding,
    LifecycleStage::Elder,
    LifecycleStage::Elder,
];

impl LifecycleStage {
    pub fn all() -> &'static [LifecycleStage] {
        &[
            LifecycleStage::Egg,
            LifecycleStage::Larva,
            LifecycleStage::Pupa,
            LifecycleStage::Adult,
            LifecycleStage::Breeding,
            LifecycleStage::Elder,
        ]
    }

    /// Ordinal value (0-5).
    pub fn ordinal(&self) -> u8 {
        match self {
            Self::Egg => 0,
            Self::Larva => 1,
            Self::Pupa => 2,
            Self::Adult => 3,
            Self::Breeding => 4,
            Self::Elder => 5,
        }
    }

    pub fn next(&self) -> Self {
        SUCCESSORS[self.ordinal() as usize]
    }

    pub fn is_terminal(&self) -> bool {
        self.next() == *self
    }

    /// Whether a component at this stage may be picked as a first-tier parent.
    pub fn can_reproduce(&self) -> bool {
        matches!(self, Self::Adult | Self::Breeding)
    }
}

impl std::fmt::Display for LifecycleStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Egg => write!(f, "egg"),
            Self::Larva => write!(f, "larva"),
            Self::Pupa => write!(f, "pupa"),
            Self::Adult => write!(f, "adult"),
            Self::Breeding => write!(f, "breeding"),
            Self::Elder => write!(f, "elder"),
        }
    }
}
