//! Bounded scalar used for every `[0, 1]` quantity in the genome.

use serde::{Deserialize, Serialize};

/// A value clamped into the closed unit interval `[0.0, 1.0]`.
///
/// Construction and every arithmetic helper clamp, so a `UnitInterval`
/// can never hold an out-of-range value. `NaN` collapses to `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct UnitInterval(f64);

impl UnitInterval {
    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiply by `factor`, clamping the product.
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.0 * factor)
    }

    /// Arithmetic mean of the values, `ZERO` for an empty input.
    pub fn mean<I>(values: I) -> Self
    where
        I: IntoIterator<Item = UnitInterval>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), v| (sum + v.0, count + 1));
        if count == 0 {
            return Self::ZERO;
        }
        Self::new(sum / count as f64)
    }
}

impl From<f64> for UnitInterval {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<UnitInterval> for f64 {
    fn from(value: UnitInterval) -> Self {
        value.0
    }
}

impl std::fmt::Display for UnitInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
