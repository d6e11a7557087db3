//! Structural heuristics over rendered phenotype text.

use serde::{Deserialize, Serialize};

/// Baseline structural score before any heuristic is satisfied.
pub const STRUCTURE_BASE: f64 = 0.5;
/// Increment for a type construct (`struct`, `enum` or `trait`).
pub const TYPE_CONSTRUCT_BONUS: f64 = 0.15;
/// Increment for a callable (`fn`).
pub const CALLABLE_BONUS: f64 = 0.15;
/// Increment for a `///` documentation line.
pub const DOC_BONUS: f64 = 0.1;
/// Increment for reaching [`MIN_LINES`].
pub const LENGTH_BONUS: f64 = 0.1;
/// Minimum rendered line count for the length bonus.
pub const MIN_LINES: usize = 8;

/// Which structural heuristics a phenotype satisfies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureReport {
    pub has_type_construct: bool,
    pub has_callable: bool,
    pub has_doc: bool,
    pub meets_min_lines: bool,
}

impl StructureReport {
    pub fn inspect(phenotype: &str) -> Self {
        let mut report = Self::default();
        let mut lines = 0usize;

        for line in phenotype.lines() {
            lines += 1;
            let trimmed = line.trim_start();
            if trimmed.starts_with("///") {
                report.has_doc = true;
                continue;
            }
            if trimmed.starts_with("//") {
                continue;
            }
            for token in trimmed.split(|c: char| !(c.is_alphanumeric() || c == '_')) {
                match token {
                    "struct" | "enum" | "trait" => report.has_type_construct = true,
                    "fn" => report.has_callable = true,
                    _ => {}
                }
            }
        }

        report.meets_min_lines = lines >= MIN_LINES;
        report
    }

    /// Base score plus satisfied increments, capped at 1.0.
    pub fn score(&self) -> f64 {
        let mut score = STRUCTURE_BASE;
        if self.has_type_construct {
            score += TYPE_CONSTRUCT_BONUS;
        }
        if self.has_callable {
            score += CALLABLE_BONUS;
        }
        if self.has_doc {
            score += DOC_BONUS;
        }
        if self.meets_min_lines {
            score += LENGTH_BONUS;
        }
        score.min(1.0)
    }
}
