#![deny(unsafe_code)]
//! # evoforge-fitness
//!
//! Pure chromosome scoring. The composite score is the mean of five
//! independent sub-scores, each in `[0, 1]`:
//!
//! | Sub-score | Definition |
//! |-----------|------------|
//! | gene count | `min(n / 8, 1)` |
//! | expression diversity | population variance of expression levels over `0.25`, capped |
//! | coherence | mean gene coherence |
//! | structural quality | `0.5` plus increments for type, callable, doc and length heuristics |
//! | functionality | `min(Σ contribution × expression, 1)` |

pub mod evaluator;
pub mod heuristics;

pub use evaluator::{CompositeEvaluator, FitnessBreakdown, GENE_COUNT_CAP};
pub use heuristics::StructureReport;
