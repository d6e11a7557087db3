//! Read-only catalog of gene templates.

use crate::gene::{Gene, GeneKind};
use crate::ids::GeneId;
use rand::seq::index;
use rand::Rng;

/// Lower bound of the multiplicative expression jitter applied on sampling.
pub const SAMPLE_JITTER_MIN: f64 = 0.8;
/// Upper bound of the multiplicative expression jitter applied on sampling.
pub const SAMPLE_JITTER_MAX: f64 = 1.2;

/// Canonical gene templates. Sampling only ever hands out copies.
///
/// A library is immutable after construction and can be shared between
/// controllers behind an `Arc`.
#[derive(Clone, Debug)]
pub struct GeneLibrary {
    templates: Vec<Gene>,
}

impl GeneLibrary {
    pub fn new(templates: Vec<Gene>) -> Self {
        Self { templates }
    }

    /// The built-in catalog: twelve templates covering every gene kind.
    pub fn canonical() -> Self {
        let t = |id: &str, kind: GeneKind, code: &str, expr: f64, contrib: f64, coh: f64, aff: f64| {
            Gene::new(GeneId::from(id), kind, code)
                .with_expression(expr)
                .with_fitness_contribution(contrib)
                .with_coherence(coh)
                .with_mutation_affinity(aff)
        };

        Self::new(vec![
            t(
                "tpl-normalize",
                GeneKind::Function,
                "/// Normalizes raw input.\nfn normalize(input: &str) -> String {\n    input.trim().to_lowercase()\n}",
                0.8,
                0.6,
                0.85,
                0.10,
            ),
            t(
                "tpl-checksum",
                GeneKind::Function,
                "fn checksum(bytes: &[u8]) -> u32 {\n    bytes.iter().map(|b| *b as u32).sum()\n}",
                0.7,
                0.5,
                0.75,
                0.15,
            ),
            t(
                "tpl-retry",
                GeneKind::Function,
                "/// Retries an operation a bounded number of times.\nfn retry<T>(mut op: impl FnMut() -> Option<T>, attempts: usize) -> Option<T> {\n    (0..attempts).find_map(|_| op())\n}",
                0.6,
                0.7,
                0.7,
                0.20,
            ),
            t(
                "tpl-queue",
                GeneKind::Class,
                "/// Bounded work queue.\npub struct Queue {\n    items: Vec<String>,\n    capacity: usize,\n}",
                0.75,
                0.55,
                0.8,
                0.10,
            ),
            t(
                "tpl-status",
                GeneKind::Class,
                "pub enum Status {\n    Ready,\n    Busy,\n    Failed(String),\n}",
                0.65,
                0.4,
                0.9,
                0.05,
            ),
            t(
                "tpl-handler",
                GeneKind::Class,
                "pub trait Handler {\n    fn handle(&self, request: &str) -> String;\n}",
                0.7,
                0.6,
                0.8,
                0.10,
            ),
            t(
                "tpl-queue-push",
                GeneKind::Method,
                "impl Queue {\n    fn push(&mut self, item: String) -> bool {\n        if self.items.len() >= self.capacity {\n            return false;\n        }\n        self.items.push(item);\n        true\n    }\n}",
                0.6,
                0.65,
                0.7,
                0.25,
            ),
            t(
                "tpl-queue-len",
                GeneKind::Method,
                "impl Queue {\n    fn len(&self) -> usize {\n        self.items.len()\n    }\n}",
                0.5,
                0.3,
                0.85,
                0.15,
            ),
            t(
                "tpl-max-retries",
                GeneKind::Parameter,
                "const MAX_RETRIES: usize = 3;",
                0.5,
                0.2,
                0.6,
                0.30,
            ),
            t(
                "tpl-timeout",
                GeneKind::Parameter,
                "const TIMEOUT_MS: u64 = 250;",
                0.45,
                0.2,
                0.55,
                0.30,
            ),
            t(
                "tpl-hashmap",
                GeneKind::Import,
                "use std::collections::HashMap;",
                0.4,
                0.1,
                0.65,
                0.05,
            ),
            t(
                "tpl-fmt",
                GeneKind::Import,
                "use std::fmt;",
                0.35,
                0.1,
                0.6,
                0.05,
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn templates(&self) -> &[Gene] {
        &self.templates
    }

    /// Draw `n` template copies with fresh ids and jittered expression.
    ///
    /// Draws are without replacement while `n` fits in the catalog and with
    /// replacement otherwise. An empty library yields nothing.
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Gene> {
        if self.templates.is_empty() {
            return Vec::new();
        }

        let picks: Vec<usize> = if n <= self.templates.len() {
            index::sample(rng, self.templates.len(), n).into_vec()
        } else {
            (0..n).map(|_| rng.gen_range(0..self.templates.len())).collect()
        };

        picks
            .into_iter()
            .map(|i| {
                let mut gene = self.templates[i].duplicate(rng);
                let jitter = rng.gen_range(SAMPLE_JITTER_MIN..=SAMPLE_JITTER_MAX);
                gene.expression = gene.expression.scaled(jitter);
                gene
            })
            .collect()
    }
}

impl Default for GeneLibrary {
    fn default() -> Self {
        Self::canonical()
    }
}
