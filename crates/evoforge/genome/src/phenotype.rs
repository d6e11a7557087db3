//! Component types and per-type phenotype rendering.

use crate::gene::Gene;
use serde::{Deserialize, Serialize};

/// The four component archetypes a chromosome can encode.
///
/// Each archetype carries a single-letter symbol (`A`, `T`, `C`, `G`) and
/// renders its active genes inside its own module wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentType {
    /// Request-facing surface.
    #[serde(rename = "A")]
    Api,
    /// Data transformation pipeline.
    #[serde(rename = "T")]
    Transform,
    /// State-holding core service.
    #[serde(rename = "C")]
    Core,
    /// Validation and access guard.
    #[serde(rename = "G")]
    Guard,
}

impl ComponentType {
    pub fn all() -> &'static [ComponentType] {
        &[
            ComponentType::Api,
            ComponentType::Transform,
            ComponentType::Core,
            ComponentType::Guard,
        ]
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Api => 'A',
            Self::Transform => 'T',
            Self::Core => 'C',
            Self::Guard => 'G',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Self::Api),
            'T' => Some(Self::Transform),
            'C' => Some(Self::Core),
            'G' => Some(Self::Guard),
            _ => None,
        }
    }

    /// Render `genes` (already filtered to the active ones) as code text.
    pub fn render(&self, label: &str, genes: &[&Gene]) -> String {
        match self {
            Self::Api => render_api(label, genes),
            Self::Transform => render_transform(label, genes),
            Self::Core => render_core(label, genes),
            Self::Guard => render_guard(label, genes),
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Transform => write!(f, "transform"),
            Self::Core => write!(f, "core"),
            Self::Guard => write!(f, "guard"),
        }
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(ty) = Self::from_symbol(c) {
                return Ok(ty);
            }
        }
        match s.to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "transform" => Ok(Self::Transform),
            "core" => Ok(Self::Core),
            "guard" => Ok(Self::Guard),
            other => Err(format!("unknown component type: {}", other)),
        }
    }
}

fn push_indented(out: &mut String, code: &str) {
    for line in code.lines() {
        if line.is_empty() {
            out.push('\n');
        } else {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }
}

fn render_body(out: &mut String, genes: &[&Gene]) {
    for (i, gene) in genes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_indented(out, &gene.code);
    }
}

fn render_api(label: &str, genes: &[&Gene]) -> String {
    let mut out = format!("// [A] api surface {}\n", label);
    out.push_str(&format!("pub mod api_{} {{\n", label));
    render_body(&mut out, genes);
    out.push_str("}\n");
    out
}

fn render_transform(label: &str, genes: &[&Gene]) -> String {
    let mut out = format!("// [T] transform pipeline {} ({} stages)\n", label, genes.len());
    out.push_str(&format!("pub mod transform_{} {{\n", label));
    render_body(&mut out, genes);
    out.push_str("}\n");
    out
}

fn render_core(label: &str, genes: &[&Gene]) -> String {
    let mut out = format!("// [C] core state {}\n", label);
    out.push_str(&format!("pub(crate) mod core_{} {{\n", label));
    render_body(&mut out, genes);
    out.push_str("}\n");
    out
}

fn render_guard(label: &str, genes: &[&Gene]) -> String {
    let mut out = format!("// [G] guard checks {}\n", label);
    out.push_str(&format!("mod guard_{} {{\n", label));
    render_body(&mut out, genes);
    out.push_str("}\n");
    out
}
