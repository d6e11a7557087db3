//! Identifiers for genes, chromosomes and components.
//!
//! Ids are UUID strings whose bytes come from the caller's random source,
//! so a seeded run always produces the same ids.

use rand::Rng;
use serde::{Deserialize, Serialize};

macro_rules! random_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            /// Draw a fresh id from `rng`.
            pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                let bytes: [u8; 16] = rng.gen();
                Self(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First eight characters, used in rendered labels.
            pub fn short(&self) -> &str {
                self.0.get(..8).unwrap_or(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

random_id!(
    /// Unique identifier for a gene.
    GeneId
);

random_id!(
    /// Unique identifier for a chromosome.
    ChromosomeId
);

random_id!(
    /// Unique identifier for a component.
    ComponentId
);
