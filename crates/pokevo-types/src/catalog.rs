//! Wire records returned by the species catalog.
//!
//! Only the fields the fetch sequence reads are modelled; serde ignores
//! everything else in the (large) catalog payloads.
//!
//! | Stage | Endpoint | Record |
//! |-------|----------|--------|
//! | 1 | `/pokemon/{id}/` | [`PokemonRecord`] |
//! | 2 | species URL | [`SpeciesRecord`] |
//! | 3 | evolution chain URL | [`EvolutionChainRecord`] |

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NamedResource {
    /// Resource name (e.g. `bulbasaur`, `generation-i`).
    pub name: String,
    /// Canonical URL of the resource.
    pub url: String,
}

impl NamedResource {
    /// Create a reference from a name and URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// The identifier segment of the canonical URL.
    ///
    /// Catalog URLs end with a slash, so the identifier is the
    /// second-to-last `/`-separated segment. The segment is returned as-is;
    /// it is not checked to be numeric.
    pub fn resource_id(&self) -> Option<&str> {
        self.url.rsplit('/').nth(1)
    }
}

/// An unnamed reference to another catalog resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResource {
    /// Canonical URL of the resource.
    pub url: String,
}

/// Stage 1 record: a creature looked up by numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Reference to the species record. Absent references make the
    /// candidate unusable and it is resampled.
    #[serde(default)]
    pub species: Option<NamedResource>,
}

/// Stage 2 record: species details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    /// The generation (catalog partition) the species was introduced in.
    pub generation: NamedResource,
    /// Reference to the evolution chain record.
    pub evolution_chain: ApiResource,
}

impl SpeciesRecord {
    /// Whether this species belongs to the partition named `generation`.
    pub fn in_generation(&self, generation: &str) -> bool {
        self.generation.name == generation
    }
}

/// Stage 3 record: an evolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChainRecord {
    /// Root of the evolution tree.
    pub chain: ChainLink,
}

/// One node of an evolution tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ChainLink {
    /// The species at this node.
    pub species: NamedResource,
    /// Possible evolutions, in catalog order.
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    /// A node with no evolutions.
    pub const fn leaf(species: NamedResource) -> Self {
        Self {
            species,
            evolves_to: Vec::new(),
        }
    }

    /// A node evolving into `evolves_to`.
    pub const fn with_children(species: NamedResource, evolves_to: Vec<Self>) -> Self {
        Self {
            species,
            evolves_to,
        }
    }
}
