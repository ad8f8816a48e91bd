//! The linearized evolution line shown to the user.

use serde::Serialize;
use ts_rs::TS;

use crate::catalog::NamedResource;

/// An ordered, non-empty sequence of species references.
///
/// The first element is the root of the evolution chain it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EvolutionPath {
    species: Vec<NamedResource>,
}

impl EvolutionPath {
    /// Build a path, or `None` if `species` is empty.
    pub fn new(species: Vec<NamedResource>) -> Option<Self> {
        if species.is_empty() {
            None
        } else {
            Some(Self { species })
        }
    }

    /// A single-element path.
    pub fn single(root: NamedResource) -> Self {
        Self {
            species: vec![root],
        }
    }

    /// Append the next evolution stage.
    pub fn push(&mut self, next: NamedResource) {
        self.species.push(next);
    }

    /// The root species.
    pub fn first(&self) -> Option<&NamedResource> {
        self.species.first()
    }

    /// All species, root first.
    pub fn species(&self) -> &[NamedResource] {
        &self.species
    }

    /// Number of stages. Never zero.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Always `false`; present for API symmetry with [`EvolutionPath::len`].
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Species names, root first.
    pub fn names(&self) -> Vec<&str> {
        self.species.iter().map(|s| s.name.as_str()).collect()
    }
}
