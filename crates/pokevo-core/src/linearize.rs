//! Flattening of a branching evolution tree into one line.
//!
//! The walk always descends into the first child. Alternate branches
//! (e.g. Eevee's other evolutions) are dropped without error.

use pokevo_types::{ChainLink, EvolutionPath};

/// Walk `root` by first child until a node has no evolutions.
///
/// The result always starts with the root species. Catalog chains are
/// finite and acyclic, so the walk terminates.
pub fn linearize(root: &ChainLink) -> EvolutionPath {
    let mut path = EvolutionPath::single(root.species.clone());
    let mut current = root;
    while let Some(next) = current.evolves_to.first() {
        path.push(next.species.clone());
        current = next;
    }
    path
}
