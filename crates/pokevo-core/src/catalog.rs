//! The lookup seam between the fetch sequence and the species catalog.
//!
//! Implementations perform exactly one request per call and never retry.
//! Any non-success answer is returned as a [`FetchError`] tagged with the
//! stage it happened in.

use core::future::Future;

use pokevo_types::{Candidate, EvolutionChainRecord, PokemonRecord, SpeciesRecord};

use crate::error::FetchError;

/// The three dependent lookups the fetch sequence performs per attempt.
pub trait SpeciesCatalog: Send + Sync {
    /// Stage 1: look up a creature by numeric id.
    fn pokemon(
        &self,
        id: Candidate,
    ) -> impl Future<Output = Result<PokemonRecord, FetchError>> + Send;

    /// Stage 2: follow a species reference.
    fn species(&self, url: &str) -> impl Future<Output = Result<SpeciesRecord, FetchError>> + Send;

    /// Stage 3: follow an evolution chain reference.
    fn evolution_chain(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<EvolutionChainRecord, FetchError>> + Send;
}
