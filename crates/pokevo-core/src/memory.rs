//! An in-memory [`SpeciesCatalog`].
//!
//! Records live in maps keyed the way the real catalog addresses them: by
//! numeric id for stage 1 and by URL for stages 2 and 3. A stage can be
//! forced to fail with a status text, and every lookup is recorded so tests
//! can check the call sequence.

use std::collections::BTreeMap;
use std::sync::Mutex;

use pokevo_types::{
    ApiResource, Candidate, ChainLink, EvolutionChainRecord, NamedResource, PokemonRecord,
    SpeciesRecord,
};

use crate::catalog::SpeciesCatalog;
use crate::error::{FetchError, LookupStage};

/// URL prefix used for records created by the builder methods.
const MEMORY_BASE_URL: &str = "memory://catalog";

/// Status text returned for ids and URLs the catalog does not hold.
const NOT_FOUND: &str = "Not Found";

/// One recorded lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupCall {
    /// Which stage was called.
    pub stage: LookupStage,
    /// The id (stage 1) or URL (stages 2 and 3) requested.
    pub key: String,
}

/// In-memory catalog for tests.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    pokemon: BTreeMap<u16, PokemonRecord>,
    species: BTreeMap<String, SpeciesRecord>,
    chains: BTreeMap<String, EvolutionChainRecord>,
    failures: BTreeMap<LookupStage, String>,
    calls: Mutex<Vec<LookupCall>>,
}

impl InMemoryCatalog {
    /// An empty catalog. Every lookup fails with `Not Found`.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical species URL for `id`.
    pub fn species_url(id: u16) -> String {
        format!("{MEMORY_BASE_URL}/pokemon-species/{id}/")
    }

    /// The canonical evolution chain URL for `id`.
    pub fn chain_url(id: u16) -> String {
        format!("{MEMORY_BASE_URL}/evolution-chain/{id}/")
    }

    /// A species reference as the catalog would return it.
    pub fn species_ref(name: &str, id: u16) -> NamedResource {
        NamedResource::new(name, Self::species_url(id))
    }

    /// Add creature `id` whose species is in `generation` and whose
    /// evolution chain (stored under chain id `chain_id`) is `chain`.
    #[must_use]
    pub fn with_species(
        mut self,
        id: u16,
        name: &str,
        generation: &str,
        chain_id: u16,
        chain: ChainLink,
    ) -> Self {
        let species_url = Self::species_url(id);
        let chain_url = Self::chain_url(chain_id);
        self.pokemon.insert(
            id,
            PokemonRecord {
                species: Some(NamedResource::new(name, species_url.clone())),
            },
        );
        self.species.insert(
            species_url,
            SpeciesRecord {
                generation: NamedResource::new(
                    generation,
                    format!("{MEMORY_BASE_URL}/generation/{generation}/"),
                ),
                evolution_chain: ApiResource {
                    url: chain_url.clone(),
                },
            },
        );
        self.chains.insert(chain_url, EvolutionChainRecord { chain });
        self
    }

    /// Add creature `id` with no species reference.
    #[must_use]
    pub fn with_speciesless(mut self, id: u16) -> Self {
        self.pokemon.insert(id, PokemonRecord { species: None });
        self
    }

    /// Make every lookup at `stage` fail with `status`.
    #[must_use]
    pub fn failing_at(mut self, stage: LookupStage, status: &str) -> Self {
        self.failures.insert(stage, status.to_owned());
        self
    }

    /// All lookups performed so far, in order.
    pub fn calls(&self) -> Vec<LookupCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of lookups performed at `stage`.
    pub fn call_count(&self, stage: LookupStage) -> usize {
        self.calls().iter().filter(|c| c.stage == stage).count()
    }

    fn record(&self, stage: LookupStage, key: String) -> Result<(), FetchError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(LookupCall { stage, key });
        }
        match self.failures.get(&stage) {
            Some(status) => Err(FetchError::Status {
                stage,
                status: status.clone(),
            }),
            None => Ok(()),
        }
    }

    fn not_found(stage: LookupStage) -> FetchError {
        FetchError::Status {
            stage,
            status: NOT_FOUND.to_owned(),
        }
    }
}

impl SpeciesCatalog for InMemoryCatalog {
    async fn pokemon(&self, id: Candidate) -> Result<PokemonRecord, FetchError> {
        self.record(LookupStage::Pokemon, id.to_string())?;
        self.pokemon
            .get(&id.get())
            .cloned()
            .ok_or_else(|| Self::not_found(LookupStage::Pokemon))
    }

    async fn species(&self, url: &str) -> Result<SpeciesRecord, FetchError> {
        self.record(LookupStage::Species, url.to_owned())?;
        self.species
            .get(url)
            .cloned()
            .ok_or_else(|| Self::not_found(LookupStage::Species))
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChainRecord, FetchError> {
        self.record(LookupStage::EvolutionChain, url.to_owned())?;
        self.chains
            .get(url)
            .cloned()
            .ok_or_else(|| Self::not_found(LookupStage::EvolutionChain))
    }
}
