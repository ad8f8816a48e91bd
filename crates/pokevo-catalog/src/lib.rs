//! PokeAPI species catalog client.
//!
//! [`PokeApiCatalog`] implements [`SpeciesCatalog`] over HTTP via `reqwest`.
//! Each lookup is one `GET`; a non-success status, a transport failure, or
//! a body that does not decode into the expected record becomes a
//! [`FetchError`] tagged with the lookup stage. Nothing is retried or cached
//! here.
//!
//! ```text
//! GET {base}/pokemon/{id}/  -->  species.url  -->  evolution_chain.url
//! ```

use std::time::Duration;

use pokevo_core::{FetchError, LookupStage, SpeciesCatalog};
use pokevo_types::{Candidate, EvolutionChainRecord, PokemonRecord, SpeciesRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public PokeAPI v2 base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Connection settings for [`PokeApiCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// API base URL, without the trailing slash (e.g. `https://pokeapi.co/api/v2`).
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }
}

/// Errors building the catalog client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),
}

/// HTTP client for the PokeAPI species catalog.
#[derive(Debug, Clone)]
pub struct PokeApiCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiCatalog {
    /// Create a catalog client.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::Client(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The stage 1 URL for `id`.
    pub fn pokemon_url(&self, id: Candidate) -> String {
        format!("{}/pokemon/{id}/", self.base_url)
    }

    /// `GET url` and decode the body as `T`.
    async fn get_json<T>(&self, stage: LookupStage, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        debug!(%stage, url, "catalog lookup");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                stage,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                stage,
                status: status_text(status),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            stage,
            message: e.to_string(),
        })
    }
}

/// The reason phrase for `status` (e.g. `Not Found`), or the bare code when
/// the status has no canonical reason.
fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or_else(|| status.as_str())
        .to_owned()
}

impl SpeciesCatalog for PokeApiCatalog {
    async fn pokemon(&self, id: Candidate) -> Result<PokemonRecord, FetchError> {
        let url = self.pokemon_url(id);
        self.get_json(LookupStage::Pokemon, &url).await
    }

    async fn species(&self, url: &str) -> Result<SpeciesRecord, FetchError> {
        self.get_json(LookupStage::Species, url).await
    }

    async fn evolution_chain(&self, url: &str) -> Result<EvolutionChainRecord, FetchError> {
        self.get_json(LookupStage::EvolutionChain, url).await
    }
}
