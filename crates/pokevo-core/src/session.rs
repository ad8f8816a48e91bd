//! The single UI state cell and its generation token.
//!
//! [`EvolutionSession`] owns the [`UiState`] the presentation layer renders.
//! Every invocation of the fetch sequence gets a fresh [`FetchId`]; only the
//! most recent invocation may write a terminal state. Completions from
//! superseded invocations are logged and dropped, so a slow earlier run can
//! never overwrite a newer result.

use pokevo_types::{EvolutionPath, FetchId, UiState};
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::catalog::SpeciesCatalog;
use crate::error::FetchError;
use crate::fetcher::EvolutionFetcher;

#[derive(Debug, Default)]
struct SessionInner {
    state: UiState,
    in_flight: Option<FetchId>,
}

/// Shared UI state for one viewer.
///
/// State changes replace the whole [`UiState`] under one write lock, so
/// readers never observe a half-applied transition.
#[derive(Debug, Default)]
pub struct EvolutionSession {
    inner: RwLock<SessionInner>,
}

impl EvolutionSession {
    /// Create a session in the [`UiState::Idle`] state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the current state.
    pub async fn state(&self) -> UiState {
        self.inner.read().await.state.clone()
    }

    /// Whether a sequence is currently in flight.
    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.state.is_loading()
    }

    /// The token of the invocation allowed to complete, if any.
    pub async fn in_flight(&self) -> Option<FetchId> {
        self.inner.read().await.in_flight
    }

    /// Start a new invocation.
    ///
    /// The state becomes [`UiState::Loading`] immediately, whatever it was
    /// before, and any earlier in-flight invocation is superseded.
    pub async fn begin(&self) -> FetchId {
        let id = FetchId::new();
        let mut inner = self.inner.write().await;
        if let Some(previous) = inner.in_flight.replace(id) {
            debug!(superseded = %previous, fetch_id = %id, "superseding in-flight fetch");
        }
        inner.state = UiState::Loading;
        id
    }

    /// Apply the outcome of invocation `id`.
    ///
    /// Failures are logged with their diagnostic and collapse to the fixed
    /// user-facing error. Returns `false` (and leaves the state alone) when
    /// `id` is no longer the current invocation.
    pub async fn complete(
        &self,
        id: FetchId,
        outcome: Result<EvolutionPath, FetchError>,
    ) -> bool {
        if let Err(e) = &outcome {
            error!(fetch_id = %id, error = %e, "evolution fetch failed");
        }

        let mut inner = self.inner.write().await;
        if inner.in_flight != Some(id) {
            info!(fetch_id = %id, "discarding result of superseded fetch");
            return false;
        }

        inner.in_flight = None;
        inner.state = match outcome {
            Ok(path) => UiState::ready(path),
            Err(_) => UiState::fetch_failed(),
        };
        true
    }

    /// Run invocation `id` to completion and apply its outcome.
    ///
    /// `id` must come from [`EvolutionSession::begin`]. Returns whether the
    /// outcome was applied.
    pub async fn run<C, R>(
        &self,
        id: FetchId,
        fetcher: &EvolutionFetcher<C>,
        rng: &mut R,
    ) -> bool
    where
        C: SpeciesCatalog,
        R: Rng,
    {
        let outcome = fetcher.fetch(rng).await;
        self.complete(id, outcome).await
    }

    /// Begin a new invocation and run it to completion.
    pub async fn refresh<C, R>(&self, fetcher: &EvolutionFetcher<C>, rng: &mut R) -> FetchId
    where
        C: SpeciesCatalog,
        R: Rng,
    {
        let id = self.begin().await;
        self.run(id, fetcher, rng).await;
        id
    }
}
