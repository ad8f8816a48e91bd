//! Shared application state for the web server.
//!
//! [`AppState`] ties the single [`EvolutionSession`] to the fetcher that
//! feeds it. Handlers only read the session or start a new sequence; the
//! sequence itself runs on a background task.

use std::sync::Arc;

use pokevo_core::{EvolutionFetcher, EvolutionSession, SpeciesCatalog};
use pokevo_types::FetchId;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use crate::error::WebError;
use crate::render::PageRenderer;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
pub struct AppState<C> {
    /// The UI state cell rendered by every page.
    pub session: Arc<EvolutionSession>,
    /// The fetch sequence runner.
    pub fetcher: Arc<EvolutionFetcher<C>>,
    /// Compiled page template.
    pub pages: PageRenderer,
    /// Base URL of the sprite repository.
    pub sprite_base_url: String,
}

impl<C> AppState<C>
where
    C: SpeciesCatalog + 'static,
{
    /// Create the application state in the idle state.
    pub fn new(
        fetcher: EvolutionFetcher<C>,
        sprite_base_url: impl Into<String>,
    ) -> Result<Self, WebError> {
        Ok(Self {
            session: Arc::new(EvolutionSession::new()),
            fetcher: Arc::new(fetcher),
            pages: PageRenderer::new()?,
            sprite_base_url: sprite_base_url.into(),
        })
    }

    /// Start a new fetch sequence from a clean state.
    ///
    /// The session is `Loading` by the time this returns. Any sequence
    /// still in flight keeps running but can no longer change the state.
    pub async fn request_new_sequence(&self) -> FetchId {
        let id = self.session.begin().await;
        info!(fetch_id = %id, "starting evolution fetch");

        let session = Arc::clone(&self.session);
        let fetcher = Arc::clone(&self.fetcher);
        tokio::spawn(async move {
            let mut rng = SmallRng::from_os_rng();
            session.run(id, &fetcher, &mut rng).await;
        });

        id
    }
}
