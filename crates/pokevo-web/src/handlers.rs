//! HTTP endpoint handlers for the viewer.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Viewer page for the current state |
//! | `POST` | `/fetch` | Start a new sequence, redirect to `/` |
//! | `GET` | `/api/state` | Current state and sprite list as JSON |
//! | `POST` | `/api/fetch` | Start a new sequence, `202 Accepted` |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect};
use pokevo_core::SpeciesCatalog;
use pokevo_types::{FetchId, UiState};

use crate::error::WebError;
use crate::render::{SpriteView, sprite_views};
use crate::state::AppState;

/// Body of `GET /api/state`.
#[derive(Debug, serde::Serialize)]
pub struct StateResponse {
    /// The current UI state.
    pub state: UiState,
    /// Sprites for the ready path; empty in every other state.
    pub sprites: Vec<SpriteView>,
    /// Token of the sequence in flight, if any.
    pub in_flight: Option<FetchId>,
}

/// Body of `POST /api/fetch`.
#[derive(Debug, serde::Serialize)]
pub struct FetchAccepted {
    /// Token of the sequence just started.
    pub fetch_id: FetchId,
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Serve the viewer page for the current state.
pub async fn index<C>(State(state): State<Arc<AppState<C>>>) -> Result<Html<String>, WebError>
where
    C: SpeciesCatalog + 'static,
{
    let ui = state.session.state().await;
    let page = state.pages.render(&ui, &state.sprite_base_url)?;
    Ok(Html(page))
}

/// The "Fetch Evolution" button: start a sequence and show the page.
pub async fn fetch_form<C>(State(state): State<Arc<AppState<C>>>) -> Redirect
where
    C: SpeciesCatalog + 'static,
{
    state.request_new_sequence().await;
    Redirect::to("/")
}

// ---------------------------------------------------------------------------
// JSON API
// ---------------------------------------------------------------------------

/// Return the current state with its derived sprite list.
pub async fn get_state<C>(State(state): State<Arc<AppState<C>>>) -> Json<StateResponse>
where
    C: SpeciesCatalog + 'static,
{
    let ui = state.session.state().await;
    let in_flight = state.session.in_flight().await;
    let sprites = ui
        .path()
        .map(|path| sprite_views(path, &state.sprite_base_url))
        .unwrap_or_default();

    Json(StateResponse {
        state: ui,
        sprites,
        in_flight,
    })
}

/// Start a new sequence and return its token.
pub async fn start_fetch<C>(State(state): State<Arc<AppState<C>>>) -> impl IntoResponse
where
    C: SpeciesCatalog + 'static,
{
    let fetch_id = state.request_new_sequence().await;
    (StatusCode::ACCEPTED, Json(FetchAccepted { fetch_id }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound(format!("no route for {uri}"))
}
