//! Axum router construction for the viewer.
//!
//! Assembles the page and JSON routes into a single [`Router`] with CORS
//! and request tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use pokevo_core::SpeciesCatalog;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- viewer page
/// - `POST /fetch` -- "Fetch Evolution" form action
/// - `GET /api/state` -- current state as JSON
/// - `POST /api/fetch` -- start a new sequence
///
/// CORS allows any origin so a separately hosted front end can use the
/// JSON API.
pub fn build_router<C>(state: Arc<AppState<C>>) -> Router
where
    C: SpeciesCatalog + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Page
        .route("/", get(handlers::index::<C>))
        .route("/fetch", post(handlers::fetch_form::<C>))
        // JSON API
        .route("/api/state", get(handlers::get_state::<C>))
        .route("/api/fetch", post(handlers::start_fetch::<C>))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
