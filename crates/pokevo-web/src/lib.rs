//! Browser UI for the Pokevo evolution viewer.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **HTML page** (`GET /`) rendering the current [`UiState`]: a loading
//!   indicator, the fixed error message, or the sprite list, plus the
//!   "Fetch Evolution" button
//! - **Form action** (`POST /fetch`) starting a new fetch sequence
//! - **JSON API** (`GET /api/state`, `POST /api/fetch`) for scripted clients
//!
//! # Architecture
//!
//! Requests never wait on the catalog. Starting a sequence flips the shared
//! [`EvolutionSession`](pokevo_core::EvolutionSession) to `Loading` and runs
//! the fetch on a background task; the page polls until a terminal state
//! appears.
//!
//! [`UiState`]: pokevo_types::UiState

pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use render::{DEFAULT_SPRITE_BASE_URL, PageRenderer, SpriteView, sprite_views};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
