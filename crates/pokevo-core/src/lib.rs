//! Evolution fetch sequence and UI session state for Pokevo.
//!
//! This crate holds the logic behind the viewer; everything it needs from
//! the outside world comes in through the [`SpeciesCatalog`] trait and an
//! injected random source.
//!
//! # Architecture
//!
//! ```text
//! rng --> Candidate --> pokemon --> species --(generation-i?)--> evolution chain --> linearize
//!            ^                          |
//!            +------- resample ---------+
//! ```
//!
//! - [`fetcher`] -- the retry-until-match sequence ([`EvolutionFetcher`])
//! - [`linearize`] -- first-child flattening of an evolution tree
//! - [`session`] -- the single [`UiState`](pokevo_types::UiState) cell and
//!   its generation token
//! - [`catalog`] -- the lookup trait
//! - `memory` -- an in-memory catalog for tests (`test-support` feature)

pub mod catalog;
pub mod error;
pub mod fetcher;
pub mod linearize;
#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod session;

pub use catalog::SpeciesCatalog;
pub use error::{FetchError, LookupStage};
pub use fetcher::{EvolutionFetcher, FetchSettings, sample_candidate};
pub use linearize::linearize;
#[cfg(any(test, feature = "test-support"))]
pub use memory::InMemoryCatalog;
pub use session::EvolutionSession;
