//! Shared type definitions for the Pokevo evolution viewer.
//!
//! This crate is the single source of truth for the records exchanged with
//! the species catalog and for the UI state served to the browser. Types
//! defined here flow downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers (fetch generation tokens)
//! - [`candidate`] -- The sampled species identifier and its fixed range
//! - [`catalog`] -- Wire records returned by the three catalog lookups
//! - [`evolution`] -- The linearized evolution path
//! - [`state`] -- The tagged UI state rendered by the presentation layer

pub mod candidate;
pub mod catalog;
pub mod evolution;
pub mod ids;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use candidate::{Candidate, FIRST_CANDIDATE_ID, LAST_CANDIDATE_ID, TARGET_GENERATION};
pub use catalog::{
    ApiResource, ChainLink, EvolutionChainRecord, NamedResource, PokemonRecord, SpeciesRecord,
};
pub use evolution::EvolutionPath;
pub use ids::FetchId;
pub use state::{FETCH_FAILED_MESSAGE, UiState};
