//! The UI state driven by the fetch sequence.
//!
//! One tagged union replaces separate loading, error, and result cells, so
//! a view can never observe an error while loading is still set.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

use crate::evolution::EvolutionPath;

/// The only message a failed sequence ever shows to the user.
///
/// The underlying diagnostic goes to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Could not fetch data";

/// What the presentation layer should currently render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UiState {
    /// No sequence has run yet; there is nothing to show.
    #[default]
    Idle,
    /// A sequence is in flight (covering all of its retries).
    Loading,
    /// The most recent sequence failed.
    Error {
        /// User-facing message.
        message: String,
    },
    /// The most recent sequence produced an evolution line.
    Ready {
        /// The linearized evolution line.
        path: EvolutionPath,
        /// When the line was resolved.
        resolved_at: DateTime<Utc>,
    },
}

impl UiState {
    /// The terminal failure state with the fixed user-facing message.
    pub fn fetch_failed() -> Self {
        Self::Error {
            message: FETCH_FAILED_MESSAGE.to_owned(),
        }
    }

    /// A ready state resolved now.
    pub fn ready(path: EvolutionPath) -> Self {
        Self::Ready {
            path,
            resolved_at: Utc::now(),
        }
    }

    /// Whether a sequence is in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Whether this is a terminal state (`Error` or `Ready`).
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Error { .. } | Self::Ready { .. })
    }

    /// The evolution line, if ready.
    pub const fn path(&self) -> Option<&EvolutionPath> {
        match self {
            Self::Ready { path, .. } => Some(path),
            Self::Idle | Self::Loading | Self::Error { .. } => None,
        }
    }
}
