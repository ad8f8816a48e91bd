//! Error types for the fetch sequence.
//!
//! Every variant is reported to the user as the same "fetch failed" state.
//! The variants exist so the log carries the actual diagnostic. A species
//! outside the target partition is not an error; it is resampled.

use core::fmt;

/// The catalog lookup a failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LookupStage {
    /// Stage 1: creature by numeric id.
    Pokemon,
    /// Stage 2: species record.
    Species,
    /// Stage 3: evolution chain record.
    EvolutionChain,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pokemon => "pokemon",
            Self::Species => "species",
            Self::EvolutionChain => "evolution chain",
        };
        f.write_str(name)
    }
}

/// Errors that abort a fetch sequence.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("{stage} lookup failed: {message}")]
    Transport {
        /// The stage that failed.
        stage: LookupStage,
        /// Transport diagnostic.
        message: String,
    },

    /// The catalog answered with a non-success status.
    #[error("{stage} lookup returned {status}")]
    Status {
        /// The stage that failed.
        stage: LookupStage,
        /// Status text (e.g. `Not Found`).
        status: String,
    },

    /// The response body did not match the expected record.
    #[error("{stage} lookup returned an unreadable body: {message}")]
    Decode {
        /// The stage that failed.
        stage: LookupStage,
        /// Decoder diagnostic.
        message: String,
    },

    /// The optional attempt bound was reached without a matching species.
    #[error("no matching species after {attempts} attempts")]
    AttemptsExhausted {
        /// Attempts made before giving up.
        attempts: u32,
    },
}

impl FetchError {
    /// The lookup stage that failed, if the failure came from a lookup.
    pub const fn stage(&self) -> Option<LookupStage> {
        match self {
            Self::Transport { stage, .. }
            | Self::Status { stage, .. }
            | Self::Decode { stage, .. } => Some(*stage),
            Self::AttemptsExhausted { .. } => None,
        }
    }
}
