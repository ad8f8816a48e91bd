//! The species identifier sampled on each attempt of the fetch sequence.
//!
//! Candidates are drawn from the closed range of the first-generation
//! catalog partition. A [`Candidate`] can only be built inside that range,
//! so every value handed to a catalog lookup is already valid.

use serde::Serialize;

/// Lowest catalog identifier that may be sampled.
pub const FIRST_CANDIDATE_ID: u16 = 1;

/// Highest catalog identifier that may be sampled.
pub const LAST_CANDIDATE_ID: u16 = 151;

/// Partition tag a species must carry to be accepted (Kanto).
pub const TARGET_GENERATION: &str = "generation-i";

/// A catalog identifier in `FIRST_CANDIDATE_ID..=LAST_CANDIDATE_ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Candidate(u16);

impl Candidate {
    /// The lowest candidate in the range.
    pub const FIRST: Self = Self(FIRST_CANDIDATE_ID);

    /// The highest candidate in the range.
    pub const LAST: Self = Self(LAST_CANDIDATE_ID);

    /// Wrap `id` if it lies in the sampling range.
    pub const fn new(id: u16) -> Option<Self> {
        if id >= FIRST_CANDIDATE_ID && id <= LAST_CANDIDATE_ID {
            Some(Self(id))
        } else {
            None
        }
    }

    /// The raw catalog identifier.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl core::fmt::Display for Candidate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
