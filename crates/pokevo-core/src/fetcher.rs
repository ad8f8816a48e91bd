//! The retry-until-match fetch sequence.
//!
//! Each attempt samples a [`Candidate`], resolves it to a species record,
//! and checks the species' generation. A mismatch discards the candidate
//! and samples again; any lookup failure aborts the whole sequence. The
//! first matching species has its evolution chain resolved and linearized.

use pokevo_types::{
    Candidate, EvolutionPath, FIRST_CANDIDATE_ID, LAST_CANDIDATE_ID, TARGET_GENERATION,
};
use rand::Rng;
use tracing::{debug, info};

use crate::catalog::SpeciesCatalog;
use crate::error::FetchError;
use crate::linearize::linearize;

/// Tunables for the fetch sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Generation tag a species must carry to be accepted.
    pub target_generation: String,
    /// Upper bound on attempts per sequence. `None` retries forever.
    ///
    /// Setting a bound changes behavior: a sequence that would eventually
    /// have matched can now fail with [`FetchError::AttemptsExhausted`].
    pub max_attempts: Option<u32>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            target_generation: TARGET_GENERATION.to_owned(),
            max_attempts: None,
        }
    }
}

/// Outcome of resolving one candidate.
enum Attempt {
    /// The candidate's species is in the target generation; carries the
    /// evolution chain URL.
    Matched(String),
    /// The candidate is unusable and must be resampled.
    Rejected,
}

/// Runs the fetch sequence against a [`SpeciesCatalog`].
///
/// The fetcher holds no per-sequence state, so one instance can serve any
/// number of independent invocations.
#[derive(Debug)]
pub struct EvolutionFetcher<C> {
    catalog: C,
    settings: FetchSettings,
}

impl<C: SpeciesCatalog> EvolutionFetcher<C> {
    /// Create a fetcher over `catalog`.
    pub const fn new(catalog: C, settings: FetchSettings) -> Self {
        Self { catalog, settings }
    }

    /// The underlying catalog.
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// The active settings.
    pub const fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Produce one evolution line from the target generation.
    ///
    /// Lookups within an attempt, and attempts themselves, run strictly
    /// one after another.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] raised by any lookup, or
    /// [`FetchError::AttemptsExhausted`] when `max_attempts` is set and
    /// reached.
    pub async fn fetch<R>(&self, rng: &mut R) -> Result<EvolutionPath, FetchError>
    where
        R: Rng,
    {
        let mut attempts: u32 = 0;
        loop {
            if let Some(max) = self.settings.max_attempts {
                if attempts >= max {
                    return Err(FetchError::AttemptsExhausted { attempts });
                }
            }
            attempts = attempts.saturating_add(1);

            let candidate = sample_candidate(rng);
            debug!(attempt = attempts, candidate = %candidate, "sampled candidate");

            match self.attempt(candidate).await? {
                Attempt::Rejected => {}
                Attempt::Matched(chain_url) => {
                    let chain = self.catalog.evolution_chain(&chain_url).await?;
                    let path = linearize(&chain.chain);
                    info!(
                        attempts,
                        candidate = %candidate,
                        evolution = ?path.names(),
                        "resolved evolution line"
                    );
                    return Ok(path);
                }
            }
        }
    }

    /// Resolve `candidate` through stages 1 and 2.
    async fn attempt(&self, candidate: Candidate) -> Result<Attempt, FetchError> {
        let pokemon = self.catalog.pokemon(candidate).await?;
        let Some(species_ref) = pokemon.species else {
            debug!(candidate = %candidate, "record has no species reference, resampling");
            return Ok(Attempt::Rejected);
        };

        let species = self.catalog.species(&species_ref.url).await?;
        if species.in_generation(&self.settings.target_generation) {
            Ok(Attempt::Matched(species.evolution_chain.url))
        } else {
            debug!(
                candidate = %candidate,
                species = species_ref.name,
                generation = species.generation.name,
                "species outside target generation, resampling"
            );
            Ok(Attempt::Rejected)
        }
    }
}

/// Draw a candidate uniformly from the sampling range.
pub fn sample_candidate<R>(rng: &mut R) -> Candidate
where
    R: Rng,
{
    let id = rng.random_range(FIRST_CANDIDATE_ID..=LAST_CANDIDATE_ID);
    // The drawn id is always inside the candidate range.
    Candidate::new(id).unwrap_or(Candidate::FIRST)
}
