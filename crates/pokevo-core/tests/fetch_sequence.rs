//! Integration tests for the fetch sequence and session state.
//!
//! Catalogs are built in memory and the random source is a seeded
//! `SmallRng`, so every run samples the same candidates.

#![allow(clippy::unwrap_used)]

use pokevo_core::{
    EvolutionFetcher, EvolutionSession, FetchError, FetchSettings, InMemoryCatalog, LookupStage,
};
use pokevo_types::{ChainLink, FETCH_FAILED_MESSAGE, UiState};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// 151 creatures where only id 1 (with a three-stage chain) is Kanto.
fn single_kanto_catalog() -> InMemoryCatalog {
    let bulbasaur_line = ChainLink::with_children(
        InMemoryCatalog::species_ref("bulbasaur", 1),
        vec![ChainLink::with_children(
            InMemoryCatalog::species_ref("ivysaur", 2),
            vec![ChainLink::leaf(InMemoryCatalog::species_ref("venusaur", 3))],
        )],
    );
    let mut catalog = InMemoryCatalog::new().with_species(
        1,
        "bulbasaur",
        "generation-i",
        1,
        bulbasaur_line,
    );
    for id in 2..=151_u16 {
        let name = format!("other-{id}");
        catalog = catalog.with_species(
            id,
            &name,
            "generation-ii",
            id,
            ChainLink::leaf(InMemoryCatalog::species_ref(&name, id)),
        );
    }
    catalog
}

/// 151 creatures, all Kanto, each with a single-species chain.
fn all_kanto_catalog() -> InMemoryCatalog {
    (1..=151_u16).fold(InMemoryCatalog::new(), |catalog, id| {
        let name = format!("kanto-{id}");
        catalog.with_species(
            id,
            &name,
            "generation-i",
            id,
            ChainLink::leaf(InMemoryCatalog::species_ref(&name, id)),
        )
    })
}

#[tokio::test]
async fn mismatched_generations_are_resampled_until_match() {
    let fetcher = EvolutionFetcher::new(single_kanto_catalog(), FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(42);

    let path = fetcher.fetch(&mut rng).await.unwrap();
    assert_eq!(path.names(), vec!["bulbasaur", "ivysaur", "venusaur"]);

    let catalog = fetcher.catalog();
    // Exactly one chain lookup, for the only matching species.
    assert_eq!(catalog.call_count(LookupStage::EvolutionChain), 1);
    let chain_call = catalog
        .calls()
        .into_iter()
        .find(|c| c.stage == LookupStage::EvolutionChain)
        .unwrap();
    assert_eq!(chain_call.key, InMemoryCatalog::chain_url(1));

    // Every attempt before the last one was a non-matching candidate.
    let pokemon_calls: Vec<String> = catalog
        .calls()
        .into_iter()
        .filter(|c| c.stage == LookupStage::Pokemon)
        .map(|c| c.key)
        .collect();
    let (last, earlier) = pokemon_calls.split_last().unwrap();
    assert_eq!(last, "1");
    assert!(earlier.iter().all(|id| id != "1"));
}

#[tokio::test]
async fn repeated_invocations_always_resolve_to_the_kanto_line() {
    let fetcher = EvolutionFetcher::new(single_kanto_catalog(), FetchSettings::default());
    for seed in 0..25_u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let path = fetcher.fetch(&mut rng).await.unwrap();
        assert_eq!(path.first().unwrap().name, "bulbasaur");
    }
}

#[tokio::test]
async fn path_starts_with_chain_root() {
    let fetcher = EvolutionFetcher::new(all_kanto_catalog(), FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(3);

    let path = fetcher.fetch(&mut rng).await.unwrap();
    assert!(!path.species().is_empty());

    let catalog = fetcher.catalog();
    let pokemon_call = catalog.calls().into_iter().next().unwrap();
    let root = path.first().unwrap();
    assert_eq!(root.resource_id(), Some(pokemon_call.key.as_str()));
    // First attempt matched: one lookup per stage.
    assert_eq!(catalog.call_count(LookupStage::Pokemon), 1);
    assert_eq!(catalog.call_count(LookupStage::Species), 1);
    assert_eq!(catalog.call_count(LookupStage::EvolutionChain), 1);
}

#[tokio::test]
async fn lookups_within_an_attempt_are_sequential() {
    let fetcher = EvolutionFetcher::new(single_kanto_catalog(), FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(9);
    fetcher.fetch(&mut rng).await.unwrap();

    let stages: Vec<LookupStage> = fetcher.catalog().calls().iter().map(|c| c.stage).collect();
    for pair in stages.windows(2) {
        let allowed = matches!(
            (pair.first(), pair.get(1)),
            (Some(LookupStage::Pokemon), Some(LookupStage::Species))
                | (Some(LookupStage::Species), Some(LookupStage::Pokemon))
                | (Some(LookupStage::Species), Some(LookupStage::EvolutionChain))
        );
        assert!(allowed, "unexpected lookup order: {pair:?}");
    }
    assert_eq!(stages.last(), Some(&LookupStage::EvolutionChain));
}

#[tokio::test]
async fn speciesless_records_are_resampled() {
    let mut catalog = all_kanto_catalog();
    for id in 2..=151_u16 {
        catalog = catalog.with_speciesless(id);
    }
    let fetcher = EvolutionFetcher::new(catalog, FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(17);

    let path = fetcher.fetch(&mut rng).await.unwrap();
    assert_eq!(path.names(), vec!["kanto-1"]);
    assert_eq!(fetcher.catalog().call_count(LookupStage::Species), 1);
}

#[tokio::test]
async fn failure_at_each_stage_aborts_without_retry() {
    for stage in [
        LookupStage::Pokemon,
        LookupStage::Species,
        LookupStage::EvolutionChain,
    ] {
        let catalog = all_kanto_catalog().failing_at(stage, "Internal Server Error");
        let fetcher = EvolutionFetcher::new(catalog, FetchSettings::default());
        let session = EvolutionSession::new();
        let mut rng = SmallRng::seed_from_u64(5);

        session.refresh(&fetcher, &mut rng).await;

        assert_eq!(
            session.state().await,
            UiState::Error {
                message: FETCH_FAILED_MESSAGE.to_owned()
            }
        );
        assert!(!session.is_loading().await);
        assert!(session.in_flight().await.is_none());
        // The failing stage was reached exactly once.
        assert_eq!(fetcher.catalog().call_count(stage), 1);
    }
}

#[tokio::test]
async fn failure_reports_stage_and_status_text() {
    let catalog = all_kanto_catalog().failing_at(LookupStage::Species, "Bad Gateway");
    let fetcher = EvolutionFetcher::new(catalog, FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(1);

    let err = fetcher.fetch(&mut rng).await.unwrap_err();
    assert_eq!(err.stage(), Some(LookupStage::Species));
    assert_eq!(err.to_string(), "species lookup returned Bad Gateway");
}

#[tokio::test]
async fn attempt_bound_stops_the_loop_when_configured() {
    let catalog = (1..=151_u16).fold(InMemoryCatalog::new(), |catalog, id| {
        let name = format!("johto-{id}");
        catalog.with_species(
            id,
            &name,
            "generation-ii",
            id,
            ChainLink::leaf(InMemoryCatalog::species_ref(&name, id)),
        )
    });
    let settings = FetchSettings {
        max_attempts: Some(10),
        ..FetchSettings::default()
    };
    let fetcher = EvolutionFetcher::new(catalog, settings);
    let mut rng = SmallRng::seed_from_u64(8);

    let err = fetcher.fetch(&mut rng).await.unwrap_err();
    assert!(matches!(err, FetchError::AttemptsExhausted { attempts: 10 }));
    assert_eq!(fetcher.catalog().call_count(LookupStage::Pokemon), 10);
    assert_eq!(fetcher.catalog().call_count(LookupStage::EvolutionChain), 0);
}

#[tokio::test]
async fn reinvocation_resets_to_loading_before_terminal_state() {
    let fetcher = EvolutionFetcher::new(all_kanto_catalog(), FetchSettings::default());
    let session = EvolutionSession::new();
    let mut rng = SmallRng::seed_from_u64(21);

    session.refresh(&fetcher, &mut rng).await;
    assert!(session.state().await.path().is_some());

    let id = session.begin().await;
    assert_eq!(session.state().await, UiState::Loading);
    assert!(session.run(id, &fetcher, &mut rng).await);
    assert!(matches!(session.state().await, UiState::Ready { .. }));

    // Same again starting from an error state.
    let failing = EvolutionFetcher::new(
        all_kanto_catalog().failing_at(LookupStage::Pokemon, "Not Found"),
        FetchSettings::default(),
    );
    session.refresh(&failing, &mut rng).await;
    assert!(matches!(session.state().await, UiState::Error { .. }));
    let id = session.begin().await;
    assert_eq!(session.state().await, UiState::Loading);
    assert!(session.run(id, &fetcher, &mut rng).await);
    assert!(session.state().await.path().is_some());
}
