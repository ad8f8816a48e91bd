//! Integration tests for the PokeAPI client against a local mock catalog.
//!
//! Each test binds an Axum server on an ephemeral port that serves
//! PokeAPI-shaped JSON whose references point back at itself.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use pokevo_catalog::{CatalogConfig, PokeApiCatalog};
use pokevo_core::{EvolutionFetcher, FetchError, FetchSettings, LookupStage, SpeciesCatalog};
use pokevo_types::Candidate;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::json;
use tokio::net::TcpListener;

/// How the mock catalog should answer.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Healthy,
    SpeciesMissing,
    ChainGarbled,
}

#[derive(Clone)]
struct Mock {
    base: String,
    mode: Mode,
    hits: Arc<AtomicUsize>,
}

async fn pokemon(State(mock): State<Mock>, Path(id): Path<u16>) -> Response {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "id": id,
        "name": format!("mon-{id}"),
        "species": {
            "name": format!("mon-{id}"),
            "url": format!("{}/pokemon-species/{id}/", mock.base),
        }
    }))
    .into_response()
}

async fn species(State(mock): State<Mock>, Path(id): Path<u16>) -> Response {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    if mock.mode == Mode::SpeciesMissing {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({
        "id": id,
        "generation": {"name": "generation-i", "url": format!("{}/generation/1/", mock.base)},
        "evolution_chain": {"url": format!("{}/evolution-chain/2/", mock.base)}
    }))
    .into_response()
}

async fn chain(State(mock): State<Mock>, Path(_id): Path<u16>) -> Response {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    if mock.mode == Mode::ChainGarbled {
        return (StatusCode::OK, "not json").into_response();
    }
    Json(json!({
        "id": 2,
        "chain": {
            "species": {"name": "charmander", "url": format!("{}/pokemon-species/4/", mock.base)},
            "evolves_to": [{
                "species": {"name": "charmeleon", "url": format!("{}/pokemon-species/5/", mock.base)},
                "evolves_to": [{
                    "species": {"name": "charizard", "url": format!("{}/pokemon-species/6/", mock.base)},
                    "evolves_to": []
                }]
            }]
        }
    }))
    .into_response()
}

/// Serve a mock catalog and return a client pointed at it plus its hit counter.
async fn spawn_mock(mode: Mode) -> (PokeApiCatalog, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = format!("http://{addr}/api/v2");
    let hits = Arc::new(AtomicUsize::new(0));

    let mock = Mock {
        base: base.clone(),
        mode,
        hits: Arc::clone(&hits),
    };
    let app = Router::new()
        .route("/api/v2/pokemon/{id}/", get(pokemon))
        .route("/api/v2/pokemon-species/{id}/", get(species))
        .route("/api/v2/evolution-chain/{id}/", get(chain))
        .with_state(mock);

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    let catalog = PokeApiCatalog::new(&CatalogConfig {
        base_url: base,
        timeout: None,
    })
    .unwrap();
    (catalog, hits)
}

#[tokio::test]
async fn full_sequence_over_http() {
    let (catalog, hits) = spawn_mock(Mode::Healthy).await;
    let fetcher = EvolutionFetcher::new(catalog, FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(4);

    let path = fetcher.fetch(&mut rng).await.unwrap();
    assert_eq!(path.names(), vec!["charmander", "charmeleon", "charizard"]);
    let ids: Vec<&str> = path
        .species()
        .iter()
        .filter_map(|s| s.resource_id())
        .collect();
    assert_eq!(ids, vec!["4", "5", "6"]);
    // Every species is Kanto, so one attempt: three requests.
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn stage_one_resolves_species_reference() {
    let (catalog, _) = spawn_mock(Mode::Healthy).await;
    let record = catalog.pokemon(Candidate::new(25).unwrap()).await.unwrap();
    let species = record.species.unwrap();
    assert_eq!(species.name, "mon-25");
    assert_eq!(species.resource_id(), Some("25"));
}

#[tokio::test]
async fn non_success_status_is_reported_with_status_text() {
    let (catalog, hits) = spawn_mock(Mode::SpeciesMissing).await;
    let fetcher = EvolutionFetcher::new(catalog, FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(4);

    let err = fetcher.fetch(&mut rng).await.unwrap_err();
    assert!(
        matches!(
            &err,
            FetchError::Status { stage: LookupStage::Species, status } if status == "Not Found"
        ),
        "unexpected error: {err:?}"
    );
    // Aborted immediately: no retry after the failed species lookup.
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let (catalog, _) = spawn_mock(Mode::ChainGarbled).await;
    let fetcher = EvolutionFetcher::new(catalog, FetchSettings::default());
    let mut rng = SmallRng::seed_from_u64(4);

    let err = fetcher.fetch(&mut rng).await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Decode {
            stage: LookupStage::EvolutionChain,
            ..
        }
    ));
}

#[tokio::test]
async fn unreachable_catalog_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let catalog = PokeApiCatalog::new(&CatalogConfig {
        base_url: format!("http://{addr}/api/v2"),
        timeout: None,
    })
    .unwrap();

    let err = catalog.pokemon(Candidate::FIRST).await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Transport {
            stage: LookupStage::Pokemon,
            ..
        }
    ));
}
