//! Integration tests for the reporting flow
//!
//! Full path: state machine → session provider → HTTP client → aggregator
//! → formatter, against a real in-process backend. Ordering of overlapping
//! fetches is checked with a gated in-memory source.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use revenue_report::core::ReportError;
use revenue_report::locations::LocationFilter;
use revenue_report::reports::{ReportFormatter, ReportState, ReportingStateMachine};
use revenue_report::revenue::{RevenueAggregator, RevenueResponse, RowSelection};
use revenue_report::sessions::StaticSessionProvider;

fn machine_for(backend: &FakeBackend) -> ReportingStateMachine {
    ReportingStateMachine::new(
        Arc::new(backend.client()),
        Arc::new(StaticSessionProvider::new(Some(test_session()))),
    )
}

fn expect_rows(state: ReportState) -> RowSelection {
    match state {
        ReportState::Loaded { rows, .. } => rows,
        other => panic!("expected loaded state, got {:?}", other),
    }
}

#[actix_web::test]
async fn test_unfiltered_grouped_report() {
    let backend = spawn_revenue_backend(CannedResponse::json(two_location_body()), HashMap::new());
    let machine = machine_for(&backend);

    machine.activate().await;

    let view = ReportFormatter::render(&expect_rows(machine.state()));
    let tables = view.tables();
    assert_eq!(tables.len(), 2);

    assert_eq!(tables[0].title.as_deref(), Some("A"));
    assert_eq!(tables[0].rows.len(), 1);
    assert_eq!(
        tables[0].rows[0].cells(),
        ["01-01-2024 10:00:00", "A", "5", "Rp 50.000"]
    );

    assert_eq!(tables[1].title.as_deref(), Some("B"));
    assert!(tables[1].rows.is_empty());

    // Catalog was loaded from the same endpoint
    assert_eq!(
        machine.catalog_state().entries,
        vec![
            LocationFilter::All,
            LocationFilter::only("A"),
            LocationFilter::only("B"),
        ]
    );
}

#[actix_web::test]
async fn test_filter_on_empty_group_is_loaded_not_no_data() {
    // Filtered against a grouped answer: the key exists but has no rows
    let source = GatedSource::new();
    let gate = source.gate(LocationFilter::only("B"));
    let machine = ReportingStateMachine::new(
        Arc::new(source),
        Arc::new(StaticSessionProvider::new(Some(test_session()))),
    );

    let grouped = RevenueResponse::from_body(two_location_body()).unwrap();
    gate.release(Ok(grouped));
    assert!(machine.select_filter(LocationFilter::only("B")).await);

    assert_eq!(expect_rows(machine.state()), RowSelection::Table(vec![]));
}

#[actix_web::test]
async fn test_filter_on_unknown_location_is_empty_table() {
    let source = GatedSource::new();
    let gate = source.gate(LocationFilter::only("Z"));
    let machine = ReportingStateMachine::new(
        Arc::new(source),
        Arc::new(StaticSessionProvider::new(Some(test_session()))),
    );

    gate.release(Ok(RevenueResponse::from_body(two_location_body()).unwrap()));
    machine.select_filter(LocationFilter::only("Z")).await;

    let rows = expect_rows(machine.state());
    assert_eq!(rows, RowSelection::Table(vec![]));
    let view = ReportFormatter::render(&rows);
    assert_eq!(view.tables().len(), 1);
    assert!(view.tables()[0].is_empty());
}

#[actix_web::test]
async fn test_empty_backend_is_no_data_regardless_of_filter() {
    let backend = spawn_revenue_backend(CannedResponse::json(json!({})), HashMap::new());
    let machine = machine_for(&backend);

    machine.activate().await;
    assert_eq!(
        machine.state(),
        ReportState::NoData {
            filter: LocationFilter::All
        }
    );

    machine.select_filter(LocationFilter::only("A")).await;
    assert_eq!(
        machine.state(),
        ReportState::NoData {
            filter: LocationFilter::only("A")
        }
    );
}

#[actix_web::test]
async fn test_server_error_surfaces_status() {
    let backend = spawn_revenue_backend(
        CannedResponse::raw(500, r#"{"status": "error", "message": "boom"}"#),
        HashMap::new(),
    );
    let machine = machine_for(&backend);

    machine.activate().await;

    match machine.state() {
        ReportState::Error { failure, .. } => {
            assert_eq!(failure.kind, "fetch_error");
            assert!(is_status(failure.status, 500));
            assert!(failure.message.contains("boom"));
        }
        other => panic!("expected error state, got {:?}", other),
    }

    // Catalog failure is reported on its own channel
    assert!(machine.catalog_state().error.is_some());
}

#[actix_web::test]
async fn test_missing_session_is_error_without_network_call() {
    let backend = spawn_revenue_backend(CannedResponse::json(two_location_body()), HashMap::new());
    let machine = ReportingStateMachine::new(
        Arc::new(backend.client()),
        Arc::new(StaticSessionProvider::new(None)),
    );

    machine.select_filter(LocationFilter::All).await;

    match machine.state() {
        ReportState::Error { failure, .. } => assert_eq!(failure.kind, "no_session"),
        other => panic!("expected error state, got {:?}", other),
    }
    assert!(backend.recorded().is_empty());
}

#[actix_web::test]
async fn test_filtered_at_source_matches_filtered_in_memory() {
    let body = three_location_body();
    let mut by_location = HashMap::new();
    for (location, records) in body.as_object().unwrap() {
        by_location.insert(location.clone(), CannedResponse::json(records.clone()));
    }
    let backend = spawn_revenue_backend(CannedResponse::json(body.clone()), by_location);
    let client = backend.client();
    let aggregator = RevenueAggregator::new();
    let session = test_session();

    for location in ["Plaza Senayan", "Bandara", "Citra Land"] {
        let filter = LocationFilter::only(location);

        let all = client.fetch_revenue(&session, &LocationFilter::All).await.unwrap();
        let in_memory = aggregator.select_rows(all, &filter);

        let at_source = client.fetch_revenue(&session, &filter).await.unwrap();
        let from_source = aggregator.select_rows(at_source, &LocationFilter::All);

        assert_eq!(in_memory, from_source, "mismatch for {}", location);
    }
}

#[actix_web::test]
async fn test_latest_issued_request_wins_over_late_stale_response() {
    let source = Arc::new(GatedSource::new());
    let gate_a = source.gate(LocationFilter::only("A"));
    let gate_b = source.gate(LocationFilter::only("B"));
    let machine = ReportingStateMachine::new(
        source.clone(),
        Arc::new(StaticSessionProvider::new(Some(test_session()))),
    );
    let mut rx = machine.subscribe();

    let grouped = RevenueResponse::from_body(two_location_body()).unwrap();
    let grouped_again = grouped.clone();

    // A is issued first, B second; B settles first, A arrives late
    let driver = async move {
        gate_b.release(Ok(grouped));
        rx.wait_for(|state| {
            matches!(
                state,
                ReportState::Loaded { filter, .. } if *filter == LocationFilter::only("B")
            )
        })
        .await
        .unwrap();
        gate_a.release(Ok(grouped_again));
    };

    let (applied_a, applied_b, _) = tokio::join!(
        machine.select_filter(LocationFilter::only("A")),
        machine.select_filter(LocationFilter::only("B")),
        driver
    );

    assert!(!applied_a, "stale response must be discarded");
    assert!(applied_b);
    assert_eq!(machine.current_filter(), LocationFilter::only("B"));
    assert_eq!(machine.state().name(), "loaded");
}

#[actix_web::test]
async fn test_stale_failure_does_not_overwrite_newer_result() {
    let source = Arc::new(GatedSource::new());
    let gate_all = source.gate(LocationFilter::All);
    let gate_a = source.gate(LocationFilter::only("A"));
    let machine = ReportingStateMachine::new(
        source.clone(),
        Arc::new(StaticSessionProvider::new(Some(test_session()))),
    );
    let mut rx = machine.subscribe();

    let driver = async move {
        gate_a.release(Ok(RevenueResponse::NoData));
        rx.wait_for(|state| matches!(state, ReportState::NoData { .. }))
            .await
            .unwrap();
        gate_all.release(Err(ReportError::transport("connection reset")));
    };

    tokio::join!(
        machine.select_filter(LocationFilter::All),
        machine.select_filter(LocationFilter::only("A")),
        driver
    );

    assert_eq!(
        machine.state(),
        ReportState::NoData {
            filter: LocationFilter::only("A")
        }
    );
}

#[actix_web::test]
async fn test_catalog_failure_keeps_report_and_menu() {
    let source = Arc::new(GatedSource::new());
    let machine = ReportingStateMachine::new(
        source.clone(),
        Arc::new(StaticSessionProvider::new(Some(test_session()))),
    );

    source
        .gate(LocationFilter::All)
        .release(Ok(RevenueResponse::from_body(two_location_body()).unwrap()));
    machine.load_catalog().await.unwrap();

    source
        .gate(LocationFilter::only("A"))
        .release(Ok(RevenueResponse::from_body(two_location_body()).unwrap()));
    machine.select_filter(LocationFilter::only("A")).await;
    let report = machine.state();

    source
        .gate(LocationFilter::All)
        .release(Err(ReportError::transport("connection refused")));
    assert!(machine.load_catalog().await.is_err());

    assert_eq!(machine.state(), report);
    let catalog = machine.catalog_state();
    assert_eq!(catalog.entries.len(), 3);
    assert!(catalog.error.unwrap().contains("connection refused"));
}
