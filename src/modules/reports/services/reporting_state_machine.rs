use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::core::{ReportError, Result};
use crate::modules::locations::models::LocationFilter;
use crate::modules::locations::services::LocationCatalog;
use crate::modules::reports::models::{CatalogState, ReportFailure, ReportState};
use crate::modules::revenue::models::RowSelection;
use crate::modules::revenue::services::{RevenueAggregator, RevenueSource};
use crate::modules::sessions::services::SessionProvider;

/// Drives the revenue report through Idle → Loading → Loaded / NoData / Error
///
/// Every fetch is tagged with a sequence number when it is issued. A
/// settling fetch only writes state if no newer fetch has been issued
/// since, so the most recently requested filter always wins regardless
/// of the order in which responses arrive.
pub struct ReportingStateMachine {
    source: Arc<dyn RevenueSource>,
    sessions: Arc<dyn SessionProvider>,
    aggregator: RevenueAggregator,
    latest_seq: AtomicU64,
    state_tx: watch::Sender<ReportState>,
    catalog: Mutex<LocationCatalog>,
    catalog_tx: watch::Sender<CatalogState>,
}

impl ReportingStateMachine {
    pub fn new(source: Arc<dyn RevenueSource>, sessions: Arc<dyn SessionProvider>) -> Self {
        let (state_tx, _) = watch::channel(ReportState::Idle);
        let (catalog_tx, _) = watch::channel(CatalogState::default());

        Self {
            source,
            sessions,
            aggregator: RevenueAggregator::new(),
            latest_seq: AtomicU64::new(0),
            state_tx,
            catalog: Mutex::new(LocationCatalog::new()),
            catalog_tx,
        }
    }

    /// Snapshot of the current report state
    pub fn state(&self) -> ReportState {
        self.state_tx.borrow().clone()
    }

    /// Receiver notified on every applied state change
    pub fn subscribe(&self) -> watch::Receiver<ReportState> {
        self.state_tx.subscribe()
    }

    pub fn catalog_state(&self) -> CatalogState {
        self.catalog_tx.borrow().clone()
    }

    pub fn subscribe_catalog(&self) -> watch::Receiver<CatalogState> {
        self.catalog_tx.subscribe()
    }

    /// Filter of the most recent request (`All` before the first one)
    pub fn current_filter(&self) -> LocationFilter {
        self.state_tx
            .borrow()
            .filter()
            .cloned()
            .unwrap_or_default()
    }

    /// Initial load: unfiltered revenue and the location catalog, independently
    pub async fn activate(&self) {
        info!("Activating revenue report");
        let (_, catalog) = tokio::join!(
            self.fetch_and_settle(LocationFilter::All),
            self.load_catalog()
        );
        if let Err(e) = catalog {
            debug!(error = %e, "Catalog unavailable after activation");
        }
    }

    /// User picked a menu entry; supersedes any fetch still in flight
    ///
    /// Returns whether this request's outcome was applied.
    pub async fn select_filter(&self, filter: LocationFilter) -> bool {
        info!(filter = %filter, "Filter selected");
        self.fetch_and_settle(filter).await
    }

    /// Re-run the fetch for the current filter
    pub async fn refresh(&self) -> bool {
        let filter = self.current_filter();
        self.fetch_and_settle(filter).await
    }

    /// Reload the filter menu; failures never touch the report state
    pub async fn load_catalog(&self) -> Result<Vec<LocationFilter>> {
        let mut catalog = self.catalog.lock().await;

        let outcome = match self.sessions.get_session_data() {
            Some(session) => catalog
                .load_locations(self.source.as_ref(), &session)
                .await
                .map(|entries| entries.to_vec()),
            None => Err(ReportError::NoSession),
        };

        let entries = catalog.entries().to_vec();
        match &outcome {
            Ok(_) => self.catalog_tx.send_replace(CatalogState {
                entries,
                error: None,
            }),
            Err(e) => {
                warn!(error = %e, "Location catalog unavailable");
                self.catalog_tx.send_replace(CatalogState {
                    entries,
                    error: Some(e.to_string()),
                })
            }
        };

        outcome
    }

    async fn fetch_and_settle(&self, filter: LocationFilter) -> bool {
        let seq = self.begin(&filter);

        let outcome = match self.sessions.get_session_data() {
            Some(session) => self
                .source
                .fetch_revenue(&session, &filter)
                .await
                .map(|response| self.aggregator.select_rows(response, &filter)),
            None => Err(ReportError::NoSession),
        };

        self.settle(seq, filter, outcome)
    }

    /// Issue a new sequence number and enter `Loading`
    fn begin(&self, filter: &LocationFilter) -> u64 {
        let mut seq = 0;
        self.state_tx.send_modify(|state| {
            seq = self.latest_seq.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ReportState::Loading {
                filter: filter.clone(),
            };
        });
        debug!(seq, filter = %filter, "Fetch issued");
        seq
    }

    /// Apply an outcome unless a newer fetch has been issued
    fn settle(&self, seq: u64, filter: LocationFilter, outcome: Result<RowSelection>) -> bool {
        let applied = self.state_tx.send_if_modified(|state| {
            if self.latest_seq.load(Ordering::SeqCst) != seq {
                return false;
            }
            *state = match outcome {
                Ok(RowSelection::NoData) => ReportState::NoData { filter },
                Ok(rows) => ReportState::Loaded { filter, rows },
                Err(ref e) => ReportState::Error {
                    filter,
                    failure: ReportFailure::from(e),
                },
            };
            true
        });

        if applied {
            let state = self.state_tx.borrow();
            match &*state {
                ReportState::Error { failure, .. } => {
                    warn!(seq, kind = failure.kind, message = %failure.message, "Fetch failed")
                }
                other => info!(seq, state = other.name(), "Fetch settled"),
            }
        } else {
            debug!(seq, "Discarding stale fetch result");
        }

        applied
    }
}
