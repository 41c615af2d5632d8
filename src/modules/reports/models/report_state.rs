use reqwest::StatusCode;

use crate::core::ReportError;
use crate::modules::locations::models::LocationFilter;
use crate::modules::revenue::models::RowSelection;

/// Failure as shown to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFailure {
    /// Taxonomy bucket (`no_session`, `fetch_error`, `malformed_record`, ...)
    pub kind: &'static str,
    pub message: String,
    pub status: Option<StatusCode>,
}

impl From<&ReportError> for ReportFailure {
    fn from(err: &ReportError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            status: err.status(),
        }
    }
}

/// Lifecycle of the revenue report
///
/// `Idle` only exists before the first fetch. Every later fetch passes
/// through `Loading` and ends in `Loaded`, `NoData` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportState {
    #[default]
    Idle,
    Loading {
        filter: LocationFilter,
    },
    Loaded {
        filter: LocationFilter,
        rows: RowSelection,
    },
    NoData {
        filter: LocationFilter,
    },
    Error {
        filter: LocationFilter,
        failure: ReportFailure,
    },
}

impl ReportState {
    pub fn name(&self) -> &'static str {
        match self {
            ReportState::Idle => "idle",
            ReportState::Loading { .. } => "loading",
            ReportState::Loaded { .. } => "loaded",
            ReportState::NoData { .. } => "no_data",
            ReportState::Error { .. } => "error",
        }
    }

    /// Filter the state was produced for (`None` while idle)
    pub fn filter(&self) -> Option<&LocationFilter> {
        match self {
            ReportState::Idle => None,
            ReportState::Loading { filter }
            | ReportState::Loaded { filter, .. }
            | ReportState::NoData { filter }
            | ReportState::Error { filter, .. } => Some(filter),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ReportState::Loading { .. })
    }

    /// True once a fetch has settled, whatever its outcome
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            ReportState::Loaded { .. } | ReportState::NoData { .. } | ReportState::Error { .. }
        )
    }
}

/// Filter menu contents plus the last catalog failure, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    pub entries: Vec<LocationFilter>,
    pub error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            entries: vec![LocationFilter::All],
            error: None,
        }
    }
}
