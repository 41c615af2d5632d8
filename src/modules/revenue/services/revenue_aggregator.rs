use tracing::warn;

use crate::modules::locations::models::LocationFilter;
use crate::modules::revenue::models::{RevenueResponse, RowSelection};

/// Chooses which rows to display for a response and a location filter
///
/// Selection is positional only: rows are never reordered, deduplicated
/// or summed here.
pub struct RevenueAggregator;

impl RevenueAggregator {
    pub fn new() -> Self {
        Self
    }

    pub fn select_rows(&self, response: RevenueResponse, filter: &LocationFilter) -> RowSelection {
        match (response, filter) {
            (RevenueResponse::NoData, _) => RowSelection::NoData,

            (RevenueResponse::Flat(records), LocationFilter::All) => RowSelection::Table(records),

            (RevenueResponse::Grouped(groups), LocationFilter::All) => {
                RowSelection::Grouped(groups)
            }

            // A missing key is an empty table, not NoData
            (RevenueResponse::Grouped(groups), LocationFilter::Only(location)) => {
                let records = groups
                    .into_iter()
                    .find(|g| &g.location == location)
                    .map(|g| g.records)
                    .unwrap_or_default();
                RowSelection::Table(records)
            }

            // Filtered queries should answer grouped; a flat answer is shown unfiltered
            (RevenueResponse::Flat(records), LocationFilter::Only(location)) => {
                warn!(
                    location = %location,
                    records = records.len(),
                    "Flat response for a filtered request, showing rows unfiltered"
                );
                RowSelection::Table(records)
            }
        }
    }
}

impl Default for RevenueAggregator {
    fn default() -> Self {
        Self::new()
    }
}
