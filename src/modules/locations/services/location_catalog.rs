use tracing::{info, warn};

use crate::core::Result;
use crate::modules::locations::models::{Location, LocationFilter};
use crate::modules::revenue::models::RevenueResponse;
use crate::modules::revenue::services::RevenueSource;
use crate::modules::sessions::models::Session;

/// Known locations for the filter menu, `All` always first
#[derive(Debug, Clone)]
pub struct LocationCatalog {
    entries: Vec<LocationFilter>,
}

impl LocationCatalog {
    pub fn new() -> Self {
        Self {
            entries: vec![LocationFilter::All],
        }
    }

    /// Menu entries: the sentinel followed by every known location
    pub fn entries(&self) -> &[LocationFilter] {
        &self.entries
    }

    /// Real locations only
    pub fn locations(&self) -> Vec<Location> {
        self.entries
            .iter()
            .filter_map(|entry| entry.location().cloned())
            .collect()
    }

    pub fn contains(&self, location: &Location) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.location() == Some(location))
    }

    /// Fetch the unfiltered grouped response and rebuild the menu from its keys
    ///
    /// On failure the previous entries are kept and the error is returned.
    pub async fn load_locations<S>(
        &mut self,
        source: &S,
        session: &Session,
    ) -> Result<&[LocationFilter]>
    where
        S: RevenueSource + ?Sized,
    {
        let response = match source.fetch_revenue(session, &LocationFilter::All).await {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    error = %e,
                    kept = self.entries.len() - 1,
                    "Location catalog refresh failed, keeping previous entries"
                );
                return Err(e);
            }
        };

        self.entries = Self::entries_from(&response);
        info!(locations = self.entries.len() - 1, "Location catalog loaded");

        Ok(&self.entries)
    }

    fn entries_from(response: &RevenueResponse) -> Vec<LocationFilter> {
        let locations = match response {
            RevenueResponse::NoData => Vec::new(),
            RevenueResponse::Grouped(_) => response.locations(),
            // Some deployments answer the unfiltered query with a list
            RevenueResponse::Flat(records) => {
                let mut seen = Vec::new();
                for record in records {
                    if !seen.contains(&record.location_id) {
                        seen.push(record.location_id.clone());
                    }
                }
                seen
            }
        };

        std::iter::once(LocationFilter::All)
            .chain(locations.into_iter().map(LocationFilter::Only))
            .collect()
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::new()
    }
}
