use async_trait::async_trait;

use crate::core::Result;
use crate::modules::locations::models::LocationFilter;
use crate::modules::revenue::models::RevenueResponse;
use crate::modules::sessions::models::Session;

/// Anything that can answer revenue queries
///
/// Implemented by the HTTP client; the reporting state machine and the
/// location catalog only depend on this trait.
#[async_trait]
pub trait RevenueSource: Send + Sync {
    /// Fetch revenue for all locations (`LocationFilter::All`) or a single one
    async fn fetch_revenue(
        &self,
        session: &Session,
        filter: &LocationFilter,
    ) -> Result<RevenueResponse>;
}
