use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::revenue_source::RevenueSource;
use crate::config::ApiConfig;
use crate::core::{ReportError, Result};
use crate::modules::locations::models::LocationFilter;
use crate::modules::revenue::models::RevenueResponse;
use crate::modules::sessions::models::Session;

pub const ALL_LOCATIONS_PATH: &str = "/api/revenuebylocations/all";
pub const BY_LOCATION_PATH: &str = "/api/revenuebylocations/bylocations";

/// HTTP client for the revenue-by-location endpoints
pub struct RevenueQueryClient {
    client: ClientWithMiddleware,
    base_url: String,
}

impl RevenueQueryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_client(
            config.create_client()?,
            config.normalized_base_url(),
        ))
    }

    pub fn with_client(client: ClientWithMiddleware, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Endpoint URL for a filter (without query string)
    pub fn endpoint_for(&self, filter: &LocationFilter) -> String {
        let path = match filter {
            LocationFilter::All => ALL_LOCATIONS_PATH,
            LocationFilter::Only(_) => BY_LOCATION_PATH,
        };
        format!("{}{}", self.base_url, path)
    }

    /// Fetch and normalize revenue for the given filter
    ///
    /// The session goes out on every call; nothing is cached between calls.
    pub async fn fetch_revenue(
        &self,
        session: &Session,
        filter: &LocationFilter,
    ) -> Result<RevenueResponse> {
        let url = self.endpoint_for(filter);

        let mut query = vec![("session_data", session.to_query_value())];
        if let Some(location) = filter.location() {
            query.push(("location", location.to_string()));
        }

        debug!(filter = %filter, url = %url, "Fetching revenue");

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_error_message(&body);
            warn!(status = %status, message = %message, "Revenue request rejected");
            return Err(ReportError::FetchStatus { status, message });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            info!(filter = %filter, "Empty response body, treating as no data");
            return Ok(RevenueResponse::NoData);
        }

        let body: Value = serde_json::from_str(&text)?;
        let normalized = RevenueResponse::from_body(body)?;

        match &normalized {
            RevenueResponse::NoData => info!(filter = %filter, "No revenue data"),
            RevenueResponse::Flat(records) => {
                info!(filter = %filter, records = records.len(), "Revenue fetched (flat)")
            }
            RevenueResponse::Grouped(groups) => {
                info!(filter = %filter, locations = groups.len(), "Revenue fetched (grouped)")
            }
        }

        Ok(normalized)
    }
}

#[async_trait]
impl RevenueSource for RevenueQueryClient {
    async fn fetch_revenue(
        &self,
        session: &Session,
        filter: &LocationFilter,
    ) -> Result<RevenueResponse> {
        RevenueQueryClient::fetch_revenue(self, session, filter).await
    }
}

/// Pull a human-readable message out of an error body
///
/// The backend answers `{"status": "error", "message": ...}` for failures
/// and `{"detail": ...}` for missing data; anything else is passed through.
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["message", "detail", "error"] {
            if let Some(Value::String(msg)) = map.get(key) {
                return msg.clone();
            }
        }
    }
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}
