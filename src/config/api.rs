use crate::core::{ReportError, Result};
use crate::middleware::RequestId;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Revenue backend connection settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` waits on the transport indefinitely
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        let timeout = match env::var("REVENUE_API_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(raw.parse().map_err(|_| {
                ReportError::configuration("Invalid REVENUE_API_TIMEOUT_SECS")
            })?)),
            Err(_) => None,
        };

        Ok(ApiConfig {
            base_url: env::var("REVENUE_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(ReportError::configuration("Base URL must not be empty"));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ReportError::configuration(format!(
                "Base URL must be http(s), got '{}'",
                url
            )));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(ReportError::configuration(
                "Request timeout must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }

    /// Build the HTTP client: cookie store on, request-id middleware attached
    pub fn create_client(&self) -> Result<ClientWithMiddleware> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(ClientBuilder::new(client).with(RequestId).build())
    }
}
