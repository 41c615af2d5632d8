use reqwest::StatusCode;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main reporting error type
///
/// "No data" is deliberately absent here: an empty backend result is a
/// valid response (`RevenueResponse::NoData`), not a failure.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Session credential unavailable for this fetch attempt
    #[error("No session available")]
    NoSession,

    /// Backend answered with a non-success status
    #[error("Request failed with status {status}: {message}")]
    FetchStatus { status: StatusCode, message: String },

    /// Connectivity failure or undecodable response body
    #[error("Transport error: {0}")]
    Transport(String),

    /// A record in an otherwise well-formed response could not be parsed
    #[error("Malformed record #{index} for location '{location}': {reason}")]
    MalformedRecord {
        index: usize,
        location: String,
        reason: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        ReportError::Transport(err.to_string())
    }
}

impl From<reqwest_middleware::Error> for ReportError {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => ReportError::Transport(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Transport(format!("Invalid JSON body: {}", err))
    }
}

// Helper functions for common error scenarios
impl ReportError {
    pub fn transport(msg: impl Into<String>) -> Self {
        ReportError::Transport(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        ReportError::Configuration(msg.into())
    }

    /// HTTP status preserved from a non-success response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ReportError::FetchStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Taxonomy bucket this error belongs to
    pub fn kind(&self) -> &'static str {
        match self {
            ReportError::NoSession => "no_session",
            ReportError::FetchStatus { .. } | ReportError::Transport(_) => "fetch_error",
            ReportError::MalformedRecord { .. } => "malformed_record",
            ReportError::Configuration(_) => "configuration",
        }
    }
}
