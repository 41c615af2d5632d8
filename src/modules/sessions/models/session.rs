use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque session credential
///
/// Nothing inside is interpreted here; it is only serialized onto every
/// request as the `session_data` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(Value);

impl Session {
    pub fn new(data: Value) -> Self {
        Self(data)
    }

    /// Parse a session from its JSON text form
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw).map(Self)
    }

    /// Compact JSON used as the `session_data` query value
    pub fn to_query_value(&self) -> String {
        self.0.to_string()
    }

    pub fn data(&self) -> &Value {
        &self.0
    }
}
