use serde_json::Value;

use super::revenue_record::{LocationGroup, RevenueRecord, RevenueRecordPayload};
use crate::core::{ReportError, Result};
use crate::modules::locations::models::Location;

/// Normalized backend answer, shape decided once at the fetch boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevenueResponse {
    /// Backend has nothing for the requested scope
    NoData,
    Flat(Vec<RevenueRecord>),
    /// Non-empty, in backend key order
    Grouped(Vec<LocationGroup>),
}

impl RevenueResponse {
    /// Normalize a decoded response body
    ///
    /// Empty arrays, empty objects and `null` are `NoData`. Any record that
    /// fails to parse rejects the whole body.
    pub fn from_body(body: Value) -> Result<Self> {
        match body {
            Value::Null => Ok(RevenueResponse::NoData),
            Value::Array(items) if items.is_empty() => Ok(RevenueResponse::NoData),
            Value::Object(map) if map.is_empty() => Ok(RevenueResponse::NoData),
            Value::Array(items) => Ok(RevenueResponse::Flat(parse_records(items, None)?)),
            Value::Object(map) => {
                let mut groups = Vec::with_capacity(map.len());
                for (key, value) in map {
                    let location = Location::new(key);
                    let items = match value {
                        Value::Array(items) => items,
                        other => {
                            return Err(ReportError::transport(format!(
                                "Expected a record list for location '{}', got {}",
                                location,
                                json_kind(&other)
                            )))
                        }
                    };
                    let records = parse_records(items, Some(&location))?;
                    groups.push(LocationGroup::new(location, records));
                }
                Ok(RevenueResponse::Grouped(groups))
            }
            other => Err(ReportError::transport(format!(
                "Unexpected response shape: {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, RevenueResponse::NoData)
    }

    /// Location keys of a grouped response, in backend order
    pub fn locations(&self) -> Vec<Location> {
        match self {
            RevenueResponse::Grouped(groups) => {
                groups.iter().map(|g| g.location.clone()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn parse_records(items: Vec<Value>, group: Option<&Location>) -> Result<Vec<RevenueRecord>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let location = group
                .map(|l| l.to_string())
                .or_else(|| item_location(&item))
                .unwrap_or_default();
            let payload: RevenueRecordPayload =
                serde_json::from_value(item).map_err(|e| ReportError::MalformedRecord {
                    index,
                    location: location.clone(),
                    reason: e.to_string(),
                })?;
            RevenueRecord::try_from(payload).map_err(|reason| ReportError::MalformedRecord {
                index,
                location,
                reason,
            })
        })
        .collect()
}

fn item_location(item: &Value) -> Option<String> {
    item.get("id_lokasi")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
