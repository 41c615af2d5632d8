use chrono::{DateTime, NaiveDateTime};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Display pattern for record timestamps
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Parse an ISO-8601 record timestamp into its wall-clock value
///
/// Offsets are accepted but not applied: `2024-01-01T10:00:00+07:00`
/// yields 10:00, the time as the backend recorded it.
pub fn parse_record_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| format!("Invalid ISO-8601 timestamp: '{}'", raw))
}

/// Format a wall-clock timestamp as `dd-MM-yyyy HH:mm:ss`
pub fn format_display(timestamp: NaiveDateTime) -> String {
    timestamp.format(DISPLAY_FORMAT).to_string()
}
