// Test Data Factory
//
// Record payloads in the backend's wire format.

use serde_json::{json, Value};

use revenue_report::sessions::Session;

/// Record JSON as the backend sends it
pub fn record_json(location: &str, waktu: &str, count: u64, revenue: u64) -> Value {
    json!({
        "waktu": waktu,
        "id_lokasi": location,
        "total_transaksi": count,
        "total_pendapatan": revenue
    })
}

/// `{"A": [one record], "B": []}`
pub fn two_location_body() -> Value {
    json!({
        "A": [record_json("A", "2024-01-01T10:00:00", 5, 50000)],
        "B": []
    })
}

/// Three locations, deliberately not in sorted order
pub fn three_location_body() -> Value {
    json!({
        "Plaza Senayan": [
            record_json("Plaza Senayan", "2024-02-10T08:15:00", 1200, 6000000),
            record_json("Plaza Senayan", "2024-02-10T09:15:00", 340, 1700000)
        ],
        "Bandara": [record_json("Bandara", "2024-02-10T08:00:00", 77, 385000)],
        "Citra Land": [record_json("Citra Land", "2024-02-10T07:45:00", 15, 75000)]
    })
}

pub fn test_session() -> Session {
    Session::new(json!({"user_id": 42, "username": "operator", "role": "admin"}))
}
