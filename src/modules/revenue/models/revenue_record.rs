use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::timestamp::parse_record_timestamp;
use crate::modules::locations::models::Location;

/// Record as it appears on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueRecordPayload {
    pub waktu: String,
    pub id_lokasi: String,
    pub total_transaksi: u64,
    pub total_pendapatan: Decimal,
}

/// Revenue figures for one location at one point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueRecord {
    /// Wall-clock time as recorded by the backend
    pub timestamp: NaiveDateTime,
    pub location_id: Location,
    pub transaction_count: u64,
    /// Amount in whole-currency units (Rupiah)
    pub total_revenue: Decimal,
}

impl TryFrom<RevenueRecordPayload> for RevenueRecord {
    type Error = String;

    fn try_from(payload: RevenueRecordPayload) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: parse_record_timestamp(&payload.waktu)?,
            location_id: Location::new(payload.id_lokasi),
            transaction_count: payload.total_transaksi,
            total_revenue: payload.total_pendapatan,
        })
    }
}

/// Records for a single location, in backend order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup {
    pub location: Location,
    pub records: Vec<RevenueRecord>,
}

impl LocationGroup {
    pub fn new(location: Location, records: Vec<RevenueRecord>) -> Self {
        Self { location, records }
    }
}
