pub mod revenue_record;
pub mod revenue_response;
pub mod row_selection;

pub use revenue_record::{LocationGroup, RevenueRecord, RevenueRecordPayload};
pub use revenue_response::RevenueResponse;
pub use row_selection::RowSelection;
