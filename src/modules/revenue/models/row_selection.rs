use super::revenue_record::{LocationGroup, RevenueRecord};

/// Rows chosen for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowSelection {
    NoData,
    /// Single table; may legitimately be empty
    Table(Vec<RevenueRecord>),
    /// One table per location
    Grouped(Vec<LocationGroup>),
}

impl RowSelection {
    /// Number of rows across all tables
    pub fn row_count(&self) -> usize {
        match self {
            RowSelection::NoData => 0,
            RowSelection::Table(records) => records.len(),
            RowSelection::Grouped(groups) => groups.iter().map(|g| g.records.len()).sum(),
        }
    }
}
