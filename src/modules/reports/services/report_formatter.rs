use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::core::currency::{format_rupiah, group_digits};
use crate::core::timestamp::format_display;
use crate::modules::reports::models::{
    FormattedRow, ReportTable, ReportView, TableFooter, NO_DATA_MESSAGE, TOTAL_OVERFLOW,
};
use crate::modules::revenue::models::{RevenueRecord, RowSelection};

/// Renders revenue figures as `id_ID` display strings
pub struct ReportFormatter;

impl ReportFormatter {
    /// `dd-MM-yyyy HH:mm:ss`, rendered as received
    pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
        format_display(timestamp)
    }

    /// Thousands grouped with periods: `12.345`
    pub fn format_count(count: u64) -> String {
        group_digits(i128::from(count))
    }

    /// Whole Rupiah with prefix: `Rp 1.250.000`
    pub fn format_currency(amount: Decimal) -> String {
        format_rupiah(amount)
    }

    pub fn format_row(record: &RevenueRecord) -> FormattedRow {
        FormattedRow {
            timestamp: Self::format_timestamp(record.timestamp),
            location: record.location_id.to_string(),
            transaction_count: Self::format_count(record.transaction_count),
            total_revenue: Self::format_currency(record.total_revenue),
        }
    }

    /// Build the tables for a selection
    pub fn render(selection: &RowSelection) -> ReportView {
        match selection {
            RowSelection::NoData => ReportView::NoData {
                message: NO_DATA_MESSAGE.to_string(),
            },
            RowSelection::Table(records) => ReportView::Tables(vec![Self::table(None, records)]),
            RowSelection::Grouped(groups) => ReportView::Tables(
                groups
                    .iter()
                    .map(|g| Self::table(Some(g.location.to_string()), &g.records))
                    .collect(),
            ),
        }
    }

    fn table(title: Option<String>, records: &[RevenueRecord]) -> ReportTable {
        // u64 counts summed in u128 cannot overflow for any in-memory slice
        let transactions: u128 = records.iter().map(|r| u128::from(r.transaction_count)).sum();
        let revenue = records
            .iter()
            .try_fold(Decimal::ZERO, |acc, r| acc.checked_add(r.total_revenue));

        ReportTable {
            title,
            rows: records.iter().map(Self::format_row).collect(),
            footer: TableFooter {
                row_count: records.len(),
                transaction_count: i128::try_from(transactions)
                    .map(group_digits)
                    .unwrap_or_else(|_| TOTAL_OVERFLOW.to_string()),
                total_revenue: revenue
                    .map(Self::format_currency)
                    .unwrap_or_else(|| TOTAL_OVERFLOW.to_string()),
            },
        }
    }
}
