use std::fmt;

/// Message shown in place of tables when the backend has nothing
pub const NO_DATA_MESSAGE: &str = "Tidak ada data pendapatan untuk lokasi yang dipilih";

/// Shown in a footer when a total exceeds the representable range
pub const TOTAL_OVERFLOW: &str = "melebihi batas";

pub const COLUMN_HEADERS: [&str; 4] = ["Waktu", "Lokasi", "Total Transaksi", "Total Pendapatan"];

/// One record rendered as display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedRow {
    pub timestamp: String,
    pub location: String,
    pub transaction_count: String,
    pub total_revenue: String,
}

impl FormattedRow {
    pub fn cells(&self) -> [&str; 4] {
        [
            &self.timestamp,
            &self.location,
            &self.transaction_count,
            &self.total_revenue,
        ]
    }
}

/// Display totals under a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFooter {
    pub row_count: usize,
    pub transaction_count: String,
    pub total_revenue: String,
}

/// A single rendered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    /// Location name for grouped output, `None` for a single table
    pub title: Option<String>,
    pub rows: Vec<FormattedRow>,
    pub footer: TableFooter,
}

impl ReportTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What the presentation layer draws for a settled fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportView {
    NoData { message: String },
    Tables(Vec<ReportTable>),
}

impl ReportView {
    pub fn tables(&self) -> &[ReportTable] {
        match self {
            ReportView::NoData { .. } => &[],
            ReportView::Tables(tables) => tables,
        }
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        if let Some(title) = &self.title {
            writeln!(f, "== {} ==", title)?;
        }
        write_cells(f, COLUMN_HEADERS, &widths)?;
        let rule = widths.map(|w| "-".repeat(w)).join("-+-");
        writeln!(f, "{}", rule)?;
        for row in &self.rows {
            write_cells(f, row.cells(), &widths)?;
        }
        writeln!(
            f,
            "{} baris, {} transaksi, {}",
            self.footer.row_count, self.footer.transaction_count, self.footer.total_revenue
        )
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: [&str; 4], widths: &[usize; 4]) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportView::NoData { message } => writeln!(f, "{}", message),
            ReportView::Tables(tables) => {
                for (i, table) in tables.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", table)?;
                }
                Ok(())
            }
        }
    }
}
