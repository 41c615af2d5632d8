pub mod report_state;
pub mod report_view;

pub use report_state::{CatalogState, ReportFailure, ReportState};
pub use report_view::{
    FormattedRow, ReportTable, ReportView, TableFooter, COLUMN_HEADERS, NO_DATA_MESSAGE,
    TOTAL_OVERFLOW,
};
