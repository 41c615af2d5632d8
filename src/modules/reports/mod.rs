pub mod models;
pub mod services;

pub use models::{CatalogState, ReportFailure, ReportState, ReportView};
pub use services::{ReportFormatter, ReportingStateMachine};
