pub mod currency;
pub mod error;
pub mod timestamp;

pub use error::{ReportError, Result};
