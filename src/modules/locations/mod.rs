pub mod models;
pub mod services;

pub use models::{Location, LocationFilter, ALL_LOCATIONS_LABEL};
pub use services::LocationCatalog;
