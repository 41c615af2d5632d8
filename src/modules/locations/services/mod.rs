pub mod location_catalog;

pub use location_catalog::LocationCatalog;
