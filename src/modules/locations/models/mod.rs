pub mod location;

pub use location::{Location, LocationFilter, ALL_LOCATIONS_LABEL};
