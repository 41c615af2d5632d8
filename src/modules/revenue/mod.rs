pub mod models;
pub mod services;

pub use models::{LocationGroup, RevenueRecord, RevenueResponse, RowSelection};
pub use services::{
    RevenueAggregator, RevenueQueryClient, RevenueSource, ALL_LOCATIONS_PATH, BY_LOCATION_PATH,
};
