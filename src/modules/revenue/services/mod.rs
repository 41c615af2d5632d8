pub mod revenue_aggregator;
pub mod revenue_query_client;
pub mod revenue_source;

pub use revenue_aggregator::RevenueAggregator;
pub use revenue_query_client::{RevenueQueryClient, ALL_LOCATIONS_PATH, BY_LOCATION_PATH};
pub use revenue_source::RevenueSource;
