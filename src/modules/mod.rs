pub mod locations;
pub mod reports;
pub mod revenue;
pub mod sessions;
