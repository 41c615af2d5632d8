pub mod models;
pub mod services;

pub use models::Session;
pub use services::{EnvSessionProvider, SessionProvider, StaticSessionProvider};
