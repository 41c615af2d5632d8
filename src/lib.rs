//! Revenue-by-location reporting client
//!
//! Fetches per-location parking revenue from the reporting backend,
//! selects rows for the chosen location filter, and renders them as
//! `id_ID` formatted tables driven by an explicit report state machine.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::locations;
pub use modules::reports;
pub use modules::revenue;
pub use modules::sessions;
