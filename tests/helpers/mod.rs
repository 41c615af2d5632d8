// Test Helper Modules
//
// Shared fixtures for contract and integration tests. The HTTP client is
// exercised against a real in-process backend (actix-test), never a mock.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod test_data;

pub use gated_source::*;
pub use test_data::*;
pub use test_server::*;
