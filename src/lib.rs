//! accrue — simple and compound interest calculator CLI (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod input;
pub mod interest;
pub mod models;
pub mod output;
