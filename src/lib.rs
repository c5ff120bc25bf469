//! marlin-profiles — per-printer Marlin configuration manager (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod commands;
pub mod config;
pub mod constants;
pub mod models;
pub mod output;
pub mod store;

#[cfg(test)]
mod testutil;
