//! Core types and aggregates for nobel-dash
//!
//! This crate loads the laureate tables and computes everything the
//! dashboard chapters and the `stats` command display.

pub mod constants;
mod context;
pub mod env_config;
mod error;
mod filter;
mod laureate;
mod loader;
mod stats;

#[cfg(test)]
mod loader_tests;

pub use context::*;
pub use error::*;
pub use filter::*;
pub use laureate::*;
pub use loader::*;
pub use stats::*;
