//! # Roster Config
//!
//! Layered configuration for the Roster user service: embedded defaults,
//! optional TOML files, and `ROSTER_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
