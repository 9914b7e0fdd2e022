//! # Roster REST
//!
//! REST API layer using Axum for the Roster user service. Provides the
//! five user CRUD endpoints plus a health check.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
