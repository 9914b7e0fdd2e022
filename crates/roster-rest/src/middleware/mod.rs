//! Axum middleware.

mod logging;

pub use logging::*;
