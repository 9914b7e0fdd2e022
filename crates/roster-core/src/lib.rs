//! # Roster Core
//!
//! Core types, error definitions, and field validation for the Roster
//! user service. This crate provides the foundational abstractions shared
//! by the repository, service, and REST layers.

pub mod error;
pub mod id;
pub mod result;
pub mod user;
pub mod validation;

pub use error::*;
pub use id::*;
pub use result::*;
pub use user::*;
pub use validation::*;
