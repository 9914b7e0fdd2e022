//! # Roster Repository
//!
//! Persistence layer for the Roster user service: SQLx Postgres pool
//! management and the `UserRepository` trait with its Postgres
//! implementation.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
