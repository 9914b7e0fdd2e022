//! # Roster Service
//!
//! Business logic for the Roster user service: request/response DTOs and
//! the `UserService` trait with its implementation over a repository.

pub mod dto;
pub mod user_service;
pub mod user_service_impl;

pub use dto::*;
pub use user_service::*;
pub use user_service_impl::*;
