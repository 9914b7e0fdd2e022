//! Result type alias used across all layers.

use crate::RosterError;

/// Convenience result type for Roster operations.
pub type RosterResult<T> = Result<T, RosterError>;
