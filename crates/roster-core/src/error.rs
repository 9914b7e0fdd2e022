//! Unified error type for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Roster user service.
///
/// Display strings are significant: the REST layer serializes them
/// verbatim into the `{"error": ...}` response body, so variants that
/// reach clients carry their message without any prefix.
#[derive(Error, Debug)]
pub enum RosterError {
    /// No user record matched the requested id.
    #[error("No user found with the id {id}")]
    NotFound { id: String },

    /// A request field failed format validation.
    #[error("{0}")]
    Validation(String),

    /// A store-level constraint was violated (e.g. duplicate email).
    /// Carries the database driver's own message.
    #[error("{0}")]
    Conflict(String),

    /// Any other store-level failure.
    #[error("{0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    ///
    /// The contract only distinguishes not-found (404) from everything
    /// the client caused (400); truly internal failures map to 500.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) | Self::Conflict(_) | Self::Database(_) => 400,
            Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Creates a not-found error naming the missing id.
    #[must_use]
    pub fn not_found<T: ToString>(id: T) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => {
                // Postgres unique violation surfaces the driver's text
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body, shaped exactly as clients expect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorBody {
    /// Creates an error body from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl From<&RosterError> for ErrorBody {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}
