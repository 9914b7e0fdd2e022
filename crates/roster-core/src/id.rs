//! Typed ID wrapper for user records.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::num::ParseIntError;

/// A strongly-typed wrapper for user IDs.
///
/// IDs are assigned by the store on insertion and never reused, so there
/// is no constructor for fresh IDs here; new records carry no id until
/// the store returns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i32);

impl UserId {
    /// Parses a user ID from a path-parameter string.
    pub fn parse(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}
