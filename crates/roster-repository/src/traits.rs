//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{NewUser, RosterResult, User, UserId};

/// User repository trait.
///
/// Each method is a single independent statement against the store; the
/// service layer performs no cross-request coordination on top of it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user and returns the stored record with its
    /// store-assigned id. A duplicate email surfaces as
    /// `RosterError::Conflict` carrying the driver's message.
    async fn insert(&self, user: &NewUser) -> RosterResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Returns all users in insertion order.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Overwrites an existing record. Returns the updated row, or `None`
    /// when no record matched the id.
    async fn update(&self, user: &User) -> RosterResult<Option<User>>;

    /// Deletes a user by ID. Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;
}
