//! User service trait definition.

use crate::dto::{
    CreateUserRequest, DeleteUserResponse, UpdateUserRequest, UserRecordResponse, UserResponse,
};
use async_trait::async_trait;
use roster_core::{RosterResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user. Validates email and phone formats; the stored
    /// record, including the assigned id and the password as given, is
    /// echoed back.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserRecordResponse>;

    /// Lists all users in insertion order, passwords omitted.
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>>;

    /// Gets a user by ID, password omitted.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Overwrites every field of an existing user. Unlike create, no
    /// format validation is applied here.
    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> RosterResult<UserRecordResponse>;

    /// Deletes a user and returns a confirmation naming the id.
    async fn delete_user(&self, id: UserId) -> RosterResult<DeleteUserResponse>;
}
