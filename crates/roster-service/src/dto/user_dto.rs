//! User-related DTOs.

use roster_core::{NewUser, User, UserId};
use serde::{Deserialize, Serialize};

/// Request to create a new user. All six fields are required; a missing
/// key is rejected during deserialization with a message naming it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
}

/// Request to update a user. Same shape as create: every field is
/// required and the stored record is overwritten wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            firstname: request.firstname,
            lastname: request.lastname,
            email: request.email,
            password: request.password,
            address: request.address,
            phone: request.phone,
        }
    }
}

impl From<UpdateUserRequest> for NewUser {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            firstname: request.firstname,
            lastname: request.lastname,
            email: request.email,
            password: request.password,
            address: request.address,
            phone: request.phone,
        }
    }
}

/// User response DTO for list/get: the password never appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub address: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            address: user.address,
            phone: user.phone,
        }
    }
}

/// Full user record echoed back from create and update. This is the only
/// place the stored password appears in a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecordResponse {
    pub id: UserId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub phone: String,
}

impl From<User> for UserRecordResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            password: user.password,
            address: user.address,
            phone: user.phone,
        }
    }
}

/// Confirmation returned by delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

impl DeleteUserResponse {
    /// Builds the confirmation message naming the deleted id.
    #[must_use]
    pub fn for_id(id: UserId) -> Self {
        Self {
            message: format!("User {} deleted successfully", id),
        }
    }
}
