//! User CRUD controller.

use crate::{
    extractors::ApiJson,
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use roster_core::{RosterError, UserId};
use roster_service::{
    CreateUserRequest, DeleteUserResponse, UpdateUserRequest, UserRecordResponse, UserResponse,
};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/all", get(list_users))
        .route("/:id", get(get_user))
        .route("/update/:id", put(update_user))
        .route("/delete/:id", delete(delete_user))
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRecordResponse>), AppError> {
    debug!("Create user request: {}", request.email);

    let response = state.user_service.create_user(request).await?;
    Ok(created(response))
}

/// List all users.
async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let response = state.user_service.list_users().await?;
    ok(response)
}

/// Get a user by ID.
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<UserResponse> {
    debug!("Get user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.get_user(user_id).await?;
    ok(response)
}

/// Overwrite a user record.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> ApiResult<UserRecordResponse> {
    debug!("Update user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.update_user(user_id, request).await?;
    ok(response)
}

/// Delete a user.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<DeleteUserResponse> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let response = state.user_service.delete_user(user_id).await?;
    ok(response)
}

/// Parses the id path parameter. A value that does not parse as the
/// store's key type cannot match any record, so it reports not-found
/// naming the given id.
fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|_| AppError(RosterError::not_found(id)))
}
