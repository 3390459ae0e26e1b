use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use account_master_core::AppError;
use account_master_models::{
    CreateUserDto, ErrorResponse, MessageResponse, ProfileId, UpdateUserDto, UserResponse,
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn parse_id(raw: &str) -> Result<ProfileId, AppError> {
    raw.parse()
        .map_err(|_| AppError::bad_request(anyhow!("Invalid user id")))
}

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
    ),
    security(("basic_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    Ok(Json(UserService::get_users(&state.store)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("basic_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let user = UserService::get_user(&state.store, id)?;
    Ok(Json(user))
}

/// Create a user (admin only)
#[utoipa::path(
    post,
    path = "/user",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Malformed or incomplete body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
    ),
    security(("basic_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = UserService::create_user(&state.store, dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user (admin only)
///
/// Only the fields present in the body change.
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User id (UUID)")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid id or malformed body", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
    ),
    security(("basic_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UserResponse>, AppError> {
    let id = parse_id(&id)?;
    let user = UserService::update_user(&state.store, id, dto).await?;
    Ok(Json(user))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = String, Path, description = "User id (UUID)")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 403, description = "Caller is not an administrator", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("basic_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    UserService::delete_user(&state.store, id)?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
