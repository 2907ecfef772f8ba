use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::PaginationParams,
    dto::{
        api::ErrorDto,
        user::{CreateUserDto, PaginatedUsersDto, UpdatePermissionsDto, UserDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users of the congregation with their permission scopes.
///
/// # Access Control
/// - `Admin` - Only admins manage user accounts
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Paginated users", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let users = service
        .get_paginated(user.congregation_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Create a user account with an initial permission scope set.
///
/// # Access Control
/// - `Admin` - Only admins manage user accounts
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Unknown permission scope", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let created = service
        .create(
            user.congregation_id,
            payload.email,
            &payload.password,
            payload.name,
            payload.admin,
            payload.scopes,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Replace a user's permission scopes.
///
/// # Access Control
/// - `Admin` - Only admins manage user accounts
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/permissions",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdatePermissionsDto,
    responses(
        (status = 200, description = "Permissions replaced", body = UserDto),
        (status = 400, description = "Unknown permission scope", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_permissions(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdatePermissionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let updated = service
        .update_permissions(user.congregation_id, user_id, payload.scopes)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete a user account.
///
/// Deleting your own account is rejected so a congregation cannot lock
/// itself out of user management.
///
/// # Access Control
/// - `Admin` - Only admins manage user accounts
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Attempted self-deletion", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = UserService::new(&state.db);

    let deleted = service
        .delete(user.congregation_id, user_id, user.id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
