use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::group::{CreateGroupParams, UpdateGroupParams},
    service::group::GroupService,
    state::AppState,
};

/// Tag for grouping field-service-group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Get all field service groups with member counts.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Groups", body = Vec<GroupDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = GroupService::new(&state.db);

    let groups = service.get_all(user.congregation_id).await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a field service group.
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = GroupService::new(&state.db);

    let group = service
        .create(CreateGroupParams {
            congregation_id: user.congregation_id,
            name: payload.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Rename a field service group.
#[utoipa::path(
    put,
    path = "/api/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
    Json(payload): Json<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = GroupService::new(&state.db);

    let group = service
        .update(UpdateGroupParams {
            id: group_id,
            congregation_id: user.congregation_id,
            name: payload.name,
        })
        .await?;

    match group {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(AppError::NotFound("Group not found".to_string())),
    }
}

/// Delete a field service group.
///
/// Member publishers are kept; they just lose their group.
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = GroupService::new(&state.db);

    let deleted = service.delete(group_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Group not found".to_string()))
    }
}
