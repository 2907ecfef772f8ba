use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        publisher::{
            CreatePublisherDto, PaginatedPublishersDto, PublisherDto, UpdatePublisherDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::publisher::{CreatePublisherParams, UpdatePublisherParams},
    service::publisher::PublisherService,
    state::AppState,
};

/// Tag for grouping publisher endpoints in OpenAPI documentation
pub static PUBLISHER_TAG: &str = "publisher";

#[derive(Deserialize)]
pub struct PublisherListParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
    pub group_id: Option<i32>,
}

fn default_entries() -> u64 {
    10
}

/// Get paginated publishers, optionally filtered to one group.
#[utoipa::path(
    get,
    path = "/api/publishers",
    tag = PUBLISHER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("group_id" = Option<i32>, Query, description = "Filter by group")
    ),
    responses(
        (status = 200, description = "Paginated publishers", body = PaginatedPublishersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publishers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PublisherListParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = PublisherService::new(&state.db);

    let publishers = service
        .get_paginated(
            user.congregation_id,
            params.group_id,
            params.page,
            params.entries,
        )
        .await?;

    Ok((StatusCode::OK, Json(publishers.into_dto())))
}

/// Get a single publisher.
#[utoipa::path(
    get,
    path = "/api/publishers/{publisher_id}",
    tag = PUBLISHER_TAG,
    params(
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 200, description = "Publisher", body = PublisherDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_publisher_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(publisher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = PublisherService::new(&state.db);

    match service.get_by_id(publisher_id, user.congregation_id).await? {
        Some(publisher) => Ok((StatusCode::OK, Json(publisher.into_dto()))),
        None => Err(AppError::NotFound("Publisher not found".to_string())),
    }
}

/// Create a publisher.
#[utoipa::path(
    post,
    path = "/api/publishers",
    tag = PUBLISHER_TAG,
    request_body = CreatePublisherDto,
    responses(
        (status = 201, description = "Publisher created", body = PublisherDto),
        (status = 400, description = "Unknown privilege or group", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreatePublisherDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = PublisherService::new(&state.db);

    let publisher = service
        .create(CreatePublisherParams {
            congregation_id: user.congregation_id,
            group_id: payload.group_id,
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            privilege: payload.privilege,
            pioneer: payload.pioneer,
            active: payload.active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(publisher.into_dto())))
}

/// Update a publisher.
#[utoipa::path(
    put,
    path = "/api/publishers/{publisher_id}",
    tag = PUBLISHER_TAG,
    params(
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    request_body = UpdatePublisherDto,
    responses(
        (status = 200, description = "Publisher updated", body = PublisherDto),
        (status = 400, description = "Unknown privilege or group", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    session: Session,
    Path(publisher_id): Path<i32>,
    Json(payload): Json<UpdatePublisherDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = PublisherService::new(&state.db);

    let publisher = service
        .update(UpdatePublisherParams {
            id: publisher_id,
            congregation_id: user.congregation_id,
            group_id: payload.group_id,
            name: payload.name,
            phone: payload.phone,
            email: payload.email,
            privilege: payload.privilege,
            pioneer: payload.pioneer,
            active: payload.active,
        })
        .await?;

    match publisher {
        Some(publisher) => Ok((StatusCode::OK, Json(publisher.into_dto()))),
        None => Err(AppError::NotFound("Publisher not found".to_string())),
    }
}

/// Delete a publisher and all of their assignments.
#[utoipa::path(
    delete,
    path = "/api/publishers/{publisher_id}",
    tag = PUBLISHER_TAG,
    params(
        ("publisher_id" = i32, Path, description = "Publisher ID")
    ),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'publishers' scope", body = ErrorDto),
        (status = 404, description = "Publisher not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    session: Session,
    Path(publisher_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Publishers])
        .await?;

    let service = PublisherService::new(&state.db);

    let deleted = service.delete(publisher_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Publisher not found".to_string()))
    }
}
