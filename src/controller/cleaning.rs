use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::RangeParams,
    dto::{
        api::ErrorDto,
        cleaning::{
            CleaningAssignmentDto, CreateCleaningAssignmentDto, UpdateCleaningAssignmentDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::cleaning::{CreateCleaningAssignmentParams, UpdateCleaningAssignmentParams},
    service::cleaning::CleaningService,
    state::AppState,
    util::parse::parse_date,
};

/// Tag for grouping cleaning-roster endpoints in OpenAPI documentation
pub static CLEANING_TAG: &str = "cleaning";

/// Get cleaning weeks in a date range.
#[utoipa::path(
    get,
    path = "/api/cleaning",
    tag = CLEANING_TAG,
    params(
        ("from" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Cleaning weeks", body = Vec<CleaningAssignmentDto>),
        (status = 400, description = "Malformed range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'cleaning' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cleaning(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cleaning])
        .await?;

    let service = CleaningService::new(&state.db);

    let (from, to) = params.parse()?;
    let weeks = service.get_in_range(user.congregation_id, from, to).await?;

    Ok((
        StatusCode::OK,
        Json(weeks.into_iter().map(|w| w.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Assign a group to a cleaning week.
#[utoipa::path(
    post,
    path = "/api/cleaning",
    tag = CLEANING_TAG,
    request_body = CreateCleaningAssignmentDto,
    responses(
        (status = 201, description = "Week assigned", body = CleaningAssignmentDto),
        (status = 400, description = "Week start not a Monday, or unknown group", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'cleaning' scope", body = ErrorDto),
        (status = 409, description = "Week already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_cleaning(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCleaningAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cleaning])
        .await?;

    let service = CleaningService::new(&state.db);

    let assignment = service
        .create(CreateCleaningAssignmentParams {
            congregation_id: user.congregation_id,
            week_start: parse_date(&payload.week_start)?,
            group_id: payload.group_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// Update a cleaning week.
#[utoipa::path(
    put,
    path = "/api/cleaning/{assignment_id}",
    tag = CLEANING_TAG,
    params(
        ("assignment_id" = i32, Path, description = "Cleaning assignment ID")
    ),
    request_body = UpdateCleaningAssignmentDto,
    responses(
        (status = 200, description = "Week updated", body = CleaningAssignmentDto),
        (status = 400, description = "Week start not a Monday, or unknown group", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'cleaning' scope", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 409, description = "Week already assigned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cleaning(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
    Json(payload): Json<UpdateCleaningAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cleaning])
        .await?;

    let service = CleaningService::new(&state.db);

    let assignment = service
        .update(UpdateCleaningAssignmentParams {
            id: assignment_id,
            congregation_id: user.congregation_id,
            week_start: parse_date(&payload.week_start)?,
            group_id: payload.group_id,
        })
        .await?;

    match assignment {
        Some(assignment) => Ok((StatusCode::OK, Json(assignment.into_dto()))),
        None => Err(AppError::NotFound("Assignment not found".to_string())),
    }
}

/// Delete a cleaning week.
#[utoipa::path(
    delete,
    path = "/api/cleaning/{assignment_id}",
    tag = CLEANING_TAG,
    params(
        ("assignment_id" = i32, Path, description = "Cleaning assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'cleaning' scope", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_cleaning(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Cleaning])
        .await?;

    let service = CleaningService::new(&state.db);

    let deleted = service.delete(assignment_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Assignment not found".to_string()))
    }
}
