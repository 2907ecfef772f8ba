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
        duty::{CreateDutyAssignmentDto, DutyAssignmentDto, UpdateDutyAssignmentDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::duty::{CreateDutyAssignmentParams, UpdateDutyAssignmentParams},
    service::duty::DutyService,
    state::AppState,
    util::parse::parse_date,
};

/// Tag for grouping mechanical-duty endpoints in OpenAPI documentation
pub static DUTY_TAG: &str = "duty";

/// Get duty assignments in a date range.
#[utoipa::path(
    get,
    path = "/api/duties",
    tag = DUTY_TAG,
    params(
        ("from" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Duty assignments", body = Vec<DutyAssignmentDto>),
        (status = 400, description = "Malformed range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'duties' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_duties(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Duties])
        .await?;

    let service = DutyService::new(&state.db);

    let (from, to) = params.parse()?;
    let duties = service.get_in_range(user.congregation_id, from, to).await?;

    Ok((
        StatusCode::OK,
        Json(duties.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Assign a publisher to a duty on a date.
#[utoipa::path(
    post,
    path = "/api/duties",
    tag = DUTY_TAG,
    request_body = CreateDutyAssignmentDto,
    responses(
        (status = 201, description = "Duty assigned", body = DutyAssignmentDto),
        (status = 400, description = "Unknown duty or publisher", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'duties' scope", body = ErrorDto),
        (status = 409, description = "Duty already covered on that date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_duty(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDutyAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Duties])
        .await?;

    let service = DutyService::new(&state.db);

    let assignment = service
        .create(CreateDutyAssignmentParams {
            congregation_id: user.congregation_id,
            date: parse_date(&payload.date)?,
            duty: payload.duty,
            publisher_id: payload.publisher_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(assignment.into_dto())))
}

/// Update a duty assignment.
#[utoipa::path(
    put,
    path = "/api/duties/{assignment_id}",
    tag = DUTY_TAG,
    params(
        ("assignment_id" = i32, Path, description = "Duty assignment ID")
    ),
    request_body = UpdateDutyAssignmentDto,
    responses(
        (status = 200, description = "Duty updated", body = DutyAssignmentDto),
        (status = 400, description = "Unknown duty or publisher", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'duties' scope", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 409, description = "Duty already covered on that date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_duty(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
    Json(payload): Json<UpdateDutyAssignmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Duties])
        .await?;

    let service = DutyService::new(&state.db);

    let assignment = service
        .update(UpdateDutyAssignmentParams {
            id: assignment_id,
            congregation_id: user.congregation_id,
            date: parse_date(&payload.date)?,
            duty: payload.duty,
            publisher_id: payload.publisher_id,
        })
        .await?;

    match assignment {
        Some(assignment) => Ok((StatusCode::OK, Json(assignment.into_dto()))),
        None => Err(AppError::NotFound("Assignment not found".to_string())),
    }
}

/// Delete a duty assignment.
#[utoipa::path(
    delete,
    path = "/api/duties/{assignment_id}",
    tag = DUTY_TAG,
    params(
        ("assignment_id" = i32, Path, description = "Duty assignment ID")
    ),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'duties' scope", body = ErrorDto),
        (status = 404, description = "Assignment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_duty(
    State(state): State<AppState>,
    session: Session,
    Path(assignment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Duties])
        .await?;

    let service = DutyService::new(&state.db);

    let deleted = service.delete(assignment_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Assignment not found".to_string()))
    }
}
