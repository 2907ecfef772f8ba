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
        program::{CreateMeetingProgramDto, MeetingProgramDto, UpdateMeetingProgramDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::program::{
        CreateMeetingProgramParams, CreateProgramPartParams, UpdateMeetingProgramParams,
    },
    service::program::ProgramService,
    state::AppState,
    util::parse::parse_date,
};

/// Tag for grouping meeting-program endpoints in OpenAPI documentation
pub static PROGRAM_TAG: &str = "program";

/// Get weekly meeting programs in a range, parts included.
#[utoipa::path(
    get,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    params(
        ("from" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Programs", body = Vec<MeetingProgramDto>),
        (status = 400, description = "Malformed range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'programs' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_programs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Programs])
        .await?;

    let service = ProgramService::new(&state.db);

    let (from, to) = params.parse()?;
    let programs = service.get_in_range(user.congregation_id, from, to).await?;

    Ok((
        StatusCode::OK,
        Json(
            programs
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a single program with its parts.
#[utoipa::path(
    get,
    path = "/api/programs/{program_id}",
    tag = PROGRAM_TAG,
    params(
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program", body = MeetingProgramDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'programs' scope", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_program_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(program_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Programs])
        .await?;

    let service = ProgramService::new(&state.db);

    match service.get_by_id(program_id, user.congregation_id).await? {
        Some(program) => Ok((StatusCode::OK, Json(program.into_dto()))),
        None => Err(AppError::NotFound("Program not found".to_string())),
    }
}

/// Create a weekly program with its parts.
///
/// Part positions follow the order of the `parts` array.
#[utoipa::path(
    post,
    path = "/api/programs",
    tag = PROGRAM_TAG,
    request_body = CreateMeetingProgramDto,
    responses(
        (status = 201, description = "Program created", body = MeetingProgramDto),
        (status = 400, description = "Invalid week, section or duration", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'programs' scope", body = ErrorDto),
        (status = 409, description = "Week already has a program", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_program(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMeetingProgramDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Programs])
        .await?;

    let service = ProgramService::new(&state.db);

    let parts = payload
        .parts
        .into_iter()
        .enumerate()
        .map(|(position, part)| CreateProgramPartParams {
            section: part.section,
            title: part.title,
            duration_minutes: part.duration_minutes,
            assignee_id: part.assignee_id,
            assistant_id: part.assistant_id,
            position: position as i32,
        })
        .collect();

    let program = service
        .create(CreateMeetingProgramParams {
            congregation_id: user.congregation_id,
            week_start: parse_date(&payload.week_start)?,
            chairman_id: payload.chairman_id,
            parts,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(program.into_dto())))
}

/// Update a program, replacing its part list.
#[utoipa::path(
    put,
    path = "/api/programs/{program_id}",
    tag = PROGRAM_TAG,
    params(
        ("program_id" = i32, Path, description = "Program ID")
    ),
    request_body = UpdateMeetingProgramDto,
    responses(
        (status = 200, description = "Program updated", body = MeetingProgramDto),
        (status = 400, description = "Invalid week, section or duration", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'programs' scope", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 409, description = "Week already has a program", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_program(
    State(state): State<AppState>,
    session: Session,
    Path(program_id): Path<i32>,
    Json(payload): Json<UpdateMeetingProgramDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Programs])
        .await?;

    let service = ProgramService::new(&state.db);

    let parts = payload
        .parts
        .into_iter()
        .enumerate()
        .map(|(position, part)| CreateProgramPartParams {
            section: part.section,
            title: part.title,
            duration_minutes: part.duration_minutes,
            assignee_id: part.assignee_id,
            assistant_id: part.assistant_id,
            position: position as i32,
        })
        .collect();

    let program = service
        .update(UpdateMeetingProgramParams {
            id: program_id,
            congregation_id: user.congregation_id,
            week_start: parse_date(&payload.week_start)?,
            chairman_id: payload.chairman_id,
            parts,
        })
        .await?;

    match program {
        Some(program) => Ok((StatusCode::OK, Json(program.into_dto()))),
        None => Err(AppError::NotFound("Program not found".to_string())),
    }
}

/// Delete a program and its parts.
#[utoipa::path(
    delete,
    path = "/api/programs/{program_id}",
    tag = PROGRAM_TAG,
    params(
        ("program_id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 204, description = "Program deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'programs' scope", body = ErrorDto),
        (status = 404, description = "Program not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_program(
    State(state): State<AppState>,
    session: Session,
    Path(program_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Programs])
        .await?;

    let service = ProgramService::new(&state.db);

    let deleted = service.delete(program_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Program not found".to_string()))
    }
}
