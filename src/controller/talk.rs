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
        talk::{
            CreateSpeakerDto, CreateTalkDto, CreateTalkScheduleDto, SpeakerDto, TalkDto,
            TalkScheduleDto, UpdateSpeakerDto, UpdateTalkDto, UpdateTalkScheduleDto,
        },
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::talk::{
        CreateSpeakerParams, CreateTalkParams, CreateTalkScheduleParams, UpdateSpeakerParams,
        UpdateTalkParams, UpdateTalkScheduleParams,
    },
    service::talk::TalkService,
    state::AppState,
    util::parse::parse_date,
};

/// Tag for grouping public-talk endpoints in OpenAPI documentation
pub static TALK_TAG: &str = "talk";

// Speakers

/// Get all visiting speakers.
#[utoipa::path(
    get,
    path = "/api/speakers",
    tag = TALK_TAG,
    responses(
        (status = 200, description = "Speakers", body = Vec<SpeakerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_speakers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let speakers = service.get_speakers(user.congregation_id).await?;

    Ok((
        StatusCode::OK,
        Json(
            speakers
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Register a visiting speaker.
#[utoipa::path(
    post,
    path = "/api/speakers",
    tag = TALK_TAG,
    request_body = CreateSpeakerDto,
    responses(
        (status = 201, description = "Speaker created", body = SpeakerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_speaker(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSpeakerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let speaker = service
        .create_speaker(CreateSpeakerParams {
            congregation_id: user.congregation_id,
            name: payload.name,
            congregation_name: payload.congregation_name,
            phone: payload.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(speaker.into_dto())))
}

/// Update a visiting speaker.
#[utoipa::path(
    put,
    path = "/api/speakers/{speaker_id}",
    tag = TALK_TAG,
    params(
        ("speaker_id" = i32, Path, description = "Speaker ID")
    ),
    request_body = UpdateSpeakerDto,
    responses(
        (status = 200, description = "Speaker updated", body = SpeakerDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_speaker(
    State(state): State<AppState>,
    session: Session,
    Path(speaker_id): Path<i32>,
    Json(payload): Json<UpdateSpeakerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let speaker = service
        .update_speaker(UpdateSpeakerParams {
            id: speaker_id,
            congregation_id: user.congregation_id,
            name: payload.name,
            congregation_name: payload.congregation_name,
            phone: payload.phone,
        })
        .await?;

    match speaker {
        Some(speaker) => Ok((StatusCode::OK, Json(speaker.into_dto()))),
        None => Err(AppError::NotFound("Speaker not found".to_string())),
    }
}

/// Remove a visiting speaker and their scheduled talks.
#[utoipa::path(
    delete,
    path = "/api/speakers/{speaker_id}",
    tag = TALK_TAG,
    params(
        ("speaker_id" = i32, Path, description = "Speaker ID")
    ),
    responses(
        (status = 204, description = "Speaker deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 404, description = "Speaker not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_speaker(
    State(state): State<AppState>,
    session: Session,
    Path(speaker_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let deleted = service
        .delete_speaker(speaker_id, user.congregation_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Speaker not found".to_string()))
    }
}

// Talk outlines

/// Get the talk outline catalog.
#[utoipa::path(
    get,
    path = "/api/talks",
    tag = TALK_TAG,
    responses(
        (status = 200, description = "Talk outlines", body = Vec<TalkDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let talks = service.get_talks(user.congregation_id).await?;

    Ok((
        StatusCode::OK,
        Json(talks.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a talk outline to the catalog.
#[utoipa::path(
    post,
    path = "/api/talks",
    tag = TALK_TAG,
    request_body = CreateTalkDto,
    responses(
        (status = 201, description = "Outline added", body = TalkDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 409, description = "Outline number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_talk(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTalkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let talk = service
        .create_talk(CreateTalkParams {
            congregation_id: user.congregation_id,
            number: payload.number,
            theme: payload.theme,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(talk.into_dto())))
}

/// Update a talk outline.
#[utoipa::path(
    put,
    path = "/api/talks/{talk_id}",
    tag = TALK_TAG,
    params(
        ("talk_id" = i32, Path, description = "Talk ID")
    ),
    request_body = UpdateTalkDto,
    responses(
        (status = 200, description = "Outline updated", body = TalkDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 404, description = "Outline not found", body = ErrorDto),
        (status = 409, description = "Outline number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_talk(
    State(state): State<AppState>,
    session: Session,
    Path(talk_id): Path<i32>,
    Json(payload): Json<UpdateTalkDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let talk = service
        .update_talk(UpdateTalkParams {
            id: talk_id,
            congregation_id: user.congregation_id,
            number: payload.number,
            theme: payload.theme,
        })
        .await?;

    match talk {
        Some(talk) => Ok((StatusCode::OK, Json(talk.into_dto()))),
        None => Err(AppError::NotFound("Talk not found".to_string())),
    }
}

/// Remove a talk outline from the catalog.
#[utoipa::path(
    delete,
    path = "/api/talks/{talk_id}",
    tag = TALK_TAG,
    params(
        ("talk_id" = i32, Path, description = "Talk ID")
    ),
    responses(
        (status = 204, description = "Outline deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 404, description = "Outline not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_talk(
    State(state): State<AppState>,
    session: Session,
    Path(talk_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let deleted = service.delete_talk(talk_id, user.congregation_id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Talk not found".to_string()))
    }
}

// Schedule

/// Get scheduled public talks in a date range.
#[utoipa::path(
    get,
    path = "/api/talk-schedule",
    tag = TALK_TAG,
    params(
        ("from" = Option<String>, Query, description = "Range start, YYYY-MM-DD"),
        ("to" = Option<String>, Query, description = "Range end, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Scheduled talks", body = Vec<TalkScheduleDto>),
        (status = 400, description = "Malformed range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_talk_schedule(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let (from, to) = params.parse()?;
    let schedule = service.get_schedule(user.congregation_id, from, to).await?;

    Ok((
        StatusCode::OK,
        Json(
            schedule
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Schedule a public talk.
///
/// The date must fall on the congregation's meeting weekday and only one
/// talk fits per date.
#[utoipa::path(
    post,
    path = "/api/talk-schedule",
    tag = TALK_TAG,
    request_body = CreateTalkScheduleDto,
    responses(
        (status = 201, description = "Talk scheduled", body = TalkScheduleDto),
        (status = 400, description = "Wrong weekday, unknown speaker or outline", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 409, description = "Date already has a talk", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_talk_schedule(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTalkScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let scheduled = service
        .create_schedule(CreateTalkScheduleParams {
            congregation_id: user.congregation_id,
            date: parse_date(&payload.date)?,
            speaker_id: payload.speaker_id,
            talk_id: payload.talk_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(scheduled.into_dto())))
}

/// Update a scheduled public talk.
#[utoipa::path(
    put,
    path = "/api/talk-schedule/{schedule_id}",
    tag = TALK_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule entry ID")
    ),
    request_body = UpdateTalkScheduleDto,
    responses(
        (status = 200, description = "Schedule updated", body = TalkScheduleDto),
        (status = 400, description = "Wrong weekday, unknown speaker or outline", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 409, description = "Date already has a talk", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_talk_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
    Json(payload): Json<UpdateTalkScheduleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let scheduled = service
        .update_schedule(UpdateTalkScheduleParams {
            id: schedule_id,
            congregation_id: user.congregation_id,
            date: parse_date(&payload.date)?,
            speaker_id: payload.speaker_id,
            talk_id: payload.talk_id,
        })
        .await?;

    match scheduled {
        Some(scheduled) => Ok((StatusCode::OK, Json(scheduled.into_dto()))),
        None => Err(AppError::NotFound("Schedule entry not found".to_string())),
    }
}

/// Cancel a scheduled public talk.
#[utoipa::path(
    delete,
    path = "/api/talk-schedule/{schedule_id}",
    tag = TALK_TAG,
    params(
        ("schedule_id" = i32, Path, description = "Schedule entry ID")
    ),
    responses(
        (status = 204, description = "Schedule entry deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing 'talks' scope", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_talk_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(schedule_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Talks])
        .await?;

    let service = TalkService::new(&state.db);

    let deleted = service
        .delete_schedule(schedule_id, user.congregation_id)
        .await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Schedule entry not found".to_string()))
    }
}
