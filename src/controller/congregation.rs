use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        congregation::{CongregationDto, UpdateCongregationDto},
    },
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::congregation::UpdateCongregationParams,
    service::congregation::CongregationService,
    state::AppState,
    util::parse::parse_time,
};

/// Tag for grouping congregation endpoints in OpenAPI documentation
pub static CONGREGATION_TAG: &str = "congregation";

/// Get the caller's congregation settings.
#[utoipa::path(
    get,
    path = "/api/congregation",
    tag = CONGREGATION_TAG,
    responses(
        (status = 200, description = "Congregation settings", body = CongregationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_congregation(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CongregationService::new(&state.db);

    let congregation = service.get(user.congregation_id).await?;

    Ok((StatusCode::OK, Json(congregation.into_dto())))
}

/// Update the congregation's name, city and meeting settings.
///
/// # Access Control
/// - `Admin` - Only admins change congregation settings
#[utoipa::path(
    put,
    path = "/api/congregation",
    tag = CONGREGATION_TAG,
    request_body = UpdateCongregationDto,
    responses(
        (status = 200, description = "Congregation updated", body = CongregationDto),
        (status = 400, description = "Invalid weekday or time", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_congregation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateCongregationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let service = CongregationService::new(&state.db);

    let congregation = service
        .update(UpdateCongregationParams {
            id: user.congregation_id,
            name: payload.name,
            city: payload.city,
            meeting_weekday: payload.meeting_weekday,
            meeting_time: parse_time(&payload.meeting_time)?,
        })
        .await?;

    Ok((StatusCode::OK, Json(congregation.into_dto())))
}
