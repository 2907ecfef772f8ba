use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    dto::{
        api::ErrorDto,
        auth::{LoginDto, SetupDto},
        user::UserDto,
    },
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::congregation::CreateCongregationParams,
    service::auth::{AuthService, SetupParams},
    state::AppState,
    util::parse::parse_time,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Perform first-time setup.
///
/// Creates the congregation and its first admin user. Only works while no
/// user exists and the submitted code matches the setup code printed to the
/// server log at startup. Logs the new admin in.
///
/// # Returns
/// - `201 Created` - Congregation and admin created, session started
/// - `401 Unauthorized` - Wrong, expired or consumed setup code
/// - `409 Conflict` - Setup was already completed
#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = AUTH_TAG,
    request_body = SetupDto,
    responses(
        (status = 201, description = "Setup completed", body = UserDto),
        (status = 400, description = "Invalid congregation settings", body = ErrorDto),
        (status = 401, description = "Invalid setup code", body = ErrorDto),
        (status = 409, description = "Setup already completed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    if !(0..=6).contains(&payload.congregation.meeting_weekday) {
        return Err(AppError::BadRequest(
            "Meeting weekday must be between 0 (Monday) and 6 (Sunday)".to_string(),
        ));
    }

    let meeting_time = parse_time(&payload.congregation.meeting_time)?;

    let user = auth_service
        .setup(
            &state.setup_codes,
            SetupParams {
                code: payload.code,
                email: payload.email,
                password: payload.password,
                name: payload.name,
                congregation: CreateCongregationParams {
                    name: payload.congregation.name,
                    city: payload.congregation.city,
                    meeting_weekday: payload.congregation.meeting_weekday,
                    meeting_time,
                },
            },
        )
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let user = auth_service.with_scopes(user).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.login(&payload.email, &payload.password).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    let user = auth_service.with_scopes(user).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out, clearing the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let user = AuthService::new(&state.db).with_scopes(user).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
