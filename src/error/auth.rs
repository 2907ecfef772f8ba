use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dto::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No user in session")]
    NotLoggedIn,

    /// The session references a user id that no longer exists.
    ///
    /// Can happen when an admin deletes a user that still holds a live
    /// session. Results in a 401 Unauthorized response.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// Email/password combination did not match.
    ///
    /// Results in a 401 Unauthorized response with a message that does not
    /// reveal whether the email exists.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The one-time setup code was wrong, expired or already consumed.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid setup code")]
    InvalidSetupCode,

    /// The user lacks the permission scope required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} denied access to '{scope}'")]
    AccessDenied { user_id: i32, scope: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Session and credential problems map to 401 Unauthorized; missing
/// permission scopes map to 403 Forbidden. Client-facing messages stay
/// generic; the precise cause is available to server-side logs via `Display`.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidSetupCode => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid or expired setup code".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { .. } => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have access to this resource".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
