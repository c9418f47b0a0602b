use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request did not come from a signed-in client. Results in a 401 Unauthorized
    /// response.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User ID {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is signed in but lacks the membership required by the route.
    ///
    /// Results in a 403 Forbidden response. The message is logged, not returned.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` → 401 Unauthorized with "Sign in required"
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Sign in required"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
