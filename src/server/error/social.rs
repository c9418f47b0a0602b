//! Failures turning a social login token into an email address.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Log event code attached to every social login failure.
pub const SOCIAL_LOGIN_LOG_EVENT: &str = "SocialLoginServiceProcessError";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SocialLoginError {
    /// The token's `exp` claim lies in the past.
    #[error("social token expired")]
    InvalidAccessToken,

    /// The token does not have a payload segment, or the segment is not base64
    /// encoded JSON.
    #[error("malformed social token: {0}")]
    MalformedToken(String),

    /// The payload decoded but `email` or `exp` is absent or has the wrong type.
    #[error("social token payload missing field: {0}")]
    MissingField(String),
}

impl SocialLoginError {
    /// Machine-readable code for log pipelines.
    pub fn log_event(&self) -> &'static str {
        SOCIAL_LOGIN_LOG_EVENT
    }
}

/// All social login failures are the client's fault and share one response so the
/// exact decode failure is not leaked.
impl IntoResponse for SocialLoginError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Invalid social access token".to_string(),
            }),
        )
            .into_response()
    }
}
