use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{SignInDto, SignUpDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{SignInParam, SignUpParam},
        service::user::UserService,
        state::AppState,
    },
};

/// POST /api/auth/sign-up - Register with a social login token
///
/// Creates the user for the email asserted by the token and signs them in.
///
/// # Returns
/// - `201 Created`: JSON UserDto of the new user
/// - `400 Bad Request`: Invalid token or nickname
/// - `409 Conflict`: Email already registered or nickname taken
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let user = user_service
        .sign_up(SignUpParam {
            provider: payload.provider,
            social_access_token: payload.social_access_token,
            nickname: payload.nickname,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/sign-in - Sign in with a social login token
///
/// # Returns
/// - `200 OK`: JSON UserDto of the signed-in user
/// - `400 Bad Request`: Invalid or expired token
/// - `404 Not Found`: No user registered with the token's email
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let user = user_service
        .sign_in(SignInParam {
            provider: payload.provider,
            social_access_token: payload.social_access_token,
        })
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/me - Get the signed-in user
///
/// # Returns
/// - `200 OK`: JSON UserDto
/// - `401 Unauthorized`: Not signed in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(user_id) = auth_session.get_user_id().await? {
        tracing::info!(user_id, "User signed out");
    }

    auth_session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}
