use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::{NicknameAvailabilityDto, NicknameQuery},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// GET /api/users/nickname - Check whether a nickname can be used
///
/// Does not require authentication; used by the sign-up form.
///
/// # Query Parameters
/// - `nickname`: Nickname to check
///
/// # Returns
/// - `200 OK`: JSON NicknameAvailabilityDto
pub async fn check_nickname(
    State(state): State<AppState>,
    Query(query): Query<NicknameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let availability = user_service.check_nickname(&query.nickname).await?;

    Ok((
        StatusCode::OK,
        Json(NicknameAvailabilityDto {
            nickname: availability.nickname,
            valid: availability.valid,
            available: availability.available,
        }),
    ))
}
