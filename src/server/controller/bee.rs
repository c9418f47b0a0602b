use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, bee::CreateBeeDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bee::{BeeCreation, BeeCreationRequest, BeeInfo},
        service::bee::BeeService,
        state::AppState,
    },
};

/// POST /api/bees - Create a bee managed by the signed-in user
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `201 Created`: JSON BeeInfoDto of the new bee
/// - `400 Bad Request`: Request broke a creation rule, body names the rule
pub async fn create_bee(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBeeDto>,
) -> Result<Response, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let bee_service = BeeService::new(&state.db, state.bee_policy);
    let outcome = bee_service
        .create(
            user.id,
            BeeCreationRequest {
                title: payload.title,
                description: payload.description,
                start_hour: payload.start_hour,
                end_hour: payload.end_hour,
                pay: payload.pay,
            },
        )
        .await?;

    if !outcome.is_created() {
        tracing::debug!(user_id = user.id, "Bee creation request rejected");
    }

    let response = match outcome {
        BeeCreation::Created(bee) => {
            (StatusCode::CREATED, Json(BeeInfo::from(bee).into_dto())).into_response()
        }
        BeeCreation::Rejected(violation) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: violation.to_string(),
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// GET /api/bees - List the bees the signed-in user belongs to
///
/// # Returns
/// - `200 OK`: JSON array of BeeInfoDto
pub async fn get_bees(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let bee_service = BeeService::new(&state.db, state.bee_policy);
    let bees = bee_service.fetch_infos(user.id).await?;

    let bees_dto: Vec<_> = bees.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bees_dto)))
}

/// GET /api/bees/{bee_id} - Get a bee and its members
///
/// # Returns
/// - `200 OK`: JSON BeeDetailDto
/// - `404 Not Found`: No such bee
pub async fn get_bee(
    State(state): State<AppState>,
    Path(bee_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[]).await?;

    let bee_service = BeeService::new(&state.db, state.bee_policy);
    let detail = bee_service.get_detail(bee_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// DELETE /api/bees/{bee_id} - Delete a bee
///
/// # Authentication
/// Requires the signed-in user to manage the bee
///
/// # Returns
/// - `204 No Content`: Bee deleted
/// - `403 Forbidden`: User does not manage the bee
pub async fn delete_bee(
    State(state): State<AppState>,
    Path(bee_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::BeeManager(bee_id)]).await?;

    let bee_service = BeeService::new(&state.db, state.bee_policy);
    bee_service.delete(bee_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/bees/{bee_id}/join - Join a bee as a regular member
///
/// # Returns
/// - `201 Created`: Joined
/// - `404 Not Found`: No such bee
/// - `409 Conflict`: Already a member
pub async fn join_bee(
    State(state): State<AppState>,
    Path(bee_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let bee_service = BeeService::new(&state.db, state.bee_policy);
    bee_service.join(user.id, bee_id).await?;

    Ok(StatusCode::CREATED)
}

/// DELETE /api/bees/{bee_id}/members/me - Leave a bee
///
/// # Returns
/// - `204 No Content`: Left the bee
/// - `400 Bad Request`: The manager cannot leave
/// - `404 Not Found`: Not a member
pub async fn withdraw_bee(
    State(state): State<AppState>,
    Path(bee_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let bee_service = BeeService::new(&state.db, state.bee_policy);
    bee_service.withdraw(user.id, bee_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
