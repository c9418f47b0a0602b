use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::mission::{CreateMissionDto, MissionQuery},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::mission::CreateMissionParam,
        service::mission::MissionService,
        state::AppState,
    },
};

/// POST /api/bees/{bee_id}/missions - Post a mission
///
/// # Authentication
/// Requires user to be signed in; membership is checked by the service
///
/// # Returns
/// - `201 Created`: JSON MissionDto
/// - `403 Forbidden`: Not a member of the bee
/// - `404 Not Found`: No such bee
pub async fn create_mission(
    State(state): State<AppState>,
    Path(bee_id): Path<i32>,
    session: Session,
    Json(payload): Json<CreateMissionDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let mission_service = MissionService::new(&state.db);
    let mission = mission_service
        .create(
            user.id,
            bee_id,
            CreateMissionParam {
                description: payload.description,
                image_url: payload.image_url,
                target_date: payload.target_date,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(mission.into_dto())))
}

/// GET /api/bees/{bee_id}/missions - List a day's missions of a bee
///
/// # Authentication
/// Requires the signed-in user to be a member of the bee
///
/// # Query Parameters
/// - `date`: Day to list as `YYYY-MM-DD`, defaults to today (UTC)
///
/// # Returns
/// - `200 OK`: JSON array of MissionDto
pub async fn get_missions(
    State(state): State<AppState>,
    Path(bee_id): Path<i32>,
    Query(query): Query<MissionQuery>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::BeeMember(bee_id)]).await?;

    let mission_service = MissionService::new(&state.db);
    let missions = mission_service.list(bee_id, query.date).await?;

    let missions_dto: Vec<_> = missions.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(missions_dto)))
}
