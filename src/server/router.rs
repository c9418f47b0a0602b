use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, logout, sign_in, sign_up},
        bee::{create_bee, delete_bee, get_bee, get_bees, join_bee, withdraw_bee},
        mission::{create_mission, get_missions},
        user::check_nickname,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/sign-up", post(sign_up))
        .route("/api/auth/sign-in", post(sign_in))
        .route("/api/auth/me", get(get_user))
        .route("/api/auth/logout", get(logout))
        .route("/api/users/nickname", get(check_nickname))
        .route("/api/bees", post(create_bee).get(get_bees))
        .route("/api/bees/{bee_id}", get(get_bee).delete(delete_bee))
        .route("/api/bees/{bee_id}/join", post(join_bee))
        .route("/api/bees/{bee_id}/members/me", delete(withdraw_bee))
        .route(
            "/api/bees/{bee_id}/missions",
            post(create_mission).get(get_missions),
        )
}
