use crate::server::{
    error::{auth::AuthError, AppError},
    model::mission::CreateMissionParam,
    service::mission::MissionService,
};
use chrono::{NaiveDate, Utc};
use test_utils::{builder::TestBuilder, factory};


fn mission_param(target_date: Option<NaiveDate>) -> CreateMissionParam {
    CreateMissionParam {
        description: "Made the bed".to_string(),
        image_url: "https://images.example.com/bed.png".to_string(),
        target_date,
    }
}
