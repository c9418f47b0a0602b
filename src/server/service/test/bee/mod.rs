use crate::server::{
    error::AppError,
    model::bee::{BeeCreation, BeeCreationRequest, PolicyViolation},
    service::bee::{policy::BeeCreationPolicy, BeeService},
};
use entity::bee_member::MemberRole;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, log::LogCapture};

mod delete;
mod fetch_infos;

fn request(start_hour: i32, end_hour: i32, pay: i32) -> BeeCreationRequest {
    BeeCreationRequest {
        title: "Early birds".to_string(),
        description: "Up before seven".to_string(),
        start_hour,
        end_hour,
        pay,
    }
}
