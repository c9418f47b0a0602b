use crate::server::{data::mission::MissionRepository, model::mission::InsertMissionParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_bee;
mod get_by_bee_and_date;
