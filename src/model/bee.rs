use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateBeeDto {
    pub title: String,
    pub description: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub pay: i32,
}

/// Summary row returned by the bee listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BeeInfoDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pay: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum MemberRoleDto {
    Manager,
    Member,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BeeMemberDto {
    pub user_id: i32,
    pub nickname: String,
    pub role: MemberRoleDto,
    pub joined_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct BeeDetailDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pay: i32,
    pub created_at: DateTime<Utc>,
    pub members: Vec<BeeMemberDto>,
}
