use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateMissionDto {
    pub description: String,
    pub image_url: String,
    /// Day the mission counts for, defaults to today (UTC).
    #[serde(default)]
    pub target_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MissionQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct MissionDto {
    pub id: i32,
    pub bee_id: i32,
    pub user_id: i32,
    pub description: String,
    pub image_url: String,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
