//! Mission domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::mission::MissionDto;

/// A member's proof of participation for one day of a bee.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    pub id: i32,
    pub bee_id: i32,
    pub user_id: i32,
    pub description: String,
    pub image_url: String,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Mission {
    pub fn from_entity(entity: entity::mission::Model) -> Self {
        Self {
            id: entity.id,
            bee_id: entity.bee_id,
            user_id: entity.user_id,
            description: entity.description,
            image_url: entity.image_url,
            target_date: entity.target_date,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            bee_id: self.bee_id,
            user_id: self.user_id,
            description: self.description,
            image_url: self.image_url,
            target_date: self.target_date,
            created_at: self.created_at,
        }
    }
}

/// Mission content submitted by a member.
#[derive(Debug, Clone)]
pub struct CreateMissionParam {
    pub description: String,
    pub image_url: String,
    /// Day the mission counts for; `None` means today (UTC).
    pub target_date: Option<NaiveDate>,
}

/// Row-level parameters for inserting a mission.
#[derive(Debug, Clone)]
pub struct InsertMissionParam {
    pub bee_id: i32,
    pub user_id: i32,
    pub description: String,
    pub image_url: String,
    pub target_date: NaiveDate,
}
