//! Mission factory for creating test mission entities.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test missions.
///
/// The target date defaults to today in UTC.
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    bee_id: i32,
    user_id: i32,
    description: String,
    image_url: String,
    target_date: NaiveDate,
}

impl<'a> MissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, bee_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            bee_id,
            user_id,
            description: format!("Mission {}", id),
            image_url: format!("https://images.example.com/mission/{}.png", id),
            target_date: Utc::now().date_naive(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn target_date(mut self, target_date: NaiveDate) -> Self {
        self.target_date = target_date;
        self
    }

    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            bee_id: ActiveValue::Set(self.bee_id),
            user_id: ActiveValue::Set(self.user_id),
            description: ActiveValue::Set(self.description),
            image_url: ActiveValue::Set(self.image_url),
            target_date: ActiveValue::Set(self.target_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mission for today with default values.
pub async fn create_mission(
    db: &DatabaseConnection,
    bee_id: i32,
    user_id: i32,
) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db, bee_id, user_id).build().await
}
