//! Bee factory for creating test bee entities.

use chrono::{NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test bees with customizable fields.
///
/// Defaults match the standard creation rules: a 07:00 to 10:00 window and a pay of 2000.
pub struct BeeFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    start_hour: u32,
    end_hour: u32,
    pay: i32,
}

impl<'a> BeeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Bee {}", id),
            description: format!("Morning routine {}", id),
            start_hour: 7,
            end_hour: 10,
            pay: 2000,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn hours(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.start_hour = start_hour;
        self.end_hour = end_hour;
        self
    }

    pub fn pay(mut self, pay: i32) -> Self {
        self.pay = pay;
        self
    }

    pub async fn build(self) -> Result<entity::bee::Model, DbErr> {
        entity::bee::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(hour(self.start_hour)?),
            end_time: ActiveValue::Set(hour(self.end_hour)?),
            pay: ActiveValue::Set(self.pay),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

fn hour(hour: u32) -> Result<NaiveTime, DbErr> {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| DbErr::Custom(format!("invalid hour {}", hour)))
}

/// Creates a bee with default values.
pub async fn create_bee(db: &DatabaseConnection) -> Result<entity::bee::Model, DbErr> {
    BeeFactory::new(db).build().await
}
