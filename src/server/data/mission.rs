//! Mission data repository for database operations.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::mission::{InsertMissionParam, Mission};

/// Repository providing database operations for missions.
pub struct MissionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MissionRepository<'a, C> {
    /// Creates a new MissionRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a mission.
    ///
    /// # Returns
    /// - `Ok(Mission)` - The created mission
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: InsertMissionParam) -> Result<Mission, DbErr> {
        let entity = entity::mission::ActiveModel {
            bee_id: ActiveValue::Set(param.bee_id),
            user_id: ActiveValue::Set(param.user_id),
            description: ActiveValue::Set(param.description),
            image_url: ActiveValue::Set(param.image_url),
            target_date: ActiveValue::Set(param.target_date),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Mission::from_entity(entity))
    }

    /// Gets the missions of a bee for one day, in the order they were posted.
    pub async fn get_by_bee_and_date(
        &self,
        bee_id: i32,
        target_date: NaiveDate,
    ) -> Result<Vec<Mission>, DbErr> {
        let entities = entity::prelude::Mission::find()
            .filter(entity::mission::Column::BeeId.eq(bee_id))
            .filter(entity::mission::Column::TargetDate.eq(target_date))
            .order_by_asc(entity::mission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Mission::from_entity).collect())
    }

    /// Removes every mission of a bee.
    pub async fn delete_by_bee(&self, bee_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Mission::delete_many()
            .filter(entity::mission::Column::BeeId.eq(bee_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
