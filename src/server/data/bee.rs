//! Bee data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::bee::{Bee, CreateBeeParam};

/// Repository providing database operations for bees.
pub struct BeeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BeeRepository<'a, C> {
    /// Creates a new BeeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `BeeRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new bee.
    ///
    /// Does not create any membership; callers pair this with a `BeeMemberRepository::create`
    /// for the manager inside the same transaction.
    ///
    /// # Arguments
    /// - `param` - Title, description, time window and pay of the bee
    ///
    /// # Returns
    /// - `Ok(Bee)` - The created bee
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateBeeParam) -> Result<Bee, DbErr> {
        let entity = entity::bee::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            pay: ActiveValue::Set(param.pay),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bee::from_entity(entity))
    }

    /// Finds a bee by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Bee))` - Bee found
    /// - `Ok(None)` - No bee with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, bee_id: i32) -> Result<Option<Bee>, DbErr> {
        let entity = entity::prelude::Bee::find_by_id(bee_id).one(self.db).await?;

        Ok(entity.map(Bee::from_entity))
    }

    /// Gets every bee the user is a member of, in any role.
    ///
    /// Results are ordered by bee ID, i.e. the order the bees were stored in.
    ///
    /// # Arguments
    /// - `user_id` - ID of the member
    ///
    /// # Returns
    /// - `Ok(Vec<Bee>)` - Bees of the user (empty if the user has none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_member(&self, user_id: i32) -> Result<Vec<Bee>, DbErr> {
        let entities = entity::prelude::Bee::find()
            .inner_join(entity::prelude::BeeMember)
            .filter(entity::bee_member::Column::UserId.eq(user_id))
            .order_by_asc(entity::bee::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Bee::from_entity).collect())
    }

    /// Deletes a bee row.
    ///
    /// Members and missions must be removed first, see `BeeMemberRepository::delete_by_bee` and
    /// `MissionRepository::delete_by_bee`.
    ///
    /// # Returns
    /// - `Ok(true)` - Bee deleted
    /// - `Ok(false)` - No bee with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, bee_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Bee::delete_by_id(bee_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
