//! Bee member data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    bee::{BeeMember, CreateBeeMemberParam},
    user::User,
};

/// Repository providing database operations for bee memberships.
pub struct BeeMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BeeMemberRepository<'a, C> {
    /// Creates a new BeeMemberRepository instance.
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a membership.
    ///
    /// # Returns
    /// - `Ok(BeeMember)` - The created membership
    /// - `Err(DbErr)` - Database error, including a unique violation on (bee, user)
    pub async fn create(&self, param: CreateBeeMemberParam) -> Result<BeeMember, DbErr> {
        let entity = entity::bee_member::ActiveModel {
            bee_id: ActiveValue::Set(param.bee_id),
            user_id: ActiveValue::Set(param.user_id),
            role: ActiveValue::Set(param.role),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BeeMember::from_entity(entity))
    }

    /// Finds the membership of a user in a bee.
    ///
    /// # Returns
    /// - `Ok(Some(BeeMember))` - The user belongs to the bee
    /// - `Ok(None)` - The user is not a member
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, bee_id: i32, user_id: i32) -> Result<Option<BeeMember>, DbErr> {
        let entity = entity::prelude::BeeMember::find()
            .filter(entity::bee_member::Column::BeeId.eq(bee_id))
            .filter(entity::bee_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(entity.map(BeeMember::from_entity))
    }

    /// Gets all members of a bee paired with their user records, in join order.
    ///
    /// The user is `None` only if the row it references has vanished, which the
    /// cascading foreign key should prevent.
    pub async fn get_by_bee_with_users(
        &self,
        bee_id: i32,
    ) -> Result<Vec<(BeeMember, Option<User>)>, DbErr> {
        let rows = entity::prelude::BeeMember::find()
            .filter(entity::bee_member::Column::BeeId.eq(bee_id))
            .order_by_asc(entity::bee_member::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(member, user)| (BeeMember::from_entity(member), user.map(User::from_entity)))
            .collect())
    }

    /// Removes the membership of a user in a bee.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - The user was not a member
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, bee_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BeeMember::delete_many()
            .filter(entity::bee_member::Column::BeeId.eq(bee_id))
            .filter(entity::bee_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every membership of a bee.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of memberships removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_bee(&self, bee_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::BeeMember::delete_many()
            .filter(entity::bee_member::Column::BeeId.eq(bee_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
