//! Membership factory linking users to bees.

use chrono::Utc;
use entity::bee_member::MemberRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership with the given role.
pub async fn create_bee_member(
    db: &DatabaseConnection,
    bee_id: i32,
    user_id: i32,
    role: MemberRole,
) -> Result<entity::bee_member::Model, DbErr> {
    entity::bee_member::ActiveModel {
        bee_id: ActiveValue::Set(bee_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Makes the user the manager of the bee.
pub async fn create_manager(
    db: &DatabaseConnection,
    bee_id: i32,
    user_id: i32,
) -> Result<entity::bee_member::Model, DbErr> {
    create_bee_member(db, bee_id, user_id, MemberRole::Manager).await
}

/// Makes the user an ordinary member of the bee.
pub async fn create_member(
    db: &DatabaseConnection,
    bee_id: i32,
    user_id: i32,
) -> Result<entity::bee_member::Model, DbErr> {
    create_bee_member(db, bee_id, user_id, MemberRole::Member).await
}
