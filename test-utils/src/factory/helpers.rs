//! Shared helpers for the factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Next value of a process-wide counter used to keep factory defaults unique.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a bee, and a manager membership linking them.
///
/// # Returns
/// - `Ok((manager, bee))` - The managing user and the bee
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bee_with_manager(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::bee::Model), DbErr> {
    let manager = crate::factory::user::create_user(db).await?;
    let bee = crate::factory::bee::create_bee(db).await?;
    crate::factory::bee_member::create_manager(db, bee.id, manager.id).await?;

    Ok((manager, bee))
}
