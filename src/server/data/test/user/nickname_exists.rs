use super::*;

/// Tests nickname lookup for a taken and a free nickname.
///
/// Expected: true for the stored nickname, false otherwise
#[tokio::test]
async fn reports_taken_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("dawn")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.nickname_exists("dawn").await?);
    assert!(!repo.nickname_exists("dusk").await?);

    Ok(())
}
