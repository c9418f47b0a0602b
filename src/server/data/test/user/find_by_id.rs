use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User)) with matching data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .nickname("early")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_id(created.id).await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.nickname, "early");

    Ok(())
}

/// Tests querying for a non-existent user ID.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
