use super::*;

/// Tests inserting a new user.
///
/// Verifies that the stored row carries the given nickname, email and the provider's
/// lowercase name.
///
/// Expected: Ok(User) with a generated ID
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            nickname: "sunrise".to_string(),
            email: "sunrise@gmail.com".to_string(),
            provider: SocialProvider::Google,
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.nickname, "sunrise");
    assert_eq!(user.email, "sunrise@gmail.com");
    assert_eq!(user.provider, "google");

    Ok(())
}

/// Tests that email uniqueness is enforced by the table.
///
/// Expected: Err(DbErr) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@gmail.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            nickname: "another".to_string(),
            email: "taken@gmail.com".to_string(),
            provider: SocialProvider::Google,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that nickname uniqueness is enforced by the table.
///
/// Expected: Err(DbErr) reporting a unique constraint violation on the second insert
#[tokio::test]
async fn rejects_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("sunrise")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            nickname: "sunrise".to_string(),
            email: "other@gmail.com".to_string(),
            provider: SocialProvider::Google,
        })
        .await;

    let err = result.expect_err("duplicate nickname should fail");
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
