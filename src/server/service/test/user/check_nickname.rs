use super::*;

/// Tests checking a free and a taken nickname.
///
/// Expected: both valid, only the free one available
#[tokio::test]
async fn reports_availability() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .nickname("taken")
        .build()
        .await?;

    let service = UserService::new(db);

    let taken = service.check_nickname("taken").await?;
    assert!(taken.valid);
    assert!(!taken.available);

    let free = service.check_nickname(" free ").await?;
    assert_eq!(free.nickname, "free");
    assert!(free.valid);
    assert!(free.available);

    Ok(())
}

/// Tests checking a nickname that breaks the length rule.
///
/// Expected: neither valid nor available
#[tokio::test]
async fn reports_invalid_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db);
    let result = service.check_nickname("x").await?;

    assert!(!result.valid);
    assert!(!result.available);

    Ok(())
}
