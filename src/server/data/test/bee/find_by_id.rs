use super::*;

/// Tests finding a stored bee.
///
/// Expected: Ok(Some(Bee)) with the stored values
#[tokio::test]
async fn finds_existing_bee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::bee::BeeFactory::new(db)
        .title("Sunrise club")
        .pay(3000)
        .build()
        .await?;

    let repo = BeeRepository::new(db);
    let bee = repo.find_by_id(created.id).await?.unwrap();

    assert_eq!(bee.id, created.id);
    assert_eq!(bee.title, "Sunrise club");
    assert_eq!(bee.pay, 3000);

    Ok(())
}

/// Tests querying a bee ID that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_bee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeeRepository::new(db);

    assert!(repo.find_by_id(42).await?.is_none());

    Ok(())
}
