use super::*;

/// Tests deleting a bee without children.
///
/// Expected: Ok(true) and the bee is gone
#[tokio::test]
async fn deletes_existing_bee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bee = factory::bee::create_bee(db).await?;

    let repo = BeeRepository::new(db);

    assert!(repo.delete(bee.id).await?);
    assert!(repo.find_by_id(bee.id).await?.is_none());

    Ok(())
}

/// Tests deleting a bee ID that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_bee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BeeRepository::new(db);

    assert!(!repo.delete(7).await?);

    Ok(())
}
