use super::*;

/// Tests listing summaries of the bees a user belongs to.
///
/// Expected: Ok(Vec<BeeInfo>) with the managed and the joined bee, in creation order
#[tokio::test]
async fn lists_managed_and_joined_bees() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, managed) = factory::helpers::create_bee_with_manager(db).await?;
    let (_other, joined) = factory::helpers::create_bee_with_manager(db).await?;
    factory::helpers::create_bee_with_manager(db).await?;
    factory::bee_member::create_member(db, joined.id, user.id).await?;

    let service = BeeService::new(db, BeeCreationPolicy::default());
    let infos = service.fetch_infos(user.id).await?;

    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0].id, managed.id);
    assert_eq!(infos[0].title, managed.title);
    assert_eq!(infos[1].id, joined.id);
    assert_eq!(infos[1].pay, joined.pay);

    Ok(())
}

/// Tests listing for a user without any bee.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_without_memberships() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = BeeService::new(db, BeeCreationPolicy::default());

    assert!(service.fetch_infos(user.id).await?.is_empty());

    Ok(())
}
