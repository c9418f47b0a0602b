use super::*;

/// Tests deleting a bee with members and missions.
///
/// Verifies that the bee, its memberships and its missions are all removed while another
/// bee keeps its data.
///
/// Expected: Ok(()) and no rows left for the deleted bee
#[tokio::test]
async fn deletes_bee_with_children() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let member = factory::user::create_user(db).await?;
    factory::bee_member::create_member(db, bee.id, member.id).await?;
    factory::mission::create_mission(db, bee.id, member.id).await?;
    factory::mission::create_mission(db, bee.id, manager.id).await?;

    let (other_manager, other_bee) = factory::helpers::create_bee_with_manager(db).await?;
    factory::mission::create_mission(db, other_bee.id, other_manager.id).await?;

    let service = BeeService::new(db, BeeCreationPolicy::default());
    service.delete(bee.id).await?;

    assert!(matches!(
        service.get_detail(bee.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(entity::prelude::Bee::find().count(db).await?, 1);
    assert_eq!(entity::prelude::BeeMember::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Mission::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a bee that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_nonexistent_bee() -> Result<(), AppError> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BeeService::new(db, BeeCreationPolicy::default());
    let result = service.delete(5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
