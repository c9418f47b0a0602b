use super::*;

/// Tests listing the members of a bee with their users.
///
/// Verifies that members come back in join order paired with their user record, and that
/// members of other bees are excluded.
///
/// Expected: Ok(Vec) with manager first, then the joined member
#[tokio::test]
async fn returns_members_in_join_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let member = factory::user::UserFactory::new(db)
        .nickname("joiner")
        .build()
        .await?;
    factory::bee_member::create_member(db, bee.id, member.id).await?;
    factory::helpers::create_bee_with_manager(db).await?;

    let repo = BeeMemberRepository::new(db);
    let rows = repo.get_by_bee_with_users(bee.id).await?;

    assert_eq!(rows.len(), 2);

    let (first, first_user) = &rows[0];
    assert_eq!(first.user_id, manager.id);
    assert_eq!(first.role, MemberRole::Manager);
    assert_eq!(first_user.as_ref().unwrap().id, manager.id);

    let (second, second_user) = &rows[1];
    assert_eq!(second.user_id, member.id);
    assert_eq!(second.role, MemberRole::Member);
    assert_eq!(second_user.as_ref().unwrap().nickname, "joiner");

    Ok(())
}

/// Tests listing the members of a bee nobody joined.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_bee_without_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let bee = factory::bee::create_bee(db).await?;

    let repo = BeeMemberRepository::new(db);

    assert!(repo.get_by_bee_with_users(bee.id).await?.is_empty());

    Ok(())
}
