use super::*;

/// Tests looking up the membership of a user in a bee.
///
/// Expected: Some for the member, None for a user who only belongs to another bee
#[tokio::test]
async fn finds_membership_only_in_matching_bee() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let (other_manager, _other_bee) = factory::helpers::create_bee_with_manager(db).await?;

    let repo = BeeMemberRepository::new(db);

    let member = repo.find(bee.id, manager.id).await?;
    assert!(member.is_some());
    assert_eq!(member.unwrap().role, MemberRole::Manager);

    assert!(repo.find(bee.id, other_manager.id).await?.is_none());

    Ok(())
}
