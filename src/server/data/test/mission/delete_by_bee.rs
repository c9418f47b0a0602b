use super::*;

/// Tests removing all missions of one bee.
///
/// Expected: Ok(2) and missions of other bees untouched
#[tokio::test]
async fn removes_missions_of_bee_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let (other_manager, other_bee) = factory::helpers::create_bee_with_manager(db).await?;
    let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    for _ in 0..2 {
        factory::mission::MissionFactory::new(db, bee.id, manager.id)
            .target_date(day)
            .build()
            .await?;
    }
    factory::mission::MissionFactory::new(db, other_bee.id, other_manager.id)
        .target_date(day)
        .build()
        .await?;

    let repo = MissionRepository::new(db);

    assert_eq!(repo.delete_by_bee(bee.id).await?, 2);
    assert!(repo.get_by_bee_and_date(bee.id, day).await?.is_empty());
    assert_eq!(repo.get_by_bee_and_date(other_bee.id, day).await?.len(), 1);

    Ok(())
}
