use super::*;

/// Tests listing the missions of a bee for one day.
///
/// Verifies that missions of other days and of other bees are excluded and that the
/// remaining missions come back in posting order.
///
/// Expected: Ok(Vec) with the two matching missions in order
#[tokio::test]
async fn filters_by_bee_and_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let (other_manager, other_bee) = factory::helpers::create_bee_with_manager(db).await?;

    let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
    let next_day = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();

    let first = factory::mission::MissionFactory::new(db, bee.id, manager.id)
        .target_date(day)
        .build()
        .await?;
    factory::mission::MissionFactory::new(db, bee.id, manager.id)
        .target_date(next_day)
        .build()
        .await?;
    factory::mission::MissionFactory::new(db, other_bee.id, other_manager.id)
        .target_date(day)
        .build()
        .await?;
    let second = factory::mission::MissionFactory::new(db, bee.id, manager.id)
        .target_date(day)
        .build()
        .await?;

    let repo = MissionRepository::new(db);
    let missions = repo.get_by_bee_and_date(bee.id, day).await?;

    let ids: Vec<i32> = missions.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a day without missions.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_day_without_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    factory::mission::MissionFactory::new(db, bee.id, manager.id)
        .target_date(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
        .build()
        .await?;

    let repo = MissionRepository::new(db);
    let missions = repo
        .get_by_bee_and_date(bee.id, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .await?;

    assert!(missions.is_empty());

    Ok(())
}
