use super::*;

/// Tests storing a mission for a member.
///
/// Expected: Ok(Mission) with the given content and date
#[tokio::test]
async fn creates_mission() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_bee_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
    let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let repo = MissionRepository::new(db);
    let mission = repo
        .create(InsertMissionParam {
            bee_id: bee.id,
            user_id: manager.id,
            description: "Sunrise run".to_string(),
            image_url: "https://images.example.com/run.png".to_string(),
            target_date: date,
        })
        .await?;

    assert!(mission.id > 0);
    assert_eq!(mission.bee_id, bee.id);
    assert_eq!(mission.user_id, manager.id);
    assert_eq!(mission.description, "Sunrise run");
    assert_eq!(mission.image_url, "https://images.example.com/run.png");
    assert_eq!(mission.target_date, date);

    Ok(())
}
