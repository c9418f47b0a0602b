//! Mission service for business logic.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{bee::BeeRepository, bee_member::BeeMemberRepository, mission::MissionRepository},
    error::{auth::AuthError, AppError},
    model::mission::{CreateMissionParam, InsertMissionParam, Mission},
};

/// Service providing business logic for missions.
pub struct MissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    /// Creates a new MissionService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a mission for a member of a bee.
    ///
    /// # Arguments
    /// - `user_id` - ID of the posting user
    /// - `bee_id` - Bee the mission belongs to
    /// - `param` - Mission content; a missing date means today (UTC)
    ///
    /// # Returns
    /// - `Ok(Mission)` - The stored mission
    /// - `Err(AppError::NotFound)` - No bee with that ID
    /// - `Err(AppError::AuthErr(AccessDenied))` - The user is not a member of the bee
    pub async fn create(
        &self,
        user_id: i32,
        bee_id: i32,
        param: CreateMissionParam,
    ) -> Result<Mission, AppError> {
        let bee_repo = BeeRepository::new(self.db);
        let member_repo = BeeMemberRepository::new(self.db);
        let mission_repo = MissionRepository::new(self.db);

        if bee_repo.find_by_id(bee_id).await?.is_none() {
            return Err(AppError::NotFound("Bee not found".to_string()));
        }

        if member_repo.find(bee_id, user_id).await?.is_none() {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("User attempted to post a mission to bee {} without being a member", bee_id),
            )
            .into());
        }

        let mission = mission_repo
            .create(InsertMissionParam {
                bee_id,
                user_id,
                description: param.description,
                image_url: param.image_url,
                target_date: param.target_date.unwrap_or_else(|| Utc::now().date_naive()),
            })
            .await?;

        Ok(mission)
    }

    /// Lists the missions of a bee for a day.
    ///
    /// # Arguments
    /// - `bee_id` - Bee to list
    /// - `target_date` - Day to list; `None` means today (UTC)
    ///
    /// # Returns
    /// - `Ok(Vec<Mission>)` - Missions in the order they were posted
    /// - `Err(AppError::NotFound)` - No bee with that ID
    pub async fn list(
        &self,
        bee_id: i32,
        target_date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Mission>, AppError> {
        let bee_repo = BeeRepository::new(self.db);
        let mission_repo = MissionRepository::new(self.db);

        if bee_repo.find_by_id(bee_id).await?.is_none() {
            return Err(AppError::NotFound("Bee not found".to_string()));
        }

        let date = target_date.unwrap_or_else(|| Utc::now().date_naive());
        let missions = mission_repo.get_by_bee_and_date(bee_id, date).await?;

        Ok(missions)
    }
}
