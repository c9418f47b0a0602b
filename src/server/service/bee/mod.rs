//! Bee service for business logic.
//!
//! This module provides the `BeeService` which gates bee creation on the
//! [`BeeCreationPolicy`](policy::BeeCreationPolicy) and manages memberships.

pub mod policy;

use chrono::NaiveTime;
use entity::bee_member::MemberRole;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        bee::BeeRepository, bee_member::BeeMemberRepository, mission::MissionRepository,
        user::UserRepository,
    },
    error::{internal::InternalError, AppError},
    model::bee::{
        BeeCreation, BeeCreationRequest, BeeDetail, BeeInfo, BeeMember, BeeMemberInfo,
        CreateBeeMemberParam, CreateBeeParam,
    },
    service::bee::policy::BeeCreationPolicy,
};

/// Service providing business logic for bees and their members.
pub struct BeeService<'a> {
    db: &'a DatabaseConnection,
    policy: BeeCreationPolicy,
}

impl<'a> BeeService<'a> {
    /// Creates a new BeeService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `policy` - Rules new bees are checked against
    ///
    /// # Returns
    /// - `BeeService` - New service instance
    pub fn new(db: &'a DatabaseConnection, policy: BeeCreationPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a bee managed by its creator.
    ///
    /// Validates the request against the policy first. A rejected request is logged at warn
    /// level and returned as `BeeCreation::Rejected` without touching the database. An accepted
    /// request inserts the bee and the creator's `Manager` membership in one transaction.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the user creating the bee
    /// - `request` - Requested title, description, hours and pay
    ///
    /// # Returns
    /// - `Ok(BeeCreation::Created(Bee))` - Bee stored, creator is its manager
    /// - `Ok(BeeCreation::Rejected(PolicyViolation))` - Request broke a policy rule
    /// - `Err(AppError::NotFound)` - Owner does not exist
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn create(
        &self,
        owner_id: i32,
        request: BeeCreationRequest,
    ) -> Result<BeeCreation, AppError> {
        if let Err(violation) = self.policy.validate(&request) {
            tracing::warn!(owner_id, "Rejected bee creation: {}", violation);
            return Ok(BeeCreation::Rejected(violation));
        }

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(owner_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let param = CreateBeeParam {
            title: request.title,
            description: request.description,
            start_time: hour_to_time(request.start_hour)?,
            end_time: hour_to_time(request.end_hour)?,
            pay: request.pay,
        };

        let txn = self.db.begin().await?;

        let inserted = async {
            let bee = BeeRepository::new(&txn).create(param).await?;
            BeeMemberRepository::new(&txn)
                .create(CreateBeeMemberParam {
                    bee_id: bee.id,
                    user_id: owner_id,
                    role: MemberRole::Manager,
                })
                .await?;

            Ok::<_, DbErr>(bee)
        }
        .await;

        let bee = match inserted {
            Ok(bee) => bee,
            Err(err) => {
                txn.rollback().await?;
                return Err(err.into());
            }
        };

        txn.commit().await?;

        tracing::info!(bee_id = bee.id, owner_id, "Created bee {}", bee.title);

        Ok(BeeCreation::Created(bee))
    }

    /// Lists summaries of every bee the user belongs to.
    ///
    /// # Returns
    /// - `Ok(Vec<BeeInfo>)` - Bees in the order they were stored (empty if none)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn fetch_infos(&self, user_id: i32) -> Result<Vec<BeeInfo>, AppError> {
        let bee_repo = BeeRepository::new(self.db);
        let bees = bee_repo.get_by_member(user_id).await?;

        Ok(bees.into_iter().map(BeeInfo::from).collect())
    }

    /// Gets a bee with all of its members.
    ///
    /// # Returns
    /// - `Ok(BeeDetail)` - Bee and members in join order
    /// - `Err(AppError::NotFound)` - No bee with that ID
    /// - `Err(AppError::InternalErr)` - A membership references a missing user
    pub async fn get_detail(&self, bee_id: i32) -> Result<BeeDetail, AppError> {
        let bee_repo = BeeRepository::new(self.db);
        let member_repo = BeeMemberRepository::new(self.db);

        let bee = bee_repo
            .find_by_id(bee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Bee not found".to_string()))?;

        let members = member_repo
            .get_by_bee_with_users(bee_id)
            .await?
            .into_iter()
            .map(|(member, user)| {
                let user = user.ok_or(InternalError::MemberWithoutUser {
                    member_id: member.id,
                    user_id: member.user_id,
                })?;

                Ok(BeeMemberInfo {
                    user_id: user.id,
                    nickname: user.nickname,
                    role: member.role,
                    joined_at: member.created_at,
                })
            })
            .collect::<Result<Vec<_>, InternalError>>()?;

        Ok(BeeDetail { bee, members })
    }

    /// Adds a user to a bee as a regular member.
    ///
    /// # Returns
    /// - `Ok(BeeMember)` - The new membership
    /// - `Err(AppError::NotFound)` - No bee with that ID
    /// - `Err(AppError::Conflict)` - The user already belongs to the bee
    pub async fn join(&self, user_id: i32, bee_id: i32) -> Result<BeeMember, AppError> {
        let bee_repo = BeeRepository::new(self.db);
        let member_repo = BeeMemberRepository::new(self.db);

        if bee_repo.find_by_id(bee_id).await?.is_none() {
            return Err(AppError::NotFound("Bee not found".to_string()));
        }

        if member_repo.find(bee_id, user_id).await?.is_some() {
            return Err(AppError::Conflict("Already a member of this bee".to_string()));
        }

        let member = member_repo
            .create(CreateBeeMemberParam {
                bee_id,
                user_id,
                role: MemberRole::Member,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Already a member of this bee"))?;

        Ok(member)
    }

    /// Removes a regular member from a bee.
    ///
    /// The manager cannot leave their own bee; they delete it instead.
    ///
    /// # Returns
    /// - `Ok(())` - Membership removed
    /// - `Err(AppError::NotFound)` - The user is not a member of the bee
    /// - `Err(AppError::BadRequest)` - The user manages the bee
    pub async fn withdraw(&self, user_id: i32, bee_id: i32) -> Result<(), AppError> {
        let member_repo = BeeMemberRepository::new(self.db);

        let Some(member) = member_repo.find(bee_id, user_id).await? else {
            return Err(AppError::NotFound("Not a member of this bee".to_string()));
        };

        if member.is_manager() {
            return Err(AppError::BadRequest(
                "The manager cannot withdraw from their bee".to_string(),
            ));
        }

        member_repo.delete(bee_id, user_id).await?;

        Ok(())
    }

    /// Deletes a bee together with its memberships and missions.
    ///
    /// Callers are expected to have checked that the requester manages the bee.
    ///
    /// # Returns
    /// - `Ok(())` - Bee deleted
    /// - `Err(AppError::NotFound)` - No bee with that ID
    pub async fn delete(&self, bee_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        // SQLite only enforces foreign keys when asked to, so children are removed explicitly
        MissionRepository::new(&txn).delete_by_bee(bee_id).await?;
        BeeMemberRepository::new(&txn).delete_by_bee(bee_id).await?;
        let deleted = BeeRepository::new(&txn).delete(bee_id).await?;

        if !deleted {
            txn.rollback().await?;
            return Err(AppError::NotFound("Bee not found".to_string()));
        }

        txn.commit().await?;

        Ok(())
    }
}

/// Converts an hour of the day into the start of that hour.
fn hour_to_time(hour: i32) -> Result<NaiveTime, InternalError> {
    u32::try_from(hour)
        .ok()
        .and_then(|h| NaiveTime::from_hms_opt(h, 0, 0))
        .ok_or(InternalError::InvalidHourOfDay { hour })
}
