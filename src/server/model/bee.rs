//! Bee domain models, parameters and creation outcome.

use chrono::{DateTime, NaiveTime, Utc};
use entity::bee_member::MemberRole;
use thiserror::Error;

use crate::model::bee::{BeeDetailDto, BeeInfoDto, BeeMemberDto, MemberRoleDto};

/// Scheduled group activity.
#[derive(Debug, Clone, PartialEq)]
pub struct Bee {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Start of the daily time window.
    pub start_time: NaiveTime,
    /// End of the daily time window.
    pub end_time: NaiveTime,
    /// Amount each member pays.
    pub pay: i32,
    pub created_at: DateTime<Utc>,
}

impl Bee {
    /// Converts an entity model to a bee domain model at the repository boundary.
    pub fn from_entity(entity: entity::bee::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            pay: entity.pay,
            created_at: entity.created_at,
        }
    }
}

/// Summary of a bee as shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BeeInfo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pay: i32,
}

impl BeeInfo {
    pub fn into_dto(self) -> BeeInfoDto {
        BeeInfoDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            pay: self.pay,
        }
    }
}

impl From<Bee> for BeeInfo {
    fn from(bee: Bee) -> Self {
        Self {
            id: bee.id,
            title: bee.title,
            description: bee.description,
            start_time: bee.start_time,
            end_time: bee.end_time,
            pay: bee.pay,
        }
    }
}

/// Membership of a user in a bee.
#[derive(Debug, Clone, PartialEq)]
pub struct BeeMember {
    pub id: i32,
    pub bee_id: i32,
    pub user_id: i32,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

impl BeeMember {
    pub fn from_entity(entity: entity::bee_member::Model) -> Self {
        Self {
            id: entity.id,
            bee_id: entity.bee_id,
            user_id: entity.user_id,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_manager(&self) -> bool {
        self.role == MemberRole::Manager
    }
}

/// Member of a bee together with the member's nickname.
#[derive(Debug, Clone, PartialEq)]
pub struct BeeMemberInfo {
    pub user_id: i32,
    pub nickname: String,
    pub role: MemberRole,
    pub joined_at: DateTime<Utc>,
}

impl BeeMemberInfo {
    pub fn into_dto(self) -> BeeMemberDto {
        BeeMemberDto {
            user_id: self.user_id,
            nickname: self.nickname,
            role: match self.role {
                MemberRole::Manager => MemberRoleDto::Manager,
                MemberRole::Member => MemberRoleDto::Member,
            },
            joined_at: self.joined_at,
        }
    }
}

/// Bee with all of its members.
#[derive(Debug, Clone, PartialEq)]
pub struct BeeDetail {
    pub bee: Bee,
    pub members: Vec<BeeMemberInfo>,
}

impl BeeDetail {
    pub fn into_dto(self) -> BeeDetailDto {
        BeeDetailDto {
            id: self.bee.id,
            title: self.bee.title,
            description: self.bee.description,
            start_time: self.bee.start_time,
            end_time: self.bee.end_time,
            pay: self.bee.pay,
            created_at: self.bee.created_at,
            members: self.members.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

/// Request to create a bee, as submitted by its future manager.
///
/// Hours are hours of the day; the policy decides which values are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeeCreationRequest {
    pub title: String,
    pub description: String,
    pub start_hour: i32,
    pub end_hour: i32,
    pub pay: i32,
}

/// Parameters for inserting a bee row once the request has been accepted.
#[derive(Debug, Clone)]
pub struct CreateBeeParam {
    pub title: String,
    pub description: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub pay: i32,
}

/// Parameters for inserting a bee member row.
#[derive(Debug, Clone)]
pub struct CreateBeeMemberParam {
    pub bee_id: i32,
    pub user_id: i32,
    pub role: MemberRole,
}

/// Business rule a creation request failed.
///
/// Rejections are expected outcomes, not system errors. The messages are stable and are
/// what ends up in the warning log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("not match startTime: required {required}, requested {requested}")]
    StartTimeMismatch { required: i32, requested: i32 },

    #[error("not match endTime: required {required}, requested {requested}")]
    EndTimeMismatch { required: i32, requested: i32 },

    #[error("not match pay: required {required}, requested {requested}")]
    PayMismatch { required: i32, requested: i32 },
}

/// Outcome of a bee creation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum BeeCreation {
    /// The bee was stored and its creator became its manager.
    Created(Bee),
    /// The request broke a policy rule; nothing was stored.
    Rejected(PolicyViolation),
}

impl BeeCreation {
    /// Whether the bee was stored.
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
