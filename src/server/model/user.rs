//! User domain models and parameters.
//!
//! A user is identified by the email address asserted by a social login provider.

use chrono::{DateTime, Utc};

use crate::model::user::{SocialProvider, UserDto};

/// Shortest nickname accepted, in characters.
pub const NICKNAME_MIN_CHARS: usize = 2;
/// Longest nickname accepted, in characters.
pub const NICKNAME_MAX_CHARS: usize = 10;

/// Registered application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key.
    pub id: i32,
    /// Display name chosen at sign-up.
    pub nickname: String,
    /// Email asserted by the social login provider.
    pub email: String,
    /// Name of the provider that issued the identity.
    pub provider: String,
    /// When the user signed up.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            nickname: self.nickname,
            email: self.email,
            provider: self.provider,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            nickname: entity.nickname,
            email: entity.email,
            provider: entity.provider,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub nickname: String,
    pub email: String,
    pub provider: SocialProvider,
}

/// Parameters for registering through a social provider.
#[derive(Debug, Clone)]
pub struct SignUpParam {
    pub provider: SocialProvider,
    pub social_access_token: String,
    pub nickname: String,
}

/// Parameters for signing in through a social provider.
#[derive(Debug, Clone)]
pub struct SignInParam {
    pub provider: SocialProvider,
    pub social_access_token: String,
}

/// Result of checking a nickname before sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknameAvailability {
    /// The trimmed nickname that was checked.
    pub nickname: String,
    /// Whether the nickname satisfies the length rule.
    pub valid: bool,
    /// Whether no other user has the nickname.
    pub available: bool,
}

/// Trims the nickname and checks its length in characters.
///
/// # Returns
/// - `Some(String)` - The trimmed nickname, within bounds
/// - `None` - Too short or too long after trimming
pub fn normalize_nickname(nickname: &str) -> Option<String> {
    let trimmed = nickname.trim();
    let len = trimmed.chars().count();

    (NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS)
        .contains(&len)
        .then(|| trimmed.to_string())
}
