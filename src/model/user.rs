use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity provider that issued a social access token.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignUpDto {
    pub provider: SocialProvider,
    pub social_access_token: String,
    pub nickname: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignInDto {
    pub provider: SocialProvider,
    pub social_access_token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserDto {
    pub id: i32,
    pub nickname: String,
    pub email: String,
    pub provider: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NicknameQuery {
    pub nickname: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NicknameAvailabilityDto {
    pub nickname: String,
    pub valid: bool,
    pub available: bool,
}
