//! User factory for creating test user entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Defaults:
/// - nickname: `"user{id}"`
/// - email: `"user{id}@gmail.com"`
/// - provider: `"google"`
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    nickname: String,
    email: String,
    provider: String,
}

impl<'a> UserFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nickname: format!("user{}", id),
            email: format!("user{}@gmail.com", id),
            provider: "google".to_string(),
        }
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            nickname: ActiveValue::Set(self.nickname),
            email: ActiveValue::Set(self.email),
            provider: ActiveValue::Set(self.provider),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
