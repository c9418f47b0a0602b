//! User service for business logic.
//!
//! This module provides the `UserService` for registering and signing in users through a
//! social login provider, and for nickname checks.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{
        normalize_nickname, CreateUserParam, NicknameAvailability, SignInParam, SignUpParam, User,
    },
    service::social::login_service_for,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a user with the email asserted by a social login token.
    ///
    /// # Arguments
    /// - `param` - Provider, its token and the desired nickname
    ///
    /// # Returns
    /// - `Ok(User)` - The new user
    /// - `Err(AppError::SocialLoginErr)` - Token expired or undecodable
    /// - `Err(AppError::BadRequest)` - Nickname too short or too long
    /// - `Err(AppError::Conflict)` - Email already registered or nickname taken
    pub async fn sign_up(&self, param: SignUpParam) -> Result<User, AppError> {
        let email = login_service_for(param.provider).extract_email(&param.social_access_token)?;

        let nickname = normalize_nickname(&param.nickname)
            .ok_or_else(|| AppError::BadRequest("Nickname must be 2 to 10 characters".to_string()))?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("User already registered".to_string()));
        }

        if user_repo.nickname_exists(&nickname).await? {
            return Err(AppError::Conflict("Nickname already in use".to_string()));
        }

        let user = user_repo
            .create(CreateUserParam {
                nickname,
                email,
                provider: param.provider,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Email or nickname already in use"))?;

        tracing::info!(user_id = user.id, "Registered user via {}", user.provider);

        Ok(user)
    }

    /// Resolves the user a social login token belongs to.
    ///
    /// # Returns
    /// - `Ok(User)` - The registered user with the token's email
    /// - `Err(AppError::SocialLoginErr)` - Token expired or undecodable
    /// - `Err(AppError::NotFound)` - No user registered with that email
    pub async fn sign_in(&self, param: SignInParam) -> Result<User, AppError> {
        let email = login_service_for(param.provider).extract_email(&param.social_access_token)?;

        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Reports whether a nickname could be used to sign up.
    pub async fn check_nickname(&self, nickname: &str) -> Result<NicknameAvailability, AppError> {
        let Some(normalized) = normalize_nickname(nickname) else {
            return Ok(NicknameAvailability {
                nickname: nickname.trim().to_string(),
                valid: false,
                available: false,
            });
        };

        let user_repo = UserRepository::new(self.db);
        let taken = user_repo.nickname_exists(&normalized).await?;

        Ok(NicknameAvailability {
            nickname: normalized,
            valid: true,
            available: !taken,
        })
    }
}
