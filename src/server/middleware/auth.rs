//! Authentication guard for protected routes.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{bee_member::BeeMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Requirement a signed-in user must meet on top of being signed in.
pub enum Permission {
    /// User belongs to the bee, in any role.
    BeeMember(i32),
    /// User manages the bee.
    BeeManager(i32),
}

/// Resolves the signed-in user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the signed-in user if they satisfy every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Signed-in user with all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is not met
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let member_repo = BeeMemberRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::BeeMember(bee_id) => {
                    if member_repo.find(*bee_id, user_id).await?.is_none() {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User is not a member of bee {}", bee_id),
                        )
                        .into());
                    }
                }
                Permission::BeeManager(bee_id) => {
                    let is_manager = member_repo
                        .find(*bee_id, user_id)
                        .await?
                        .is_some_and(|member| member.is_manager());

                    if !is_manager {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("User is not the manager of bee {}", bee_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
