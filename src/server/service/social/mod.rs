//! Social login: turning a provider-issued token into an email address.
//!
//! Each identity provider implements [`SocialLoginService`]. The rest of the application only
//! sees the trait and picks an implementation with [`login_service_for`].

pub mod google;

use serde::Deserialize;

use crate::{
    model::user::SocialProvider, server::error::social::SocialLoginError,
    server::service::social::google::GoogleLoginService,
};

/// Claims read from a social token payload.
///
/// Both fields are required; any other claim in the payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialTokenPayload {
    /// Email the provider vouches for.
    pub email: String,
    /// Expiry in seconds since the Unix epoch.
    pub exp: i64,
}

/// Capability shared by every identity provider.
pub trait SocialLoginService: Send + Sync {
    /// Validates the token and returns the email it asserts, unchanged.
    fn extract_email(&self, token: &str) -> Result<String, SocialLoginError>;
}

/// Returns the login service for a provider.
pub fn login_service_for(provider: SocialProvider) -> Box<dyn SocialLoginService> {
    match provider {
        SocialProvider::Google => Box::new(GoogleLoginService::new()),
    }
}

/// Current time in seconds since the Unix epoch.
pub fn system_clock() -> i64 {
    chrono::Utc::now().timestamp()
}
