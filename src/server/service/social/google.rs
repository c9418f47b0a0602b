//! Google ID token handling.
//!
//! Only the payload segment of the token is read. The signature is not verified.

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine,
};

use crate::server::{
    error::social::SocialLoginError,
    service::social::{system_clock, SocialLoginService, SocialTokenPayload},
};

const LENIENT_PADDING: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// base64url, the encoding issued tokens use.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_PADDING);

/// Standard alphabet, accepted for issuers that encode payloads that way.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_PADDING);

/// Google social login.
///
/// Holds the clock used for the expiry check so tests can pin the current time.
pub struct GoogleLoginService {
    now: fn() -> i64,
}

impl GoogleLoginService {
    /// Creates a service reading the system clock.
    pub fn new() -> Self {
        Self { now: system_clock }
    }

    /// Creates a service with a custom clock returning epoch seconds.
    pub fn with_clock(now: fn() -> i64) -> Self {
        Self { now }
    }
}

impl Default for GoogleLoginService {
    fn default() -> Self {
        Self::new()
    }
}

impl SocialLoginService for GoogleLoginService {
    fn extract_email(&self, token: &str) -> Result<String, SocialLoginError> {
        let result =
            decode_payload(token).and_then(|payload| check_expiry(payload, (self.now)()));

        if let Err(err) = &result {
            tracing::warn!(event = err.log_event(), "Google login failed: {}", err);
        }

        result
    }
}

/// Decodes the payload segment (index 1) of a dot-separated token.
///
/// # Returns
/// - `Ok(SocialTokenPayload)` - Payload decoded with both claims present
/// - `Err(SocialLoginError::MalformedToken)` - No payload segment, bad base64, bad UTF-8 or
///   bad JSON
/// - `Err(SocialLoginError::MissingField)` - JSON object lacks `email` or `exp`, or either
///   has the wrong type
pub fn decode_payload(token: &str) -> Result<SocialTokenPayload, SocialLoginError> {
    let segment = token
        .split('.')
        .nth(1)
        .ok_or_else(|| SocialLoginError::MalformedToken("missing payload segment".to_string()))?;

    let bytes = URL_SAFE_LENIENT
        .decode(segment)
        .or_else(|_| STANDARD_LENIENT.decode(segment))
        .map_err(|e| SocialLoginError::MalformedToken(format!("payload is not base64: {}", e)))?;

    let text = String::from_utf8(bytes)
        .map_err(|e| SocialLoginError::MalformedToken(format!("payload is not UTF-8: {}", e)))?;

    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| SocialLoginError::MalformedToken(format!("payload is not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(SocialLoginError::MalformedToken(
            "payload is not a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| SocialLoginError::MissingField(e.to_string()))
}

/// Rejects payloads whose expiry lies before `now` and yields the email otherwise.
///
/// A token expiring exactly at `now` is still accepted.
pub fn check_expiry(payload: SocialTokenPayload, now: i64) -> Result<String, SocialLoginError> {
    if payload.exp < now {
        return Err(SocialLoginError::InvalidAccessToken);
    }

    Ok(payload.email)
}
