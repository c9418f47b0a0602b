//! Builders for unsigned social access tokens.
//!
//! Tokens follow the `header.payload.signature` layout. Only the payload segment is meaningful
//! to the backend, so the header and signature are fixed placeholder strings.

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine,
};
use serde_json::{json, Value};

const HEADER: &str = "eyJhbGciOiJSUzI1NiJ9";
const SIGNATURE: &str = "signature";

/// Builds a token whose payload carries `email` and `exp`.
///
/// The payload is encoded with the URL-safe alphabet without padding.
pub fn google_token(email: &str, exp: i64) -> String {
    token_from_payload(&json!({ "email": email, "exp": exp }))
}

/// Builds a token with an arbitrary JSON payload.
pub fn token_from_payload(payload: &Value) -> String {
    token_from_segment(&URL_SAFE_NO_PAD.encode(payload.to_string()))
}

/// Builds a token whose payload is encoded with the standard padded alphabet.
pub fn standard_token_from_payload(payload: &Value) -> String {
    token_from_segment(&STANDARD.encode(payload.to_string()))
}

fn token_from_segment(segment: &str) -> String {
    format!("{}.{}.{}", HEADER, segment, SIGNATURE)
}

/// Expiry one hour past the current wall clock.
pub fn future_exp() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

/// Expiry one hour before the current wall clock.
pub fn past_exp() -> i64 {
    chrono::Utc::now().timestamp() - 3600
}
