//! Request guards and session helpers used by controllers.

pub mod auth;
pub mod session;
