//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs into parameter models, call a
//! service and convert the returned domain models back into DTOs.

pub mod auth;
pub mod bee;
pub mod mission;
pub mod user;
