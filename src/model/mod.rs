//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod bee;
pub mod mission;
pub mod user;
