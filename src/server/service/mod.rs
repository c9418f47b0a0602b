//! Service layer for business logic.
//!
//! Services orchestrate repositories and enforce business rules. They take parameter models
//! from controllers and return domain models, never DTOs.

pub mod bee;
pub mod mission;
pub mod social;
pub mod user;
