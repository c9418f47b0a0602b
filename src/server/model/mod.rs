//! Domain models and operation parameters.
//!
//! Domain models are built from SeaORM entities at the repository boundary and converted to
//! DTOs at the controller boundary. Parameter types carry validated input from controllers
//! into services.

pub mod bee;
pub mod mission;
pub mod user;
