//! SeaORM entity definitions for the Morning Bees schema.

pub mod prelude;

pub mod bee;
pub mod bee_member;
pub mod mission;
pub mod user;
