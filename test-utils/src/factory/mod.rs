//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand that
//! inserts a row with defaults. Defaults are unique per call so tests can create several rows
//! without collisions.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(db).nickname("bee").build().await?;
//! let (manager, bee) = factory::helpers::create_bee_with_manager(db).await?;
//! factory::create_member(db, bee.id, user.id).await?;
//! ```

pub mod bee;
pub mod bee_member;
pub mod helpers;
pub mod mission;
pub mod user;

pub use bee::create_bee;
pub use bee_member::{create_manager, create_member};
pub use mission::create_mission;
pub use user::create_user;
