pub use super::bee::Entity as Bee;
pub use super::bee_member::Entity as BeeMember;
pub use super::mission::Entity as Mission;
pub use super::user::Entity as User;
