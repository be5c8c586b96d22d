//! Foodreel Store Library
//!
//! Document-store repositories for principals and food items, plus the password
//! hash capability. The persistence engine itself is an external collaborator;
//! these repositories expose the simple find/insert surface the application
//! relies on, with email uniqueness enforced at the store.

pub mod password;
pub mod store;

pub use password::PasswordHasher;
pub use store::{FoodItemRepository, FoodPartnerRepository, UserRepository};
