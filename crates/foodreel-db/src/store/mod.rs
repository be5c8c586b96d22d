//! Document-store repositories.
//!
//! Each repository is a cheap cloneable handle over a shared document map.
//! Record ids and email uniqueness are enforced here, so callers never need
//! client-side locking.

pub mod food_items;
pub mod food_partners;
pub mod users;

pub use food_items::FoodItemRepository;
pub use food_partners::FoodPartnerRepository;
pub use users::UserRepository;
