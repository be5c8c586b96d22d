pub mod food_item;
pub mod principal;

pub use food_item::{FoodItem, FoodItemResponse};
pub use principal::{FoodPartner, PrincipalData, User};
