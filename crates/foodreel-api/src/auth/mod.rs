pub mod middleware;
pub mod models;
pub mod token;

pub use models::{AuthenticatedFoodPartner, AuthenticatedUser};
pub use token::TokenCodec;

/// Cookie carrying the end-user session token.
pub const USER_TOKEN_COOKIE: &str = "userToken";
/// Cookie carrying the food-partner session token.
pub const PARTNER_TOKEN_COOKIE: &str = "foodPartnerToken";
