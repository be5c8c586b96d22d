//! Password hash capability: opaque one-way hash + verify.

use foodreel_core::AppError;

/// Bcrypt-backed password hasher. Hashes are computed once at the registration
/// boundary and never re-hashed for unchanged passwords.
#[derive(Clone, Debug)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        PasswordHasher { cost }
    }

    pub fn hash(&self, plain: &str) -> Result<String, AppError> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    pub fn verify(&self, plain: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(plain, hash)
            .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        PasswordHasher::new(bcrypt::DEFAULT_COST)
    }
}
