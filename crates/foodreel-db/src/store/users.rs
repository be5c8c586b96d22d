use chrono::Utc;
use foodreel_core::models::User;
use foodreel_core::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Repository for end-user principals.
#[derive(Clone, Default)]
pub struct UserRepository {
    users: Arc<Mutex<HashMap<Uuid, User>>>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, User>>, AppError> {
        self.users
            .lock()
            .map_err(|_| AppError::Persistence("User store lock poisoned".to_string()))
    }

    /// Lookup by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.trim().to_lowercase();
        let users = self.lock()?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.lock()?;
        Ok(users.get(&id).cloned())
    }

    /// Insert a new user. The password must already be hashed; email uniqueness
    /// is enforced here.
    pub async fn create(
        &self,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let email = email.trim().to_lowercase();
        let mut users = self.lock()?;

        if users.values().any(|u| u.email == email) {
            return Err(AppError::Validation("User already exists".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            full_name: full_name.trim().to_string(),
            email,
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        Ok(user)
    }

    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }
}
