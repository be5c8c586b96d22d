use chrono::Utc;
use foodreel_core::models::FoodPartner;
use foodreel_core::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Repository for food-partner principals.
#[derive(Clone, Default)]
pub struct FoodPartnerRepository {
    partners: Arc<Mutex<HashMap<Uuid, FoodPartner>>>,
}

impl FoodPartnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, FoodPartner>>, AppError> {
        self.partners
            .lock()
            .map_err(|_| AppError::Persistence("Food partner store lock poisoned".to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<FoodPartner>, AppError> {
        let email = email.trim().to_lowercase();
        let partners = self.lock()?;
        Ok(partners.values().find(|p| p.email == email).cloned())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FoodPartner>, AppError> {
        let partners = self.lock()?;
        Ok(partners.get(&id).cloned())
    }

    pub async fn create(
        &self,
        full_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<FoodPartner, AppError> {
        let email = email.trim().to_lowercase();
        let mut partners = self.lock()?;

        if partners.values().any(|p| p.email == email) {
            return Err(AppError::Validation(
                "Food Partner already exists".to_string(),
            ));
        }

        let now = Utc::now();
        let partner = FoodPartner {
            id: Uuid::new_v4(),
            full_name: full_name.trim().to_string(),
            email,
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
        };
        partners.insert(partner.id, partner.clone());
        Ok(partner)
    }

    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_partner_rejected() {
        let repo = FoodPartnerRepository::new();
        repo.create("Ana", "ana@x.com", "hash").await.unwrap();

        let err = repo.create("Ana", "ana@x.com", "hash").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
