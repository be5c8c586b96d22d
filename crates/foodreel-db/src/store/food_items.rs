use foodreel_core::models::FoodItem;
use foodreel_core::AppError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Repository for food item records. Items are created exclusively by the
/// ingestion workflow after a successful upload and are read-only afterward.
#[derive(Clone, Default)]
pub struct FoodItemRepository {
    items: Arc<Mutex<HashMap<Uuid, FoodItem>>>,
    #[cfg(feature = "fault-injection")]
    reject_inserts: Arc<std::sync::atomic::AtomicBool>,
}

impl FoodItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert fail like a store outage.
    #[cfg(feature = "fault-injection")]
    pub fn reject_inserts(&self, rejecting: bool) {
        self.reject_inserts
            .store(rejecting, std::sync::atomic::Ordering::SeqCst);
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, FoodItem>>, AppError> {
        self.items
            .lock()
            .map_err(|_| AppError::Persistence("Food item store lock poisoned".to_string()))
    }

    /// Insert a food item. Required-field violations are store rejections.
    pub async fn create(&self, item: FoodItem) -> Result<FoodItem, AppError> {
        #[cfg(feature = "fault-injection")]
        if self
            .reject_inserts
            .load(std::sync::atomic::Ordering::SeqCst)
        {
            return Err(AppError::Persistence(
                "Food item store rejected the insert".to_string(),
            ));
        }

        if item.name.trim().is_empty() {
            return Err(AppError::Persistence(
                "Food item name is required".to_string(),
            ));
        }
        if item.video_url.trim().is_empty() {
            return Err(AppError::Persistence(
                "Food item video URL is required".to_string(),
            ));
        }

        let mut items = self.lock()?;
        items.insert(item.id, item.clone());
        Ok(item)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<FoodItem>, AppError> {
        let items = self.lock()?;
        Ok(items.get(&id).cloned())
    }

    /// All food items, newest first.
    pub async fn list_all(&self) -> Result<Vec<FoodItem>, AppError> {
        let items = self.lock()?;
        let mut all: Vec<FoodItem> = items.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    pub async fn count(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.len())
    }
}
