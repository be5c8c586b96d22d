use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// Food item record: metadata paired with a remote video URL, owned by a partner.
///
/// `video_url` is non-optional. A food item only comes into existence after a
/// successful upload, so a persisted record can never lack a URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub video_url: String,
    pub food_partner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FoodItem {
    pub fn new(
        name: String,
        description: Option<String>,
        video_url: String,
        food_partner_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        FoodItem {
            id: Uuid::new_v4(),
            name,
            description: description.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            video_url,
            food_partner_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Food item representation in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(rename = "videoUrl")]
    pub video_url: String,
    #[serde(rename = "foodPartner")]
    pub food_partner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<FoodItem> for FoodItemResponse {
    fn from(item: FoodItem) -> Self {
        FoodItemResponse {
            id: item.id,
            name: item.name,
            description: item.description,
            video_url: item.video_url,
            food_partner_id: item.food_partner_id,
            created_at: item.created_at,
        }
    }
}
