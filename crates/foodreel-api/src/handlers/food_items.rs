//! Food item endpoints: partner-gated creation, user-gated listing.

use crate::auth::models::{AuthenticatedFoodPartner, AuthenticatedUser};
use crate::error::HttpAppError;
use crate::services::ingestion::FoodItemDraft;
use crate::services::StagedFile;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use foodreel_core::models::FoodItemResponse;
use foodreel_core::AppError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddFoodItemResponse {
    pub message: String,
    pub food: FoodItemResponse,
    #[serde(rename = "videoId")]
    pub video_id: String,
}

#[derive(Debug, Serialize)]
pub struct ListFoodItemsResponse {
    pub message: String,
    #[serde(rename = "foodItems")]
    pub food_items: Vec<FoodItemResponse>,
}

/// `POST /api/food/addFoodItem` — multipart `name`, optional `description`,
/// and a `video` file.
pub async fn add_food_item(
    State(state): State<AppState>,
    partner: AuthenticatedFoodPartner,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let mut name = String::new();
    let mut description: Option<String> = None;
    let mut content_type = String::new();
    let mut staged: Option<StagedFile> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("name") => name = field.text().await?,
            Some("description") => description = Some(field.text().await?),
            Some("video") => {
                content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                staged = Some(StagedFile::create(&state.upload_dir(), data).await?);
            }
            _ => {}
        }
    }

    let staged = staged.ok_or_else(|| {
        HttpAppError(AppError::Validation("`video` file is required.".to_string()))
    })?;

    let ingested = state
        .ingestion
        .ingest(
            partner.id,
            FoodItemDraft {
                name,
                description,
                content_type,
            },
            staged,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AddFoodItemResponse {
            message: "Food item added successfully".to_string(),
            food: FoodItemResponse::from(ingested.item),
            video_id: ingested.video_id,
        }),
    ))
}

/// `GET /api/food` — every food item, newest first.
pub async fn list_food_items(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, HttpAppError> {
    let items = state.food_items.list_all().await?;

    Ok(Json(ListFoodItemsResponse {
        message: "Food items fetched successfully".to_string(),
        food_items: items.into_iter().map(FoodItemResponse::from).collect(),
    }))
}
