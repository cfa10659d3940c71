use crate::forms::patch;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct VideoForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub title: String,
    pub description: Option<String>,
    #[validate(pattern = r"^https?://.+")]
    pub video_url: String,
    pub video_type: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub display_page: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl VideoForm {
    pub fn into_model(self, created_by: i32) -> models::Video {
        models::Video {
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            video_type: self.video_type.unwrap_or_else(|| "youtube".to_string()),
            thumbnail_url: self.thumbnail_url,
            category: self.category,
            display_page: self.display_page,
            display_order: self.display_order.unwrap_or(0),
            is_active: self.is_active.unwrap_or(true),
            created_by: Some(created_by),
            ..models::Video::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct VideoPatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(pattern = r"^https?://.+")]
    pub video_url: Option<String>,
    pub video_type: Option<String>,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub display_page: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl VideoPatch {
    pub fn apply(self, video: &mut models::Video) {
        patch(&mut video.title, self.title);
        patch(&mut video.description, self.description.map(Some));
        patch(&mut video.video_url, self.video_url);
        patch(&mut video.video_type, self.video_type);
        patch(&mut video.thumbnail_url, self.thumbnail_url.map(Some));
        patch(&mut video.category, self.category.map(Some));
        patch(&mut video.display_page, self.display_page.map(Some));
        patch(&mut video.display_order, self.display_order);
        patch(&mut video.is_active, self.is_active);
    }
}
