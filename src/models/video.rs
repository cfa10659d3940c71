use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub video_type: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub display_page: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub created_by: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
