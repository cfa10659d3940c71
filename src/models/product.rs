use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub price: f64,
    pub currency: String,
    pub image_url: Option<String>,
    pub product_type: String,
    pub category: Option<String>,
    pub exam_board: Option<String>,
    pub duration: Option<String>,
    pub subjects_count: i32,
    pub service_tier: Option<String>,
    // JSON-encoded list of selling points, stored verbatim.
    pub features: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub display_order: i32,
    pub created_by: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
