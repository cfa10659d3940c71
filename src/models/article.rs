use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image: Option<String>,
    // Display byline, free text. Not a reference to a user row.
    pub author: String,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub is_published: bool,
    pub is_featured: bool,
    pub publish_date: Option<DateTime<Utc>>,
    pub created_by: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
