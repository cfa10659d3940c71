use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Webinar {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub host_name: Option<String>,
    pub webinar_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub category: Option<String>,
    pub is_active: bool,
    pub is_past: bool,
    // Filled in once the session has run.
    pub recording_url: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
