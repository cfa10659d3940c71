use crate::forms::patch;
use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct WebinarForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub title: String,
    pub description: Option<String>,
    pub host_name: Option<String>,
    #[validate(pattern = r"^https?://.+")]
    pub webinar_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    #[validate(minimum = 1)]
    pub duration_minutes: Option<i32>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub is_past: Option<bool>,
    pub recording_url: Option<String>,
}

impl WebinarForm {
    pub fn into_model(self, created_by: i32) -> models::Webinar {
        models::Webinar {
            title: self.title,
            description: self.description,
            host_name: self.host_name,
            webinar_url: self.webinar_url,
            thumbnail_url: self.thumbnail_url,
            scheduled_date: self.scheduled_date,
            duration_minutes: self.duration_minutes,
            category: self.category,
            is_active: self.is_active.unwrap_or(true),
            is_past: self.is_past.unwrap_or(false),
            recording_url: self.recording_url,
            created_by: Some(created_by),
            ..models::Webinar::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct WebinarPatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub title: Option<String>,
    pub description: Option<String>,
    pub host_name: Option<String>,
    #[validate(pattern = r"^https?://.+")]
    pub webinar_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub scheduled_date: Option<DateTime<Utc>>,
    #[validate(minimum = 1)]
    pub duration_minutes: Option<i32>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
    pub is_past: Option<bool>,
    pub recording_url: Option<String>,
}

impl WebinarPatch {
    pub fn apply(self, webinar: &mut models::Webinar) {
        patch(&mut webinar.title, self.title);
        patch(&mut webinar.description, self.description.map(Some));
        patch(&mut webinar.host_name, self.host_name.map(Some));
        patch(&mut webinar.webinar_url, self.webinar_url.map(Some));
        patch(&mut webinar.thumbnail_url, self.thumbnail_url.map(Some));
        patch(&mut webinar.scheduled_date, self.scheduled_date.map(Some));
        patch(
            &mut webinar.duration_minutes,
            self.duration_minutes.map(Some),
        );
        patch(&mut webinar.category, self.category.map(Some));
        patch(&mut webinar.is_active, self.is_active);
        patch(&mut webinar.is_past, self.is_past);
        patch(&mut webinar.recording_url, self.recording_url.map(Some));
    }
}
