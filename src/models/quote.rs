use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Default, sqlx::FromRow)]
pub struct Quote {
    pub id: Uuid,
    pub reference_number: String,
    // Customer and line items are opaque to the service; they are stored
    // and returned exactly as submitted.
    #[serde(rename = "customer")]
    pub customer_data: serde_json::Value,
    pub items: serde_json::Value,
    pub total_amount: f64,
    pub currency: String,
    pub status: String,
    pub comments: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
