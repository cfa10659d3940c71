use crate::models;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Public quote submission. Customer and items are accepted as free-form
/// JSON and stored verbatim; only the pricing fields inside each item are
/// interpreted.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub customer: Value,
    #[serde(default)]
    pub items: Vec<Value>,
    pub comments: Option<String>,
}

impl QuoteForm {
    pub fn ensure_submittable(&self) -> Result<(), String> {
        let has_customer = self
            .customer
            .as_object()
            .map_or(false, |customer| !customer.is_empty());

        if !has_customer || self.items.is_empty() {
            return Err("Customer information and items are required".to_string());
        }
        Ok(())
    }

    /// `sum(price * quantity)`; price falls back to 0 and quantity to 1 when
    /// an item omits them.
    pub fn total_amount(&self) -> f64 {
        self.items
            .iter()
            .map(|item| {
                let price = item.get("price").and_then(Value::as_f64).unwrap_or(0.0);
                let quantity = item.get("quantity").and_then(Value::as_f64).unwrap_or(1.0);
                price * quantity
            })
            .sum()
    }

    /// The reference number is allocated at insert time, not here.
    pub fn into_model(self) -> models::Quote {
        let total_amount = self.total_amount();
        models::Quote {
            id: Uuid::new_v4(),
            reference_number: String::new(),
            customer_data: self.customer,
            items: Value::Array(self.items),
            total_amount,
            currency: "ZAR".to_string(),
            status: "pending".to_string(),
            comments: self.comments,
            created_at: None,
            updated_at: None,
        }
    }
}
