use crate::forms::patch;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub name: String,
    #[validate(pattern = r"^[a-z0-9]+(?:-[a-z0-9]+)*$")]
    pub slug: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: f64,
    pub currency: Option<String>,
    pub image_url: Option<String>,
    #[validate(min_length = 1)]
    pub product_type: String,
    pub category: Option<String>,
    pub exam_board: Option<String>,
    pub duration: Option<String>,
    #[validate(minimum = 1)]
    pub subjects_count: Option<i32>,
    pub service_tier: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

fn encode_features(features: Vec<String>) -> String {
    serde_json::to_string(&features).unwrap_or_default()
}

impl ProductForm {
    pub fn into_model(self, created_by: i32) -> models::Product {
        models::Product {
            name: self.name,
            slug: self.slug,
            description: self.description,
            short_description: self.short_description,
            price: self.price,
            currency: self.currency.unwrap_or_else(|| "R".to_string()),
            image_url: self.image_url,
            product_type: self.product_type,
            category: self.category,
            exam_board: self.exam_board,
            duration: self.duration,
            subjects_count: self.subjects_count.unwrap_or(1),
            service_tier: self.service_tier,
            features: self.features.map(encode_features),
            is_active: self.is_active.unwrap_or(true),
            is_featured: self.is_featured.unwrap_or(false),
            display_order: self.display_order.unwrap_or(0),
            created_by: Some(created_by),
            ..models::Product::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct ProductPatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub name: Option<String>,
    #[validate(pattern = r"^[a-z0-9]+(?:-[a-z0-9]+)*$")]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub image_url: Option<String>,
    #[validate(min_length = 1)]
    pub product_type: Option<String>,
    pub category: Option<String>,
    pub exam_board: Option<String>,
    pub duration: Option<String>,
    #[validate(minimum = 1)]
    pub subjects_count: Option<i32>,
    pub service_tier: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub display_order: Option<i32>,
}

impl ProductPatch {
    pub fn apply(self, product: &mut models::Product) {
        patch(&mut product.name, self.name);
        patch(&mut product.slug, self.slug);
        patch(&mut product.description, self.description.map(Some));
        patch(
            &mut product.short_description,
            self.short_description.map(Some),
        );
        patch(&mut product.price, self.price);
        patch(&mut product.currency, self.currency);
        patch(&mut product.image_url, self.image_url.map(Some));
        patch(&mut product.product_type, self.product_type);
        patch(&mut product.category, self.category.map(Some));
        patch(&mut product.exam_board, self.exam_board.map(Some));
        patch(&mut product.duration, self.duration.map(Some));
        patch(&mut product.subjects_count, self.subjects_count);
        patch(&mut product.service_tier, self.service_tier.map(Some));
        patch(
            &mut product.features,
            self.features.map(|features| Some(encode_features(features))),
        );
        patch(&mut product.is_active, self.is_active);
        patch(&mut product.is_featured, self.is_featured);
        patch(&mut product.display_order, self.display_order);
    }
}
