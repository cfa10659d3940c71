use crate::forms::patch;
use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ArticleForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub title: String,
    #[validate(pattern = r"^[a-z0-9]+(?:-[a-z0-9]+)*$")]
    pub slug: String,
    pub excerpt: Option<String>,
    #[validate(min_length = 1)]
    pub content: String,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl ArticleForm {
    pub fn into_model(self, created_by: i32) -> models::Article {
        models::Article {
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            featured_image: self.featured_image,
            author: self.author.unwrap_or_default(),
            category: self.category,
            tags: self.tags,
            is_published: self.is_published.unwrap_or(false),
            is_featured: self.is_featured.unwrap_or(false),
            publish_date: self.publish_date,
            created_by: Some(created_by),
            ..models::Article::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct ArticlePatch {
    #[validate(min_length = 1)]
    #[validate(max_length = 500)]
    pub title: Option<String>,
    #[validate(pattern = r"^[a-z0-9]+(?:-[a-z0-9]+)*$")]
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    #[validate(min_length = 1)]
    pub content: Option<String>,
    pub featured_image: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
    pub publish_date: Option<DateTime<Utc>>,
}

impl ArticlePatch {
    pub fn apply(self, article: &mut models::Article) {
        patch(&mut article.title, self.title);
        patch(&mut article.slug, self.slug);
        patch(&mut article.excerpt, self.excerpt.map(Some));
        patch(&mut article.content, self.content);
        patch(&mut article.featured_image, self.featured_image.map(Some));
        patch(&mut article.author, self.author);
        patch(&mut article.category, self.category.map(Some));
        patch(&mut article.tags, self.tags.map(Some));
        patch(&mut article.is_published, self.is_published);
        patch(&mut article.is_featured, self.is_featured);
        patch(&mut article.publish_date, self.publish_date.map(Some));
    }
}
