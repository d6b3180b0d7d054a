use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Label used for articles without a category
pub const DEFAULT_CATEGORY: &str = "other";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub source: String,
    pub url: String,
    pub category: Option<String>,
    pub published_at: DateTime<Utc>,
    pub crawled_at: DateTime<Utc>,
    pub hotness_score: f64,
    pub sentiment_score: f64,
    pub view_count: i64,
    pub comment_count: i64,
    pub share_count: i64,
}

impl Article {
    /// Category used for grouping; empty and missing categories collapse into "other"
    pub fn category_label(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }
}
