use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::Article;

/// Query string for GET /api/news
#[derive(Debug, Default, Deserialize)]
pub struct NewsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub source: Option<String>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Response data for GET /api/news
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsListResponse {
    pub news_list: Vec<Article>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub pages: i64,
}

/// Body of POST /api/news/{newsId}/interact. Only positive values are applied.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InteractionRequest {
    pub view_count: Option<i64>,
    pub comment_count: Option<i64>,
    pub share_count: Option<i64>,
}

/// Raw article record handed over by a fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestArticle {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub source: String,
    pub url: String,
    pub category: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Body of POST /api/news
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestRequest {
    pub articles: Vec<IngestArticle>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct IngestResponse {
    pub inserted: usize,
    pub updated: usize,
}
