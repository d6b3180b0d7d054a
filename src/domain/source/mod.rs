pub mod error;
pub mod model;
pub mod service;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use error::SourceServiceError;
pub use model::{CrawlStatus, NewsSource, SourceDefinition};
pub use service::{SourceService, SourceServiceApi};

/// Body of PUT /api/sources/{sourceId}/status
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub enabled: Option<bool>,
}

/// Body of PUT /api/sources/{sourceId}/interval
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UpdateIntervalRequest {
    pub crawl_interval: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourceListResponse {
    pub sources: Vec<NewsSource>,
    pub total: usize,
}

/// Crawl state of one source, for GET /api/sources/status
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceStatus {
    pub id: Uuid,
    pub name: String,
    pub enabled: bool,
    pub crawl_status: CrawlStatus,
    pub last_crawl_time: Option<chrono::DateTime<chrono::Utc>>,
    pub error_message: Option<String>,
}

impl From<NewsSource> for SourceStatus {
    fn from(source: NewsSource) -> Self {
        Self {
            id: source.id,
            name: source.name,
            enabled: source.enabled,
            crawl_status: source.crawl_status,
            last_crawl_time: source.last_crawl_time,
            error_message: source.error_message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourceStatusListResponse {
    pub status_list: Vec<SourceStatus>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourceEnabledResponse {
    pub source_id: Uuid,
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SourceIntervalResponse {
    pub source_id: Uuid,
    pub name: String,
    pub crawl_interval: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InitializeSourcesResponse {
    pub initialized_count: usize,
    pub created: usize,
}
