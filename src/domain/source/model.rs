use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Default crawl interval for new sources, in minutes
pub const DEFAULT_CRAWL_INTERVAL: i32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NewsSource {
    pub id: Uuid,
    pub source_key: String,
    pub name: String,
    pub url: String,
    pub enabled: bool,
    pub crawl_interval: i32,
    pub last_crawl_time: Option<DateTime<Utc>>,
    pub crawl_status: CrawlStatus,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "text")]
#[sqlx(rename_all = "lowercase")]
pub enum CrawlStatus {
    #[serde(rename = "idle")]
    Idle,
    #[serde(rename = "crawling")]
    Crawling,
    #[serde(rename = "error")]
    Error,
}

impl std::fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrawlStatus::Idle => write!(f, "idle"),
            CrawlStatus::Crawling => write!(f, "crawling"),
            CrawlStatus::Error => write!(f, "error"),
        }
    }
}

/// A source the deployment ships with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDefinition {
    pub source_key: String,
    pub name: String,
    pub url: String,
    pub enabled: bool,
}

impl SourceDefinition {
    pub fn new(source_key: &str, name: &str, url: &str) -> Self {
        Self {
            source_key: source_key.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            enabled: true,
        }
    }

    pub fn builtin() -> Vec<SourceDefinition> {
        vec![
            SourceDefinition::new("1", "腾讯新闻", "https://news.qq.com"),
            SourceDefinition::new("2", "网易新闻", "https://news.163.com"),
            SourceDefinition::new("3", "新浪新闻", "https://news.sina.com.cn"),
            SourceDefinition::new("4", "央视新闻", "https://news.cctv.com"),
        ]
    }
}
