use super::error::NewsServiceError;
use crate::domain::news::{
    Article, IngestArticle, IngestRequest, IngestResponse, InteractionRequest, NewsListResponse,
    NewsQuery,
};
use crate::infrastructure::repositories::ArticleRepository;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 100;
const MAX_INGEST_BATCH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsSort {
    PublishTime,
    Hotness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Validated list parameters
#[derive(Debug, Clone, PartialEq)]
pub struct NewsFilter {
    pub page: i64,
    pub per_page: i64,
    pub source: Option<String>,
    pub category: Option<String>,
    pub sort: NewsSort,
    pub order: SortOrder,
}

impl NewsFilter {
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

impl TryFrom<NewsQuery> for NewsFilter {
    type Error = NewsServiceError;

    fn try_from(query: NewsQuery) -> Result<Self, Self::Error> {
        let page = query.page.unwrap_or(1);
        if page < 1 {
            return Err(NewsServiceError::Invalid("page must be at least 1".to_string()));
        }

        let per_page = query.per_page.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&per_page) {
            return Err(NewsServiceError::Invalid(format!(
                "per_page must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        if (page - 1).checked_mul(per_page).is_none() {
            return Err(NewsServiceError::Invalid("page is out of range".to_string()));
        }

        let sort = match query.sort_by.as_deref() {
            Some("hotness") => NewsSort::Hotness,
            _ => NewsSort::PublishTime,
        };
        let order = match query.order.as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };

        Ok(Self {
            page,
            per_page,
            source: non_empty(query.source),
            category: non_empty(query.category),
            sort,
            order,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub struct NewsService {
    article_repo: Arc<ArticleRepository>,
}

impl NewsService {
    pub fn new(article_repo: Arc<ArticleRepository>) -> Self {
        Self { article_repo }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    async fn list_news(&self, filter: NewsFilter) -> Result<NewsListResponse, NewsServiceError>;

    /// Fetch one article, counting the read as a view
    async fn get_news(&self, news_id: Uuid) -> Result<Article, NewsServiceError>;

    async fn update_interaction(
        &self,
        news_id: Uuid,
        request: InteractionRequest,
    ) -> Result<Article, NewsServiceError>;

    /// Store raw article records, updating rows whose URL is already known
    async fn ingest(&self, request: IngestRequest) -> Result<IngestResponse, NewsServiceError>;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn list_news(&self, filter: NewsFilter) -> Result<NewsListResponse, NewsServiceError> {
        let (news_list, total) = self
            .article_repo
            .list(&filter)
            .await?;

        Ok(NewsListResponse {
            news_list,
            total,
            page: filter.page,
            per_page: filter.per_page,
            pages: page_count(total, filter.per_page),
        })
    }

    async fn get_news(&self, news_id: Uuid) -> Result<Article, NewsServiceError> {
        self.article_repo
            .increment_view_count(news_id)
            .await?
            .ok_or(NewsServiceError::NotFound)
    }

    async fn update_interaction(
        &self,
        news_id: Uuid,
        request: InteractionRequest,
    ) -> Result<Article, NewsServiceError> {
        let positive = |value: Option<i64>| value.filter(|v| *v > 0);

        self.article_repo
            .update_interactions(
                news_id,
                positive(request.view_count),
                positive(request.comment_count),
                positive(request.share_count),
            )
            .await?
            .ok_or(NewsServiceError::NotFound)
    }

    async fn ingest(&self, request: IngestRequest) -> Result<IngestResponse, NewsServiceError> {
        if request.articles.len() > MAX_INGEST_BATCH {
            return Err(NewsServiceError::Invalid(format!(
                "at most {} articles per request",
                MAX_INGEST_BATCH
            )));
        }
        for (index, article) in request.articles.iter().enumerate() {
            validate_record(article)
                .map_err(|msg| NewsServiceError::Invalid(format!("article {}: {}", index, msg)))?;
        }

        let (inserted, updated) = self.article_repo.upsert_batch(&request.articles).await?;
        let response = IngestResponse { inserted, updated };

        tracing::info!(
            inserted = response.inserted,
            updated = response.updated,
            "Ingested news batch"
        );

        Ok(response)
    }
}

fn page_count(total: i64, per_page: i64) -> i64 {
    (total + per_page - 1) / per_page
}

fn validate_record(article: &IngestArticle) -> Result<(), String> {
    if article.title.trim().is_empty() {
        return Err("title is required".to_string());
    }
    if article.source.trim().is_empty() {
        return Err("source is required".to_string());
    }
    if !article.url.starts_with("http://") && !article.url.starts_with("https://") {
        return Err("Invalid URL format".to_string());
    }
    Ok(())
}
