pub mod dto;
pub mod error;
pub mod model;
pub mod service;

pub use dto::{
    IngestArticle, IngestRequest, IngestResponse, InteractionRequest, NewsListResponse,
    NewsQuery,
};
pub use error::NewsServiceError;
pub use model::{Article, DEFAULT_CATEGORY};
pub use service::{NewsFilter, NewsService, NewsServiceApi, NewsSort, SortOrder};
