pub mod dto;
pub mod engine;
pub mod error;
pub mod model;
pub mod sentiment;
pub mod service;
pub mod weights;

pub use dto::{CategoryResponse, HistoryResponse, HotRankResponse, TrendResponse, TrendSeries};
pub use engine::{analyze, score_article};
pub use error::{HotnessError, HotnessServiceError};
pub use model::{AnalysisResult, RankedArticle, StoredAnalysis, TrendGranularity};
pub use sentiment::{score_sentiment, SentimentReport};
pub use service::{HotnessService, HotnessServiceApi};
pub use weights::SourceWeights;
