use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum NewsServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("news not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for NewsServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => NewsServiceError::Invalid(msg),
            AppError::NotFound(_) => NewsServiceError::NotFound,
            _ => NewsServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<NewsServiceError> for AppError {
    fn from(err: NewsServiceError) -> Self {
        match err {
            NewsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            NewsServiceError::NotFound => AppError::NotFound("News not found".to_string()),
            NewsServiceError::Dependency(msg) => AppError::Internal(msg),
            NewsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
