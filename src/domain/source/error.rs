use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SourceServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("news source not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for SourceServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => SourceServiceError::Invalid(msg),
            AppError::NotFound(_) => SourceServiceError::NotFound,
            _ => SourceServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<SourceServiceError> for AppError {
    fn from(err: SourceServiceError) -> Self {
        match err {
            SourceServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SourceServiceError::NotFound => AppError::NotFound("News source not found".to_string()),
            SourceServiceError::Dependency(msg) => AppError::Internal(msg),
            SourceServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
