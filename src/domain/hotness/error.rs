use uuid::Uuid;

use crate::error::AppError;

/// Failures of the pure scoring engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HotnessError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("scoring failed for article {id}: {reason}")]
    Computation { id: Uuid, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum HotnessServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("no news found in the last {0} days")]
    NoData(i64),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<HotnessError> for HotnessServiceError {
    fn from(err: HotnessError) -> Self {
        match err {
            HotnessError::InvalidInput(msg) => HotnessServiceError::Invalid(msg),
            HotnessError::Computation { .. } => HotnessServiceError::Other(err.into()),
        }
    }
}

impl From<AppError> for HotnessServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => HotnessServiceError::Invalid(msg),
            _ => HotnessServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<HotnessServiceError> for AppError {
    fn from(err: HotnessServiceError) -> Self {
        match err {
            HotnessServiceError::Invalid(msg) => AppError::BadRequest(msg),
            HotnessServiceError::NoData(days) => {
                AppError::NotFound(format!("No news found in the last {} days", days))
            }
            HotnessServiceError::Dependency(msg) => AppError::Internal(msg),
            HotnessServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
