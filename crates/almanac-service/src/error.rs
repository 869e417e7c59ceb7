use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] almanac_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),

    #[error("Missing window bound: {0}")]
    MissingWindowBound(&'static str),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Expansion exceeded {limit} occurrences")]
    TooManyOccurrences { limit: u32 },
}

impl ServiceError {
    /// ## Summary
    /// Whether the error stems from caller input rather than a server-side failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::MissingWindowBound(_)
            | Self::NotFound(_)
            | Self::ParseError(_)
            | Self::ValidationError(_)
            | Self::CoreError(_) => true,
            Self::DatabaseError(_) | Self::TooManyOccurrences { .. } => false,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
