use thiserror::Error;

/// Application-level errors (command-line layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    DatabaseError(#[from] almanac_db::error::DbError),

    #[error(transparent)]
    ServiceError(#[from] almanac_service::error::ServiceError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
