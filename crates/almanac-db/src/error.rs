use thiserror::Error;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Seed error: {0}")]
    SeedError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type DbResult<T> = std::result::Result<T, DbError>;
