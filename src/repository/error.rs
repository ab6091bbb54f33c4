use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("insert unique violation")]
    InsertUniqueViolation,

    #[error("insert timed out after {0:?}")]
    Timeout(Duration),

    #[error("mongo error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}
