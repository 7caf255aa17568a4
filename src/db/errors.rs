use thiserror::Error;

/// Data-access failures. A missing row is never an error at this layer;
/// point reads return `Option` and callers decide what absence means.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    #[error("Query execution error: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Transaction error: {0}")]
    TransactionError(String),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
