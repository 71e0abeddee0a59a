use sql_connection::{PgError, PoolError as DbPoolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Database Pool error: {0}")]
    DatabasePool(#[from] DbPoolError),
    #[error("Prompt error: {0}")]
    Prompt(String),
}

impl ContentError {
    /// SQLSTATE code when the server rejected a statement.
    pub fn sql_state(&self) -> Option<&str> {
        match self {
            Self::Database(err) => err.code().map(|code| code.code()),
            _ => None,
        }
    }
}
