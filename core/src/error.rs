use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store unavailable at '{location}': {source}")]
    StoreUnavailable {
        location: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    /// True for UNIQUE / NOT NULL / FOREIGN KEY violations.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            LedgerError::Database(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}
