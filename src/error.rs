use thiserror::Error;

/// Errors surfaced by prompts that resolve keys across tables.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A record refers to a key that has no matching record in `table`.
    #[error("no record for '{key}' in table '{table}'")]
    ReferenceNotFound { table: &'static str, key: String },
}

impl QueryError {
    pub fn missing(table: &'static str, key: impl Into<String>) -> Self {
        QueryError::ReferenceNotFound {
            table,
            key: key.into(),
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;
