//! Error types for mysql-simple

use std::time::Duration;
use thiserror::Error;

/// Result type alias for mysql-simple operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Boxed driver error carried by [`SqlError::Execute`].
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for statement building and execution.
///
/// Every variant except `Execute` and `Timeout` describes misuse of the
/// builder API; none of them are retryable.
#[derive(Debug, Error)]
pub enum SqlError {
    /// The statement has no table
    #[error("table is required")]
    MissingTable,

    /// The statement has no columns (SELECT list, INSERT columns or UPDATE SET)
    #[error("at least one column is required")]
    MissingColumns,

    /// INSERT column and value lists differ in length
    #[error("columns length {columns} does not match values length {values}")]
    ColumnValueMismatch { columns: usize, values: usize },

    /// UPDATE/DELETE without WHERE and without LIMIT
    #[error("where or limit is required for {0}")]
    MissingConstraint(&'static str),

    /// Malformed condition arguments
    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    /// Wrong kind of argument passed to a setter
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The execution adapter failed
    #[error("execute error: {0}")]
    Execute(#[source] DriverError),

    /// Statement timeout error
    #[error("statement timeout after {0:?}")]
    Timeout(Duration),
}

impl SqlError {
    /// Create an invalid condition error
    pub fn invalid_condition(message: impl Into<String>) -> Self {
        Self::InvalidCondition(message.into())
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Wrap a driver error coming from the execution adapter
    pub fn execute(err: impl Into<DriverError>) -> Self {
        Self::Execute(err.into())
    }

    /// Check if this is a missing WHERE/LIMIT error
    pub fn is_missing_constraint(&self) -> bool {
        matches!(self, Self::MissingConstraint(_))
    }

    /// Check if this error was raised by the execution adapter
    pub fn is_execute(&self) -> bool {
        matches!(self, Self::Execute(_) | Self::Timeout(_))
    }
}

impl Clone for SqlError {
    fn clone(&self) -> Self {
        match self {
            Self::MissingTable => Self::MissingTable,
            Self::MissingColumns => Self::MissingColumns,
            Self::ColumnValueMismatch { columns, values } => Self::ColumnValueMismatch {
                columns: *columns,
                values: *values,
            },
            Self::MissingConstraint(kind) => Self::MissingConstraint(kind),
            Self::InvalidCondition(msg) => Self::InvalidCondition(msg.clone()),
            Self::InvalidArgument(msg) => Self::InvalidArgument(msg.clone()),
            // Driver errors are not Clone; keep the message.
            Self::Execute(err) => Self::Execute(err.to_string().into()),
            Self::Timeout(d) => Self::Timeout(*d),
        }
    }
}
