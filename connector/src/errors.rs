use statement::StatementError;
use thiserror::Error;

/// Failure reported by an executor while talking to a backend
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Row decoding error: {0}")]
    Decode(String),
}

impl ExecutorError {
    /// Only timeouts are worth another attempt
    pub fn is_timeout(&self) -> bool {
        matches!(self, ExecutorError::Timeout(_))
    }
}

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Statement error: {0}")]
    Statement(#[from] StatementError),

    #[error("Executor error: {0}")]
    Executor(#[from] ExecutorError),
}

pub type ConnectorResult<T> = Result<T, ConnectorError>;
