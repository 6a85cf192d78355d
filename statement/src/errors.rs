use thiserror::Error;

/// Failures raised while turning filters and data into a statement
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatementError {
    #[error("Unsupported operation: '{operator}' is not a {dialect} operator")]
    UnsupportedOperation {
        operator: String,
        dialect: &'static str,
    },

    #[error("Unsupported mode: '{0}' (expected INSERT, IGNORE or REPLACE)")]
    UnsupportedMode(String),

    #[error("Malformed IN value for field '{field}': {reason}")]
    MalformedInValue { field: String, reason: &'static str },

    #[error("No fields to write to '{0}'")]
    EmptyAssignments(String),
}

pub type StatementResult<T> = Result<T, StatementError>;
