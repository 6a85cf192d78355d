//! Convenience re-exports for common Crudhaus usage
//!
//! # Example
//!
//! ```rust
//! use crudhaus::prelude::*;
//!
//! let filters = [Filter::eq("dt", "2018-05-09")];
//! let statement = sql::select_query("goods", &["dt"], &filters, &["-dt"], Some(10))?;
//! assert_eq!(statement.params().len(), 1);
//! # Ok::<(), StatementError>(())
//! ```

// Core Crudhaus components
pub use crate::core::Crudhaus;
pub use crate::errors::CrudhausError;

// Re-export centralized config
pub use config::{AppConfig, CassandraConfig, ExecutionConfig, MySqlConfig};

// Statement building
pub use statement::{
    cql, sql, Cql, Dialect, Filter, InsertMode, MySql, Operator, Statement, StatementError,
};

// Connectors and executors
pub use connector::{
    CassandraConnector, Connector, ConnectorError, CreateData, DryRunExecutor, Executor,
    ExecutorError, MySqlConnector, RetryPolicy, RetryingExecutor, StoreConnector,
};
#[cfg(feature = "mysql")]
pub use connector::MySqlExecutor;

// Values and records
pub use type_mapping::{serialize_to_record, BoundValue, FieldValue, Record};

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use tokio;
