//! Connector - uniform CRUD over MySQL and Cassandra
//!
//! A connector builds statements with the `statement` crate and hands them to
//! an [`Executor`]. Executors own the transport: a sqlx pool for MySQL, a
//! dry-run recorder for previews and tests, and a retry wrapper for either.

pub mod dry_run;
pub mod errors;
#[cfg(feature = "mysql")]
pub mod mysql;
pub mod retry;
pub mod store;
pub mod traits;

#[cfg(test)]
mod tests;

pub use dry_run::DryRunExecutor;
pub use errors::{ConnectorError, ConnectorResult, ExecutorError};
#[cfg(feature = "mysql")]
pub use mysql::MySqlExecutor;
pub use retry::{RetryPolicy, RetryingExecutor};
pub use store::{CassandraConnector, MySqlConnector, StoreConnector};
pub use traits::{Connector, CreateData, Executor};
