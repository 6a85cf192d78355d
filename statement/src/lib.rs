//! Statement - parameterized SQL/CQL builder for crudhaus
//!
//! This crate turns filter triples, field lists, ordering lists and data
//! records into query text plus an ordered parameter list. It never touches
//! the network and holds no state.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod builder;
pub mod clause;
pub mod coerce;
pub mod cql;
pub mod dialect;
pub mod errors;
pub mod filter;
pub mod ident;
pub mod sql;


pub use builder::Statement;
pub use dialect::{Cql, Dialect, InsertMode, MySql, Operator};
pub use errors::{StatementError, StatementResult};
pub use filter::{Assignment, Filter, Predicate, WhereClause};
pub use type_mapping::{BoundValue, FieldValue, Record};
