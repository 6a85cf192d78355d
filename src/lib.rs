//! # Crudhaus
//!
//! One create/select/update/delete surface over MySQL and Cassandra. Filters,
//! field lists, ordering and data records are turned into parameterized SQL or
//! CQL by the `statement` crate and executed through a connector.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crudhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let crudhaus = Crudhaus::load()?;
//!     let goods = crudhaus.mysql().await?;
//!
//!     let rows = goods
//!         .select(
//!             "goods",
//!             &["dt", "category", "store_name", "discount_price"],
//!             &[Filter::eq("dt", "2018-05-09")],
//!             &["category"],
//!             Some(100),
//!         )
//!         .await?;
//!     println!("Fetched {} rows", rows.len());
//!
//!     goods
//!         .update(
//!             "goods",
//!             &Record::new().with("discount_price", 110),
//!             &[Filter::eq("store_name", "xxx")],
//!         )
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

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

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::Crudhaus;
pub use errors::CrudhausError;

// Re-export centralized config
pub use config::{AppConfig, CassandraConfig, ExecutionConfig, MySqlConfig};

// Re-export internal crates used by the public API
pub use connector;
pub use statement;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
