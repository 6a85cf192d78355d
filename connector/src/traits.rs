//! Trait definitions
//!
//! `Executor` is the seam between statement building and a live backend;
//! `Connector` is the uniform CRUD surface built on top of it.

use crate::errors::{ConnectorResult, ExecutorError};
use async_trait::async_trait;
use statement::{Filter, InsertMode, Statement};
use std::sync::Arc;
use type_mapping::Record;

/// Runs finished statements against a backend
#[async_trait]
pub trait Executor: Send + Sync {
    /// Run a statement that returns no rows; yields the affected row count
    async fn execute(&self, statement: &Statement) -> Result<u64, ExecutorError>;

    /// Run a statement and collect every row as a record keyed by column name
    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Record>, ExecutorError>;
}

#[async_trait]
impl<E: Executor + ?Sized> Executor for Arc<E> {
    async fn execute(&self, statement: &Statement) -> Result<u64, ExecutorError> {
        (**self).execute(statement).await
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Record>, ExecutorError> {
        (**self).fetch_all(statement).await
    }
}

/// Rows handed to `Connector::create`
#[derive(Debug, Clone, PartialEq)]
pub enum CreateData {
    Single(Record),
    Batch(Vec<Record>),
}

impl From<Record> for CreateData {
    fn from(record: Record) -> Self {
        CreateData::Single(record)
    }
}

impl From<Vec<Record>> for CreateData {
    fn from(records: Vec<Record>) -> Self {
        CreateData::Batch(records)
    }
}

/// Uniform CRUD operations over one backend
#[async_trait]
pub trait Connector: Send + Sync {
    /// Insert one row or a batch. Failed batch rows are logged and skipped;
    /// a failed single row is returned to the caller.
    async fn create(&self, table: &str, data: CreateData, mode: InsertMode) -> ConnectorResult<()>;

    /// Select rows; an empty `fields` slice selects every column
    async fn select(
        &self,
        table: &str,
        fields: &[&str],
        filters: &[Filter],
        order_by: &[&str],
        limit: Option<u64>,
    ) -> ConnectorResult<Vec<Record>>;

    async fn update(&self, table: &str, data: &Record, filters: &[Filter]) -> ConnectorResult<()>;

    async fn delete(&self, table: &str, filters: &[Filter]) -> ConnectorResult<()>;
}
