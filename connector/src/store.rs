//! Dialect-generic connector
//!
//! One implementation serves both backends: the dialect decides the text,
//! the executor decides where it goes.

use crate::errors::ConnectorResult;
use crate::traits::{Connector, CreateData, Executor};
use async_trait::async_trait;
use statement::{builder, Cql, Dialect, Filter, InsertMode, MySql, Statement};
use type_mapping::Record;

/// CRUD connector for any dialect and executor
pub struct StoreConnector<D: Dialect, E: Executor> {
    dialect: D,
    executor: E,
}

pub type MySqlConnector<E> = StoreConnector<MySql, E>;
pub type CassandraConnector<E> = StoreConnector<Cql, E>;

impl<D: Dialect, E: Executor> std::fmt::Debug for StoreConnector<D, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConnector")
            .field("dialect", &self.dialect.name())
            .finish()
    }
}

impl<D: Dialect, E: Executor> StoreConnector<D, E> {
    pub fn new(dialect: D, executor: E) -> Self {
        Self { dialect, executor }
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn into_executor(self) -> E {
        self.executor
    }

    async fn create_row(
        &self,
        table: &str,
        record: &Record,
        mode: InsertMode,
    ) -> ConnectorResult<()> {
        let statement = builder::insert(&self.dialect, table, record, mode)?;
        self.run(&statement).await
    }

    async fn run(&self, statement: &Statement) -> ConnectorResult<()> {
        tracing::debug!("[{}] {}", self.dialect.name(), statement.query());
        let affected = self.executor.execute(statement).await?;
        tracing::debug!("[{}] {} rows affected", self.dialect.name(), affected);
        Ok(())
    }
}

impl<E: Executor> StoreConnector<MySql, E> {
    pub fn mysql(executor: E) -> Self {
        Self::new(MySql, executor)
    }
}

impl<E: Executor> StoreConnector<Cql, E> {
    pub fn cassandra(executor: E) -> Self {
        Self::new(Cql, executor)
    }
}

#[async_trait]
impl<D: Dialect, E: Executor> Connector for StoreConnector<D, E> {
    async fn create(&self, table: &str, data: CreateData, mode: InsertMode) -> ConnectorResult<()> {
        match data {
            CreateData::Single(record) => self.create_row(table, &record, mode).await,
            CreateData::Batch(records) => {
                let total = records.len();
                let mut failed = 0usize;
                for (index, record) in records.iter().enumerate() {
                    if let Err(e) = self.create_row(table, record, mode).await {
                        failed += 1;
                        tracing::warn!(
                            "[CREATE] Skipping row {} of {} in {}: {}",
                            index + 1,
                            total,
                            table,
                            e
                        );
                    }
                }
                if failed > 0 {
                    tracing::warn!(
                        "[CREATE] {} of {} rows failed to insert into {}",
                        failed,
                        total,
                        table
                    );
                }
                Ok(())
            }
        }
    }

    async fn select(
        &self,
        table: &str,
        fields: &[&str],
        filters: &[Filter],
        order_by: &[&str],
        limit: Option<u64>,
    ) -> ConnectorResult<Vec<Record>> {
        let statement = builder::select(&self.dialect, table, fields, filters, order_by, limit)?;
        tracing::debug!("[{}] {}", self.dialect.name(), statement.query());
        let rows = self.executor.fetch_all(&statement).await?;
        tracing::debug!("[{}] {} rows fetched", self.dialect.name(), rows.len());
        Ok(rows)
    }

    async fn update(&self, table: &str, data: &Record, filters: &[Filter]) -> ConnectorResult<()> {
        let statement = builder::update(&self.dialect, table, filters, data)?;
        self.run(&statement).await
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> ConnectorResult<()> {
        let statement = builder::delete(&self.dialect, table, filters)?;
        self.run(&statement).await
    }
}
