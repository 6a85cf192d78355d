//! Core Crudhaus functionality
//!
//! This module contains the main Crudhaus struct, which turns configuration
//! into ready connectors and keeps named connectors for reuse.

use std::collections::HashMap;
use std::sync::Arc;

use connector::{CassandraConnector, Connector, Executor, RetryPolicy, RetryingExecutor};
#[cfg(feature = "mysql")]
use connector::{MySqlConnector, MySqlExecutor};

use crate::errors::CrudhausError;
use config::AppConfig;

/// Main Crudhaus coordinator that owns the configuration and registered connectors
pub struct Crudhaus {
    config: AppConfig,
    connectors: HashMap<String, Arc<dyn Connector>>,
}

impl std::fmt::Debug for Crudhaus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Crudhaus")
            .field("has_mysql", &self.config.mysql.is_some())
            .field("has_cassandra", &self.config.cassandra.is_some())
            .field("connectors", &self.list_connectors())
            .finish()
    }
}

impl Crudhaus {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            connectors: HashMap::new(),
        }
    }

    /// Create from `CRUDHAUS_CONFIG` or `./crudhaus.toml`
    pub fn load() -> Result<Self, CrudhausError> {
        Ok(Self::new(AppConfig::load()?))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Timeout and retry policy shared by every connector built here
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::from(&self.config.execution)
    }

    /// Connect to MySQL using the `[mysql]` section
    #[cfg(feature = "mysql")]
    pub async fn mysql(
        &self,
    ) -> Result<MySqlConnector<RetryingExecutor<MySqlExecutor>>, CrudhausError> {
        let mysql = self
            .config
            .mysql
            .as_ref()
            .ok_or(CrudhausError::MissingSection("mysql"))?;

        debug_log!(
            "[CRUDHAUS] Connecting to MySQL {}:{}/{}",
            mysql.host,
            mysql.port,
            mysql.database
        );
        let executor = MySqlExecutor::connect(mysql).await?;
        Ok(MySqlConnector::mysql(RetryingExecutor::new(
            executor,
            self.retry_policy(),
        )))
    }

    /// Wrap a Cassandra executor configured for the `[cassandra]` section
    pub fn cassandra<E: Executor>(
        &self,
        executor: E,
    ) -> Result<CassandraConnector<RetryingExecutor<E>>, CrudhausError> {
        let cassandra = self
            .config
            .cassandra
            .as_ref()
            .ok_or(CrudhausError::MissingSection("cassandra"))?;

        tracing::info!(
            "[CASSANDRA] Using keyspace {} on {}",
            cassandra.keyspace,
            cassandra.node_addresses().join(", ")
        );
        Ok(CassandraConnector::cassandra(RetryingExecutor::new(
            executor,
            self.retry_policy(),
        )))
    }

    /// Register a connector under a given name
    pub fn register_connector<C>(&mut self, name: String, connector: C) -> Result<(), CrudhausError>
    where
        C: Connector + 'static,
    {
        if self.connectors.contains_key(&name) {
            return Err(CrudhausError::ConnectorAlreadyRegistered(name));
        }

        trace_log!("[CRUDHAUS] Registered connector {}", name);
        self.connectors.insert(name, Arc::new(connector));
        Ok(())
    }

    /// Get a registered connector by name
    pub fn connector(&self, name: &str) -> Result<Arc<dyn Connector>, CrudhausError> {
        self.connectors
            .get(name)
            .cloned()
            .ok_or_else(|| CrudhausError::ConnectorNotFound(name.to_string()))
    }

    /// List all registered connector names
    pub fn list_connectors(&self) -> Vec<&String> {
        self.connectors.keys().collect()
    }

    /// Remove a connector by name
    pub fn unregister_connector(&mut self, name: &str) -> Result<(), CrudhausError> {
        self.connectors
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CrudhausError::ConnectorNotFound(name.to_string()))
    }
}
