//! Error types for the Crudhaus crate
//!
//! Statement and executor failures arrive wrapped in `ConnectorError` once a
//! connector is in play; configuration problems surface here before any
//! connection is attempted.

use config::ConfigError;
use connector::{ConnectorError, ExecutorError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudhausError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Connector error: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Connection error: {0}")]
    Connection(#[from] ExecutorError),

    #[error("Missing [{0}] section in configuration")]
    MissingSection(&'static str),

    #[error("Connector not found: {0}")]
    ConnectorNotFound(String),

    #[error("Connector already registered: {0}")]
    ConnectorAlreadyRegistered(String),
}
