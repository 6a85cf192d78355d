//! MySQL executor backed by a sqlx connection pool

use crate::errors::ExecutorError;
use crate::traits::Executor;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use config::MySqlConfig;
use sqlx::mysql::{MySqlArguments, MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row, TypeInfo};
use statement::{BoundValue, Statement};
use std::time::Duration;
use type_mapping::{FieldValue, Record};

#[derive(Debug, Clone)]
pub struct MySqlExecutor {
    pool: MySqlPool,
}

impl MySqlExecutor {
    /// Open a pool sized by the configuration
    pub async fn connect(config: &MySqlConfig) -> Result<Self, ExecutorError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.username)
            .password(&config.password)
            .database(&config.database)
            .charset(&config.charset);

        let pool = MySqlPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        tracing::info!(
            "[MYSQL] Connected to {}:{}/{} (pool {}..{})",
            config.host,
            config.port,
            config.database,
            config.min_connections,
            config.max_connections
        );
        Ok(Self { pool })
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Executor for MySqlExecutor {
    async fn execute(&self, statement: &Statement) -> Result<u64, ExecutorError> {
        let sql = native_placeholders(statement.query());
        let query = bind_params(sqlx::query(&sql), statement.params());
        let result = query.execute(&self.pool).await.map_err(map_sqlx_error)?;
        Ok(result.rows_affected())
    }

    async fn fetch_all(&self, statement: &Statement) -> Result<Vec<Record>, ExecutorError> {
        let sql = native_placeholders(statement.query());
        let query = bind_params(sqlx::query(&sql), statement.params());
        let rows = query.fetch_all(&self.pool).await.map_err(map_sqlx_error)?;
        rows.iter()
            .map(decode_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }
}

/// The builder writes `%s`; the driver binds `?`. Backtick-quoted
/// identifiers are copied untouched.
fn native_placeholders(query: &str) -> String {
    let mut native = String::with_capacity(query.len());
    let mut quoted = false;
    let mut chars = query.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '`' => {
                quoted = !quoted;
                native.push(c);
            }
            '%' if !quoted && chars.peek() == Some(&'s') => {
                chars.next();
                native.push('?');
            }
            _ => native.push(c),
        }
    }
    native
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &[BoundValue],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = bind_param(query, param);
    }
    query
}

fn bind_param<'q>(
    query: Query<'q, MySql, MySqlArguments>,
    param: &BoundValue,
) -> Query<'q, MySql, MySqlArguments> {
    match param {
        BoundValue::Null => query.bind(Option::<String>::None),
        BoundValue::Boolean(b) => query.bind(*b),
        BoundValue::Integer(i) => query.bind(*i),
        BoundValue::Float(f) => query.bind(*f),
        BoundValue::Text(s) => query.bind(s.clone()),
        BoundValue::Uuid(id) => query.bind(id.to_string()),
        BoundValue::Date(date) => query.bind(*date),
        BoundValue::Timestamp(ts) => query.bind(*ts),
        BoundValue::Json(value) => query.bind(sqlx::types::Json(value.clone())),
        // stored as a JSON array
        BoundValue::List(_) => query.bind(sqlx::types::Json(param.to_json())),
    }
}

fn decode_row(row: &MySqlRow) -> Result<Record, sqlx::Error> {
    let mut record = Record::with_capacity(row.columns().len());
    for column in row.columns() {
        let value = decode_column(row, column.ordinal(), column.type_info().name())?;
        record.insert(column.name(), value);
    }
    Ok(record)
}

fn decode_column(
    row: &MySqlRow,
    index: usize,
    type_name: &str,
) -> Result<FieldValue, sqlx::Error> {
    let value = match type_name {
        "BOOLEAN" => row.try_get::<Option<bool>, _>(index)?.into(),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            row.try_get::<Option<i64>, _>(index)?.into()
        }
        "YEAR" => row.try_get_unchecked::<Option<i64>, _>(index)?.into(),
        name if name.ends_with("UNSIGNED") => match row.try_get::<Option<u64>, _>(index)? {
            Some(v) => i64::try_from(v)
                .map(FieldValue::Integer)
                .unwrap_or_else(|_| FieldValue::Text(v.to_string())),
            None => FieldValue::Null,
        },
        "FLOAT" | "DOUBLE" => row.try_get::<Option<f64>, _>(index)?.into(),
        "DATE" => row.try_get::<Option<NaiveDate>, _>(index)?.into(),
        "DATETIME" | "TIMESTAMP" => row.try_get::<Option<NaiveDateTime>, _>(index)?.into(),
        "TIME" => row
            .try_get::<Option<NaiveTime>, _>(index)?
            .map(|t| FieldValue::Text(t.to_string()))
            .unwrap_or(FieldValue::Null),
        "JSON" => row
            .try_get::<Option<sqlx::types::Json<serde_json::Value>>, _>(index)?
            .map(|json| FieldValue::Json(json.0))
            .unwrap_or(FieldValue::Null),
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => row
            .try_get_unchecked::<Option<Vec<u8>>, _>(index)?
            .map(|bytes| FieldValue::Text(String::from_utf8_lossy(&bytes).into_owned()))
            .unwrap_or(FieldValue::Null),
        // DECIMAL, CHAR, VARCHAR, TEXT, ENUM, SET arrive as text
        _ => row.try_get_unchecked::<Option<String>, _>(index)?.into(),
    };
    Ok(value)
}

fn map_sqlx_error(e: sqlx::Error) -> ExecutorError {
    match &e {
        sqlx::Error::PoolTimedOut => ExecutorError::Timeout(e.to_string()),
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::Configuration(_) => ExecutorError::Connection(e.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. } => ExecutorError::Decode(e.to_string()),
        _ => ExecutorError::Query(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_placeholders() {
        assert_eq!(
            native_placeholders("UPDATE `t` SET `x`=%s WHERE `id` =  %s"),
            "UPDATE `t` SET `x`=? WHERE `id` =  ?"
        );
        assert_eq!(native_placeholders("SELECT * FROM `t` "), "SELECT * FROM `t` ");
    }

    #[test]
    fn test_native_placeholders_leave_identifiers_alone() {
        let select = statement::sql::select_query(
            "t",
            &["rate%s"],
            &[statement::Filter::eq("a", 1)],
            &["-rate%s"],
            None,
        )
        .unwrap();

        let native = native_placeholders(select.query());
        assert_eq!(
            native,
            "SELECT `rate%s` FROM `t` WHERE `a` =  ? ORDER BY `rate%s` DESC"
        );
        assert_eq!(native.matches('?').count(), select.params().len());
    }

    #[test]
    fn test_timeout_errors_are_retryable() {
        assert!(map_sqlx_error(sqlx::Error::PoolTimedOut).is_timeout());
        assert!(!map_sqlx_error(sqlx::Error::RowNotFound).is_timeout());
        assert!(matches!(
            map_sqlx_error(sqlx::Error::PoolClosed),
            ExecutorError::Connection(_)
        ));
    }
}
