//! MySQL statements
//!
//! Thin entry points over the shared builder with the `MySql` dialect.

use crate::builder::{self, Statement};
use crate::dialect::{Dialect, MySql};
use crate::errors::StatementResult;
use crate::filter::Filter;
use crate::ident;
use type_mapping::Record;

pub fn quote_identifier(identifier: &str) -> String {
    ident::quote_identifier(identifier, MySql.quote_char())
}

/// `mode` is one of `INSERT`, `IGNORE`, `REPLACE`
pub fn insert_query(table: &str, data: &Record, mode: &str) -> StatementResult<Statement> {
    builder::insert(&MySql, table, data, mode.parse()?)
}

pub fn update_query(table: &str, filters: &[Filter], data: &Record) -> StatementResult<Statement> {
    builder::update(&MySql, table, filters, data)
}

pub fn select_query<S: AsRef<str>, O: AsRef<str>>(
    table: &str,
    fields: &[S],
    filters: &[Filter],
    order_by: &[O],
    limit: Option<u64>,
) -> StatementResult<Statement> {
    builder::select(&MySql, table, fields, filters, order_by, limit)
}

pub fn delete_query(table: &str, filters: &[Filter]) -> StatementResult<Statement> {
    builder::delete(&MySql, table, filters)
}
