//! CQL statements
//!
//! INSERT defaults to a lightweight transaction (`IF NOT EXISTS`) unless the
//! mode is REPLACE, UPDATE only touches existing rows (`IF EXISTS`) and every
//! SELECT carries `ALLOW FILTERING`.

use crate::builder::{self, Statement};
use crate::dialect::{Cql, Dialect};
use crate::errors::StatementResult;
use crate::filter::Filter;
use crate::ident;
use type_mapping::Record;

pub fn quote_identifier(identifier: &str) -> String {
    ident::quote_identifier(identifier, Cql.quote_char())
}

pub fn insert_query(table: &str, data: &Record, mode: &str) -> StatementResult<Statement> {
    builder::insert(&Cql, table, data, mode.parse()?)
}

pub fn update_query(table: &str, filters: &[Filter], data: &Record) -> StatementResult<Statement> {
    builder::update(&Cql, table, filters, data)
}

pub fn select_query<S: AsRef<str>, O: AsRef<str>>(
    table: &str,
    fields: &[S],
    filters: &[Filter],
    order_by: &[O],
    limit: Option<u64>,
) -> StatementResult<Statement> {
    builder::select(&Cql, table, fields, filters, order_by, limit)
}

pub fn delete_query(table: &str, filters: &[Filter]) -> StatementResult<Statement> {
    builder::delete(&Cql, table, filters)
}
