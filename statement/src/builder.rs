//! Statement assembly
//!
//! Composes whole statements from rendered clauses. Assignment values are
//! always bound before WHERE values, matching their left-to-right position
//! in the text.

use crate::clause::{join_fragments, ClauseRenderer};
use crate::dialect::{Dialect, InsertMode};
use crate::errors::{StatementError, StatementResult};
use crate::filter::{assignments, where_clauses, Filter};
use type_mapping::{BoundValue, Record};

/// Query text plus the parameters bound to its placeholders, in order
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub query: String,
    pub params: Vec<BoundValue>,
}

impl Statement {
    pub fn new(query: String, params: Vec<BoundValue>) -> Self {
        Self { query, params }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn params(&self) -> &[BoundValue] {
        &self.params
    }

    pub fn into_parts(self) -> (String, Vec<BoundValue>) {
        (self.query, self.params)
    }
}

/// Build a SELECT statement
pub fn select<D, S, O>(
    dialect: &D,
    table: &str,
    fields: &[S],
    filters: &[Filter],
    order_by: &[O],
    limit: Option<u64>,
) -> StatementResult<Statement>
where
    D: Dialect + ?Sized,
    S: AsRef<str>,
    O: AsRef<str>,
{
    let clauses = where_clauses(dialect, filters)?;
    let renderer = ClauseRenderer::new(dialect);
    let mut params = Vec::new();

    let where_clause = renderer.where_clause(&clauses, &mut params);
    let order_clause = renderer.order_clause(order_by);
    let limit_clause = renderer.limit_clause(limit);
    let extra = join_fragments([
        where_clause.as_str(),
        order_clause.as_str(),
        limit_clause.as_str(),
        dialect.select_tail().unwrap_or_default(),
    ]);

    let query = format!(
        "SELECT {} FROM {} {}",
        renderer.fields(fields),
        renderer.quote(table),
        extra
    );

    Ok(finish(query, params))
}

/// Build an INSERT statement for one row
pub fn insert<D: Dialect + ?Sized>(
    dialect: &D,
    table: &str,
    data: &Record,
    mode: InsertMode,
) -> StatementResult<Statement> {
    if data.is_empty() {
        return Err(StatementError::EmptyAssignments(table.to_string()));
    }

    let renderer = ClauseRenderer::new(dialect);
    let mut params = Vec::with_capacity(data.len());

    let (columns, placeholders) = renderer.values_clause(&assignments(data), &mut params);
    let mut query = format!(
        "{} INTO {} ({}) VALUES ({})",
        dialect.insert_head(mode),
        renderer.quote(table),
        columns,
        placeholders
    );
    if let Some(tail) = dialect.insert_tail(mode) {
        query.push(' ');
        query.push_str(tail);
    }

    Ok(finish(query, params))
}

/// Build an UPDATE statement
pub fn update<D: Dialect + ?Sized>(
    dialect: &D,
    table: &str,
    filters: &[Filter],
    data: &Record,
) -> StatementResult<Statement> {
    if data.is_empty() {
        return Err(StatementError::EmptyAssignments(table.to_string()));
    }

    let clauses = where_clauses(dialect, filters)?;
    let renderer = ClauseRenderer::new(dialect);
    let mut params = Vec::new();

    let set_clause = renderer.set_clause(&assignments(data), &mut params);
    let where_clause = renderer.where_clause(&clauses, &mut params);
    let extra = join_fragments([
        where_clause.as_str(),
        dialect.update_tail().unwrap_or_default(),
    ]);

    let query = format!("UPDATE {} SET {} {}", renderer.quote(table), set_clause, extra);

    Ok(finish(query, params))
}

/// Build a DELETE statement
pub fn delete<D: Dialect + ?Sized>(
    dialect: &D,
    table: &str,
    filters: &[Filter],
) -> StatementResult<Statement> {
    let clauses = where_clauses(dialect, filters)?;
    let renderer = ClauseRenderer::new(dialect);
    let mut params = Vec::new();

    let where_clause = renderer.where_clause(&clauses, &mut params);
    let query = format!("DELETE FROM {} {}", renderer.quote(table), where_clause);

    Ok(finish(query, params))
}

fn finish(query: String, params: Vec<BoundValue>) -> Statement {
    debug_log!("[STATEMENT] {} ({} params)", query, params.len());
    Statement::new(query, params)
}
