//! Filter and assignment normalization
//!
//! Raw `(field, operator, value)` triples are checked against a dialect and
//! turned into `WhereClause`s before any text is rendered, so a bad filter
//! never produces a partial query.

use crate::coerce::{coerce, coerce_sequence};
use crate::dialect::{Dialect, Operator};
use crate::errors::{StatementError, StatementResult};
use type_mapping::{BoundValue, FieldValue, Record};

/// Single caller-supplied condition
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub operator: String,
    pub value: FieldValue,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, "=", value)
    }

    pub fn ne(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, "!=", value)
    }

    pub fn gt(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, ">", value)
    }

    pub fn gte(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, ">=", value)
    }

    pub fn lt(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, "<", value)
    }

    pub fn lte(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::new(field, "<=", value)
    }

    pub fn in_values<T: Into<FieldValue>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        Self::new(field, "IN", FieldValue::List(values))
    }
}

impl<F, O, V> From<(F, O, V)> for Filter
where
    F: Into<String>,
    O: Into<String>,
    V: Into<FieldValue>,
{
    fn from((field, operator, value): (F, O, V)) -> Self {
        Self::new(field, operator, value)
    }
}

/// What a normalized clause compares against
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `<op> <placeholder>`
    Compare(Operator, BoundValue),
    /// `<op> (<placeholder>, ...)`; never empty
    List(Operator, Vec<BoundValue>),
    /// Fixed keyword comparison such as `IS NULL`, binds nothing
    Keyword(&'static str),
}

/// A filter checked against a dialect, with its value coerced
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub field: String,
    pub predicate: Predicate,
}

impl WhereClause {
    pub fn normalize<D: Dialect + ?Sized>(dialect: &D, filter: &Filter) -> StatementResult<Self> {
        let token = normalize_token(&filter.operator);
        let operator = dialect
            .operator(&token)
            .ok_or_else(|| StatementError::UnsupportedOperation {
                operator: filter.operator.clone(),
                dialect: dialect.name(),
            })?;

        let predicate = if operator.takes_sequence() {
            let values = coerce_sequence(&filter.value).ok_or_else(|| {
                StatementError::MalformedInValue {
                    field: filter.field.clone(),
                    reason: "value is not a sequence",
                }
            })?;
            if values.is_empty() {
                return Err(StatementError::MalformedInValue {
                    field: filter.field.clone(),
                    reason: "sequence is empty",
                });
            }
            Predicate::List(operator, values)
        } else if filter.value.is_null() {
            match dialect.null_comparison(operator) {
                Some(keyword) => Predicate::Keyword(keyword),
                None => Predicate::Compare(operator, BoundValue::Null),
            }
        } else {
            Predicate::Compare(operator, coerce(&filter.value))
        };

        Ok(Self {
            field: filter.field.clone(),
            predicate,
        })
    }

    /// Number of parameters this clause binds
    pub fn param_count(&self) -> usize {
        match &self.predicate {
            Predicate::Compare(..) => 1,
            Predicate::List(_, values) => values.len(),
            Predicate::Keyword(_) => 0,
        }
    }
}

/// A `field = value` pair from INSERT/UPDATE data
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub field: String,
    pub value: BoundValue,
}

/// Normalize every filter, failing on the first bad one
pub fn where_clauses<D: Dialect + ?Sized>(
    dialect: &D,
    filters: &[Filter],
) -> StatementResult<Vec<WhereClause>> {
    filters
        .iter()
        .map(|filter| WhereClause::normalize(dialect, filter))
        .collect()
}

/// Assignments in the record's insertion order
pub fn assignments(data: &Record) -> Vec<Assignment> {
    data.iter()
        .map(|(field, value)| Assignment {
            field: field.to_string(),
            value: coerce(value),
        })
        .collect()
}

/// Trim, collapse inner whitespace and upper-case an operator token
fn normalize_token(operator: &str) -> String {
    operator
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
