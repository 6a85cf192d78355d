//! Query dialects
//!
//! A dialect decides how identifiers are quoted, what a placeholder looks
//! like, which operator tokens exist and which keywords frame INSERT, UPDATE
//! and SELECT. Everything else in the pipeline is shared.

use crate::errors::StatementError;
use std::fmt;
use std::str::FromStr;

/// Comparison operators understood by at least one dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,          // =
    Ne,          // != (or <>)
    Gt,          // >
    Gte,         // >=
    Lt,          // <
    Lte,         // <=
    In,          // IN
    NotIn,       // NOT IN
    Like,        // LIKE
    NotLike,     // NOT LIKE
    Contains,    // CONTAINS
    ContainsKey, // CONTAINS KEY
}

impl Operator {
    /// Token emitted into query text
    pub fn to_sql(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::Contains => "CONTAINS",
            Operator::ContainsKey => "CONTAINS KEY",
        }
    }

    /// Operators whose operand is a parenthesized placeholder list
    pub fn takes_sequence(&self) -> bool {
        matches!(self, Operator::In | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// Conflict handling for INSERT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InsertMode {
    /// Fail on duplicate key
    #[default]
    Insert,
    /// Skip rows whose key already exists
    Ignore,
    /// Overwrite rows whose key already exists
    Replace,
}

impl FromStr for InsertMode {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INSERT" => Ok(InsertMode::Insert),
            "IGNORE" => Ok(InsertMode::Ignore),
            "REPLACE" => Ok(InsertMode::Replace),
            other => Err(StatementError::UnsupportedMode(other.to_string())),
        }
    }
}

impl fmt::Display for InsertMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InsertMode::Insert => "INSERT",
            InsertMode::Ignore => "IGNORE",
            InsertMode::Replace => "REPLACE",
        })
    }
}

pub trait Dialect: fmt::Debug + Send + Sync {
    /// Human readable name used in error messages
    fn name(&self) -> &'static str;

    fn quote_char(&self) -> char;

    /// Positional parameter marker
    fn placeholder(&self) -> &'static str;

    /// Map a normalized (trimmed, upper-cased) operator token
    fn operator(&self, token: &str) -> Option<Operator>;

    /// Statement head for an INSERT, e.g. `INSERT IGNORE`
    fn insert_head(&self, mode: InsertMode) -> &'static str;

    /// Keywords appended after the VALUES list
    fn insert_tail(&self, _mode: InsertMode) -> Option<&'static str> {
        None
    }

    /// Keywords appended after the WHERE clause of an UPDATE
    fn update_tail(&self) -> Option<&'static str> {
        None
    }

    /// Keywords appended at the end of a SELECT
    fn select_tail(&self) -> Option<&'static str> {
        None
    }

    /// Token replacing `=` / `!=` when compared against NULL
    fn null_comparison(&self, operator: Operator) -> Option<&'static str> {
        match operator {
            Operator::Eq => Some("IS NULL"),
            Operator::Ne => Some("IS NOT NULL"),
            _ => None,
        }
    }
}

/// MySQL, driven through `%s` positional parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &'static str {
        "MySQL"
    }

    fn quote_char(&self) -> char {
        '`'
    }

    fn placeholder(&self) -> &'static str {
        "%s"
    }

    fn operator(&self, token: &str) -> Option<Operator> {
        match token {
            "=" => Some(Operator::Eq),
            "!=" | "<>" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Gte),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Lte),
            "IN" => Some(Operator::In),
            "NOT IN" => Some(Operator::NotIn),
            "LIKE" => Some(Operator::Like),
            "NOT LIKE" => Some(Operator::NotLike),
            _ => None,
        }
    }

    fn insert_head(&self, mode: InsertMode) -> &'static str {
        match mode {
            InsertMode::Insert => "INSERT",
            InsertMode::Ignore => "INSERT IGNORE",
            InsertMode::Replace => "REPLACE",
        }
    }
}

/// Cassandra Query Language, driven through `?` positional parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Cql;

impl Dialect for Cql {
    fn name(&self) -> &'static str {
        "CQL"
    }

    fn quote_char(&self) -> char {
        '"'
    }

    fn placeholder(&self) -> &'static str {
        "?"
    }

    fn operator(&self, token: &str) -> Option<Operator> {
        match token {
            "=" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Gte),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Lte),
            "IN" => Some(Operator::In),
            "CONTAINS" => Some(Operator::Contains),
            "CONTAINS KEY" => Some(Operator::ContainsKey),
            "LIKE" => Some(Operator::Like),
            _ => None,
        }
    }

    // CQL INSERT is an upsert; only REPLACE keeps that behaviour
    fn insert_head(&self, _mode: InsertMode) -> &'static str {
        "INSERT"
    }

    fn insert_tail(&self, mode: InsertMode) -> Option<&'static str> {
        match mode {
            InsertMode::Replace => None,
            InsertMode::Insert | InsertMode::Ignore => Some("IF NOT EXISTS"),
        }
    }

    fn update_tail(&self) -> Option<&'static str> {
        Some("IF EXISTS")
    }

    fn select_tail(&self) -> Option<&'static str> {
        Some("ALLOW FILTERING")
    }

    // no IS NULL in CQL; the null is bound like any other value
    fn null_comparison(&self, _operator: Operator) -> Option<&'static str> {
        None
    }
}
