//! Clause rendering
//!
//! Renders normalized clauses into dialect text. Every bound value is pushed
//! onto `params` at the moment its placeholder is written, keeping the two
//! aligned left to right.

use crate::dialect::Dialect;
use crate::filter::{Assignment, Predicate, WhereClause};
use crate::ident::quote_identifier;
use type_mapping::BoundValue;

pub struct ClauseRenderer<'d, D: Dialect + ?Sized> {
    dialect: &'d D,
}

impl<'d, D: Dialect + ?Sized> ClauseRenderer<'d, D> {
    pub fn new(dialect: &'d D) -> Self {
        Self { dialect }
    }

    pub fn quote(&self, identifier: &str) -> String {
        quote_identifier(identifier, self.dialect.quote_char())
    }

    /// Comma-joined quoted field list, `*` when empty
    pub fn fields<S: AsRef<str>>(&self, fields: &[S]) -> String {
        if fields.is_empty() {
            return "*".to_string();
        }

        fields
            .iter()
            .map(|field| self.quote(field.as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build WHERE clause; empty when there are no clauses
    pub fn where_clause(&self, clauses: &[WhereClause], params: &mut Vec<BoundValue>) -> String {
        if clauses.is_empty() {
            return String::new();
        }

        let placeholder = self.dialect.placeholder();
        let conditions = clauses
            .iter()
            .map(|clause| {
                let field = self.quote(&clause.field);
                match &clause.predicate {
                    Predicate::Compare(operator, value) => {
                        params.push(value.clone());
                        format!("{} {}  {}", field, operator, placeholder)
                    }
                    Predicate::List(operator, values) => {
                        params.extend(values.iter().cloned());
                        let placeholders = vec![placeholder; values.len()].join(", ");
                        format!("{} {} ({})", field, operator, placeholders)
                    }
                    Predicate::Keyword(keyword) => format!("{} {}", field, keyword),
                }
            })
            .collect::<Vec<_>>()
            .join(" AND ");

        format!("WHERE {}", conditions)
    }

    /// Build ORDER BY clause; a leading `-` marks a descending field.
    /// Entries with no field name are skipped.
    pub fn order_clause<S: AsRef<str>>(&self, order_by: &[S]) -> String {
        let order_items = order_by
            .iter()
            .filter_map(|field| {
                let (name, descending) = match field.as_ref().strip_prefix('-') {
                    Some(name) => (name, true),
                    None => (field.as_ref(), false),
                };
                let quoted = self.quote(name);
                match (quoted.is_empty(), descending) {
                    (true, _) => None,
                    (false, true) => Some(format!("{} DESC", quoted)),
                    (false, false) => Some(quoted),
                }
            })
            .collect::<Vec<_>>();

        if order_items.is_empty() {
            return String::new();
        }

        format!("ORDER BY {}", order_items.join(", "))
    }

    /// Build LIMIT clause; zero counts as no limit
    pub fn limit_clause(&self, limit: Option<u64>) -> String {
        match limit {
            Some(limit) if limit > 0 => format!("LIMIT {}", limit),
            _ => String::new(),
        }
    }

    /// `field=<placeholder>` list used by SET
    pub fn set_clause(&self, assignments: &[Assignment], params: &mut Vec<BoundValue>) -> String {
        let placeholder = self.dialect.placeholder();
        assignments
            .iter()
            .map(|assignment| {
                params.push(assignment.value.clone());
                format!("{}={}", self.quote(&assignment.field), placeholder)
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Column list and matching placeholder list used by INSERT
    pub fn values_clause(
        &self,
        assignments: &[Assignment],
        params: &mut Vec<BoundValue>,
    ) -> (String, String) {
        let columns = assignments
            .iter()
            .map(|assignment| self.quote(&assignment.field))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec![self.dialect.placeholder(); assignments.len()].join(", ");
        params.extend(assignments.iter().map(|assignment| assignment.value.clone()));

        (columns, placeholders)
    }
}

/// Space-join the non-empty fragments
pub(crate) fn join_fragments<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    fragments
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Cql, MySql};
    use crate::filter::{where_clauses, Filter};
    use type_mapping::FieldValue;

    #[test]
    fn test_where_clause_empty() {
        let mut params = Vec::new();
        assert_eq!(ClauseRenderer::new(&MySql).where_clause(&[], &mut params), "");
        assert!(params.is_empty());
    }

    #[test]
    fn test_where_clause_mixed() {
        let clauses = where_clauses(
            &MySql,
            &[
                Filter::gt("a", 1),
                Filter::eq("deleted_at", FieldValue::Null),
                Filter::in_values("id", [7, 8]),
            ],
        )
        .unwrap();

        let mut params = Vec::new();
        let sql = ClauseRenderer::new(&MySql).where_clause(&clauses, &mut params);

        assert_eq!(
            sql,
            "WHERE `a` >  %s AND `deleted_at` IS NULL AND `id` IN (%s, %s)"
        );
        assert_eq!(
            params,
            vec![
                BoundValue::Integer(1),
                BoundValue::Integer(7),
                BoundValue::Integer(8)
            ]
        );
    }

    #[test]
    fn test_order_clause() {
        let renderer = ClauseRenderer::new(&MySql);
        assert_eq!(renderer.order_clause::<&str>(&[]), "");
        assert_eq!(
            renderer.order_clause(&["category", "-dt", "db.price"]),
            "ORDER BY `category`, `dt` DESC, `db`.`price`"
        );
        // only a leading marker counts
        assert_eq!(renderer.order_clause(&["a-b"]), "ORDER BY `a-b`");
    }

    #[test]
    fn test_order_clause_skips_nameless_entries() {
        let renderer = ClauseRenderer::new(&MySql);
        assert_eq!(renderer.order_clause(&["-", ""]), "");
        assert_eq!(renderer.order_clause(&["-", "a", ""]), "ORDER BY `a`");
    }

    #[test]
    fn test_limit_clause() {
        let renderer = ClauseRenderer::new(&Cql);
        assert_eq!(renderer.limit_clause(None), "");
        assert_eq!(renderer.limit_clause(Some(0)), "");
        assert_eq!(renderer.limit_clause(Some(100)), "LIMIT 100");
    }

    #[test]
    fn test_fields_star_and_quoted() {
        let renderer = ClauseRenderer::new(&Cql);
        assert_eq!(renderer.fields::<&str>(&[]), "*");
        assert_eq!(renderer.fields(&["a", "b"]), "\"a\", \"b\"");
    }

    #[test]
    fn test_join_fragments_skips_empty() {
        assert_eq!(join_fragments(["WHERE x", "", "LIMIT 1"]), "WHERE x LIMIT 1");
        assert_eq!(join_fragments(["", ""]), "");
    }
}
