//! DELETE statement builder.

use crate::error::{SqlError, SqlResult};
use crate::ident::{normalize, quote};
use crate::qb::expr::{Predicate, build_predicate};
use crate::qb::traits::{BuiltQuery, Mutation, Statement, StatementKind};
use crate::value::{IntoValues, SqlValue};

/// DELETE statement builder.
///
/// A DELETE must be bounded by a WHERE, a LIMIT, or both.
#[derive(Clone, Debug)]
pub struct Delete {
    /// Table name (unquoted)
    table: String,
    /// WHERE predicate
    where_pred: Option<Predicate>,
    /// LIMIT (0 means none)
    limit: u64,
}

impl Delete {
    /// Create a new DELETE builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: normalize(table).to_string(),
            where_pred: None,
            limit: 0,
        }
    }

    /// Set the WHERE predicate (a `Where` tree or a raw string).
    ///
    /// Replaces any previous predicate and its values.
    pub fn where_clause(mut self, predicate: impl Into<Predicate>) -> Self {
        self.where_pred = Some(predicate.into());
        self
    }

    /// Set a raw WHERE clause with its values.
    pub fn where_raw(self, sql: impl Into<String>, values: impl IntoValues) -> Self {
        self.where_clause(Predicate::raw(sql, values))
    }

    /// Set LIMIT. Zero removes the clause.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = n;
        self
    }

    /// Render the statement and its ordered values.
    pub fn build(self) -> SqlResult<BuiltQuery> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingTable);
        }

        let clause = build_predicate(self.where_pred.as_ref())?;
        if clause.is_none() && self.limit == 0 {
            return Err(SqlError::MissingConstraint("delete"));
        }

        let mut sql = format!("DELETE FROM {}", quote(&self.table));
        let mut values = Vec::new();

        if let Some(clause) = clause {
            sql.push_str(" WHERE ");
            sql.push_str(&clause.sql);
            values.extend(clause.values);
        }

        if self.limit > 0 {
            sql.push_str(" LIMIT ?");
            values.push(SqlValue::UInt(self.limit));
        }

        Ok(BuiltQuery { sql, values })
    }
}

impl Statement for Delete {
    fn build(self) -> SqlResult<BuiltQuery> {
        Delete::build(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Delete
    }
}

impl Mutation for Delete {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::Where;

    #[test]
    fn test_delete_with_where() {
        let q = Delete::new("user")
            .where_clause(Where::and().eq("user_id", 3))
            .build()
            .unwrap();
        assert_eq!(q.sql, "DELETE FROM `user` WHERE `user_id` = ?");
        assert_eq!(q.values, vec![SqlValue::Int(3)]);
    }

    #[test]
    fn test_delete_with_limit_only() {
        let q = Delete::new("queue").limit(100).build().unwrap();
        assert_eq!(q.sql, "DELETE FROM `queue` LIMIT ?");
        assert_eq!(q.values, vec![SqlValue::UInt(100)]);
    }

    #[test]
    fn test_where_then_limit() {
        let q = Delete::new("session")
            .where_raw("`expires` < ?", "2024-01-01")
            .limit(50)
            .build()
            .unwrap();
        assert_eq!(q.sql, "DELETE FROM `session` WHERE `expires` < ? LIMIT ?");
        assert_eq!(
            q.values,
            vec![SqlValue::from("2024-01-01"), SqlValue::UInt(50)]
        );
    }

    #[test]
    fn test_unbounded_delete_is_rejected() {
        let err = Delete::new("user").build().unwrap_err();
        assert!(err.is_missing_constraint());
        assert_eq!(err.to_string(), "where or limit is required for delete");
    }

    #[test]
    fn test_missing_table() {
        let err = Delete::new("``").limit(1).build().unwrap_err();
        assert!(matches!(err, SqlError::MissingTable));
    }
}
