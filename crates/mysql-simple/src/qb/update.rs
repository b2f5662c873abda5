//! UPDATE statement builder.

use crate::error::{SqlError, SqlResult};
use crate::ident::{normalize, quote};
use crate::qb::expr::{Predicate, build_predicate};
use crate::qb::traits::{BuiltQuery, Mutation, Statement, StatementKind};
use crate::value::{IntoValues, SqlValue};

/// Default LIMIT of an UPDATE.
pub const DEFAULT_UPDATE_LIMIT: u64 = 1;

/// SET clause entry.
#[derive(Clone, Debug)]
enum SetClause {
    /// `` `col` = ? ``
    Value { column: String, value: SqlValue },
    /// `` `col` = <expr> `` with the expression's own values
    Expr {
        column: String,
        expr: String,
        values: Vec<SqlValue>,
    },
}

/// UPDATE statement builder.
///
/// The limit defaults to 1, so a builder without a WHERE still only touches
/// one row. Use [`Update::no_limit`] together with a WHERE to update many.
///
/// # Example
/// ```
/// use mysql_simple::{SqlValue, Where, qb};
///
/// let built = qb::update("user")
///     .set("level", 2)
///     .where_clause(Where::and().eq("user_id", 9))
///     .build()
///     .unwrap();
///
/// assert_eq!(built.sql, "UPDATE `user` SET `level` = ? WHERE `user_id` = ? LIMIT ?");
/// assert_eq!(built.values, vec![SqlValue::Int(2), SqlValue::Int(9), SqlValue::UInt(1)]);
/// ```
#[derive(Clone, Debug)]
pub struct Update {
    /// Table name (unquoted)
    table: String,
    /// SET entries in insertion order
    set_clauses: Vec<SetClause>,
    /// WHERE predicate
    where_pred: Option<Predicate>,
    /// LIMIT (0 means none)
    limit: u64,
}

impl Update {
    /// Create a new UPDATE builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: normalize(table).to_string(),
            set_clauses: Vec::new(),
            where_pred: None,
            limit: DEFAULT_UPDATE_LIMIT,
        }
    }

    /// Set `` `column` = ? ``.
    pub fn set(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.set_clauses.push(SetClause::Value {
            column: normalize(column).to_string(),
            value: value.into(),
        });
        self
    }

    /// Set one column per pair, in iteration order.
    pub fn values<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<SqlValue>,
    {
        pairs
            .into_iter()
            .fold(self, |qb, (column, value)| qb.set(column.as_ref(), value))
    }

    /// Set `` `column` = <expr> `` (e.g. `` `hits` + ? ``) with the
    /// expression's values.
    pub fn set_expr(mut self, column: &str, expr: &str, values: impl IntoValues) -> Self {
        self.set_clauses.push(SetClause::Expr {
            column: normalize(column).to_string(),
            expr: expr.trim().to_string(),
            values: values.into_values(),
        });
        self
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

    /// Remove the LIMIT clause. A WHERE is then required.
    pub fn no_limit(self) -> Self {
        self.limit(0)
    }

    /// Render the statement and its ordered values.
    pub fn build(self) -> SqlResult<BuiltQuery> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingTable);
        }
        if self.set_clauses.is_empty() {
            return Err(SqlError::MissingColumns);
        }

        let clause = build_predicate(self.where_pred.as_ref())?;
        if clause.is_none() && self.limit == 0 {
            return Err(SqlError::MissingConstraint("update"));
        }

        let mut values = Vec::new();
        let sets = self
            .set_clauses
            .into_iter()
            .map(|set| match set {
                SetClause::Value { column, value } => {
                    values.push(value);
                    format!("{} = ?", quote(&column))
                }
                SetClause::Expr {
                    column,
                    expr,
                    values: bound,
                } => {
                    values.extend(bound);
                    format!("{} = {}", quote(&column), expr)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!("UPDATE {} SET {}", quote(&self.table), sets);

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

impl Statement for Update {
    fn build(self) -> SqlResult<BuiltQuery> {
        Update::build(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }
}

impl Mutation for Update {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qb::expr::Where;

    #[test]
    fn test_default_limit() {
        let q = Update::new("user").values([("level", 2)]).build().unwrap();
        assert_eq!(q.sql, "UPDATE `user` SET `level` = ? LIMIT ?");
        assert_eq!(q.values, vec![SqlValue::Int(2), SqlValue::UInt(1)]);
    }

    #[test]
    fn test_where_before_limit() {
        let q = Update::new("user")
            .values([("level", SqlValue::from(2)), ("email", SqlValue::from("x"))])
            .where_clause(Where::and().eq("user_id", 5))
            .limit(10)
            .build()
            .unwrap();
        assert_eq!(
            q.sql,
            "UPDATE `user` SET `level` = ?, `email` = ? WHERE `user_id` = ? LIMIT ?"
        );
        assert_eq!(
            q.values,
            vec![
                SqlValue::Int(2),
                SqlValue::from("x"),
                SqlValue::Int(5),
                SqlValue::UInt(10),
            ]
        );
    }

    #[test]
    fn test_no_limit_with_where() {
        let q = Update::new("user")
            .set("level", 0)
            .where_raw("`level` > ?", 5)
            .no_limit()
            .build()
            .unwrap();
        assert_eq!(q.sql, "UPDATE `user` SET `level` = ? WHERE `level` > ?");
        assert_eq!(q.values, vec![SqlValue::Int(0), SqlValue::Int(5)]);
    }

    #[test]
    fn test_no_limit_without_where_is_rejected() {
        let err = Update::new("user").set("level", 0).limit(0).build().unwrap_err();
        assert!(err.is_missing_constraint());
        assert_eq!(err.to_string(), "where or limit is required for update");
    }

    #[test]
    fn test_empty_where_tree_is_not_a_constraint() {
        let err = Update::new("user")
            .set("level", 0)
            .where_clause(Where::and())
            .no_limit()
            .build()
            .unwrap_err();
        assert!(err.is_missing_constraint());
    }

    #[test]
    fn test_set_expr_values_in_order() {
        let q = Update::new("counter")
            .set("name", "a")
            .set_expr("hits", "`hits` + ?", 3)
            .where_clause(Where::and().eq("id", 1))
            .build()
            .unwrap();
        assert_eq!(
            q.sql,
            "UPDATE `counter` SET `name` = ?, `hits` = `hits` + ? WHERE `id` = ? LIMIT ?"
        );
        assert_eq!(
            q.values,
            vec![
                SqlValue::from("a"),
                SqlValue::Int(3),
                SqlValue::Int(1),
                SqlValue::UInt(1),
            ]
        );
    }

    #[test]
    fn test_missing_columns_and_table() {
        assert!(matches!(
            Update::new("user").build().unwrap_err(),
            SqlError::MissingColumns
        ));
        assert!(matches!(
            Update::new("").set("a", 1).build().unwrap_err(),
            SqlError::MissingTable
        ));
    }
}
