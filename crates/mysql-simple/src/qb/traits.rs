//! Trait definitions for statement builders.

use crate::error::SqlResult;
use crate::executor::Executor;
use crate::value::SqlValue;
use std::fmt;
use std::future::Future;

/// The kind of statement a builder produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// DELETE statement
    Delete,
    /// Anything else (raw SQL)
    Other,
}

impl StatementKind {
    /// Lowercase name, used in log fields and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            StatementKind::Select => "select",
            StatementKind::Insert => "insert",
            StatementKind::Update => "update",
            StatementKind::Delete => "delete",
            StatementKind::Other => "other",
        }
    }

    /// Detect the kind from the leading keyword of a SQL string.
    pub fn from_sql(sql: &str) -> Self {
        let keyword = sql
            .trim_start()
            .split(|c: char| !c.is_ascii_alphabetic())
            .next()
            .unwrap_or_default();

        if keyword.eq_ignore_ascii_case("SELECT") {
            StatementKind::Select
        } else if keyword.eq_ignore_ascii_case("INSERT") {
            StatementKind::Insert
        } else if keyword.eq_ignore_ascii_case("UPDATE") {
            StatementKind::Update
        } else if keyword.eq_ignore_ascii_case("DELETE") {
            StatementKind::Delete
        } else {
            StatementKind::Other
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The result of building a statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(sql: impl Into<String>, values: Vec<SqlValue>) -> Self {
        Self {
            sql: sql.into(),
            values,
        }
    }

    /// Number of `?` placeholders in the SQL text.
    ///
    /// Counts every `?`, including any inside raw fragments, so it equals
    /// `values.len()` for statements made only of structured conditions.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Detected statement kind.
    pub fn kind(&self) -> StatementKind {
        StatementKind::from_sql(&self.sql)
    }

    /// Run as a query and return all rows.
    pub async fn fetch_all<E: Executor>(&self, exec: &E) -> SqlResult<Vec<E::Row>> {
        exec.query(&self.sql, &self.values).await
    }

    /// Run as a mutation and return the affected row count.
    pub async fn execute<E: Executor>(&self, exec: &E) -> SqlResult<u64> {
        exec.execute(&self.sql, &self.values).await
    }
}

/// Base trait for all statement builders.
///
/// Builders are single-use: `build` consumes the builder, so the value list
/// can never be accumulated twice.
pub trait Statement: Sized + Send {
    /// Render the SQL string and its ordered values.
    fn build(self) -> SqlResult<BuiltQuery>;

    /// The kind of statement this builder produces.
    fn kind(&self) -> StatementKind;

    /// Build and run the statement, returning all rows.
    fn fetch_all<E: Executor>(
        self,
        exec: &E,
    ) -> impl Future<Output = SqlResult<Vec<E::Row>>> + Send {
        async move {
            let query = self.build()?;
            exec.query(&query.sql, &query.values).await
        }
    }

    /// Build and run the statement, returning the first row if any.
    fn fetch_opt<E: Executor>(
        self,
        exec: &E,
    ) -> impl Future<Output = SqlResult<Option<E::Row>>> + Send {
        async move {
            let query = self.build()?;
            exec.query_opt(&query.sql, &query.values).await
        }
    }
}

/// Trait for mutation builders (INSERT/UPDATE/DELETE).
pub trait Mutation: Statement {
    /// Build and run the statement, returning the affected row count.
    fn execute<E: Executor>(self, exec: &E) -> impl Future<Output = SqlResult<u64>> + Send {
        async move {
            let query = self.build()?;
            exec.execute(&query.sql, &query.values).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_sql() {
        assert_eq!(StatementKind::from_sql("SELECT 1"), StatementKind::Select);
        assert_eq!(
            StatementKind::from_sql("  insert INTO `t` ( `a` ) VALUES ( ? )"),
            StatementKind::Insert
        );
        assert_eq!(StatementKind::from_sql("UPDATE `t` SET `a` = ?"), StatementKind::Update);
        assert_eq!(StatementKind::from_sql("DELETE FROM `t`"), StatementKind::Delete);
        assert_eq!(StatementKind::from_sql("SHOW TABLES"), StatementKind::Other);
        assert_eq!(StatementKind::from_sql(""), StatementKind::Other);
    }

    #[test]
    fn test_placeholder_count() {
        let q = BuiltQuery::new("SELECT * FROM `t` WHERE `a` = ? LIMIT ?", vec![1.into(), 2.into()]);
        assert_eq!(q.placeholder_count(), 2);
        assert_eq!(q.kind(), StatementKind::Select);
    }
}
