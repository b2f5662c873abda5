//! INSERT statement builder.

use crate::error::{SqlError, SqlResult};
use crate::ident::{normalize, questions, quote, quote_list};
use crate::qb::traits::{BuiltQuery, Mutation, Statement, StatementKind};
use crate::value::{IntoValues, SqlValue};

/// `ON DUPLICATE KEY UPDATE` behaviour.
#[derive(Clone, Debug, PartialEq)]
pub enum OnDuplicate {
    /// `` `c` = VALUES(`c`) `` for every inserted column.
    UpdateAll,
    /// Explicit update clause; its values are bound after the inserted values.
    Update { clause: String, values: Vec<SqlValue> },
    /// `` `c` = `c` ``: turns a duplicate into a no-op.
    Ignore { column: String },
}

/// INSERT statement builder.
///
/// # Example
/// ```
/// use mysql_simple::{SqlValue, qb};
///
/// let built = qb::insert("user")
///     .add("user_id", 1)
///     .add_all([("email", SqlValue::from("a@b.com")), ("level", SqlValue::from(2))])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     built.sql,
///     "INSERT INTO `user` ( `user_id`, `email`, `level` ) VALUES ( ?, ?, ? )"
/// );
/// assert_eq!(built.values.len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Insert {
    /// Table name (unquoted)
    table: String,
    /// Column names (unquoted)
    columns: Vec<String>,
    /// Values, one per column
    values: Vec<SqlValue>,
    /// Duplicate-key handling
    on_duplicate: Option<OnDuplicate>,
}

impl Insert {
    /// Create a new INSERT builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: normalize(table).to_string(),
            columns: Vec::new(),
            values: Vec::new(),
            on_duplicate: None,
        }
    }

    /// Add a column and its value.
    pub fn add(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.columns.push(normalize(column).to_string());
        self.values.push(value.into());
        self
    }

    /// Add one column per pair, in iteration order.
    pub fn add_all<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<SqlValue>,
    {
        pairs
            .into_iter()
            .fold(self, |qb, (column, value)| qb.add(column.as_ref(), value))
    }

    /// Append a column list and a value list separately.
    ///
    /// The lengths are checked at build time
    /// ([`SqlError::ColumnValueMismatch`]).
    pub fn add_list<S: AsRef<str>>(mut self, columns: &[S], values: impl IntoValues) -> Self {
        self.columns
            .extend(columns.iter().map(|c| normalize(c.as_ref()).to_string()));
        self.values.extend(values.into_values());
        self
    }

    /// Set duplicate-key handling used by [`Insert::build`].
    pub fn on_duplicate(mut self, action: OnDuplicate) -> Self {
        self.on_duplicate = Some(action);
        self
    }

    fn check(&self) -> SqlResult<()> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingTable);
        }
        if self.columns.is_empty() {
            return Err(SqlError::MissingColumns);
        }
        if self.columns.len() != self.values.len() {
            return Err(SqlError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: self.values.len(),
            });
        }
        Ok(())
    }

    /// Render the statement and its ordered values.
    pub fn build(self) -> SqlResult<BuiltQuery> {
        self.check()?;

        let mut sql = format!(
            "INSERT INTO {} ( {} ) VALUES ( {} )",
            quote(&self.table),
            quote_list(&self.columns),
            questions(self.columns.len())
        );
        let mut values = self.values;

        match self.on_duplicate {
            None => {}
            Some(OnDuplicate::UpdateAll) => {
                sql.push_str(" ON DUPLICATE KEY UPDATE ");
                sql.push_str(&update_all(&self.columns));
            }
            Some(OnDuplicate::Update {
                clause,
                values: extra,
            }) => {
                sql.push_str(" ON DUPLICATE KEY UPDATE ");
                // Blank clause falls back to the per-column form.
                match clause.trim() {
                    "" => sql.push_str(&update_all(&self.columns)),
                    clause => sql.push_str(clause),
                }
                values.extend(extra);
            }
            Some(OnDuplicate::Ignore { column }) => {
                let column = quote(&column);
                sql.push_str(&format!(" ON DUPLICATE KEY UPDATE {column} = {column}"));
            }
        }

        Ok(BuiltQuery { sql, values })
    }

    /// Build with `` `c` = VALUES(`c`) `` for every column.
    pub fn build_on_duplicate_update(self) -> SqlResult<BuiltQuery> {
        self.on_duplicate(OnDuplicate::UpdateAll).build()
    }

    /// Build with an explicit update clause.
    ///
    /// A blank clause renders the same as [`Insert::build_on_duplicate_update`].
    /// `extra_values` bind the clause's own placeholders and come after the
    /// inserted values; the VALUES list only counts the columns.
    pub fn build_on_duplicate_update_with(
        self,
        clause: impl Into<String>,
        extra_values: impl IntoValues,
    ) -> SqlResult<BuiltQuery> {
        self.on_duplicate(OnDuplicate::Update {
            clause: clause.into(),
            values: extra_values.into_values(),
        })
        .build()
    }

    /// Build with `` `column` = `column` `` so duplicates are ignored.
    pub fn build_on_duplicate_ignore(self, column: &str) -> SqlResult<BuiltQuery> {
        self.on_duplicate(OnDuplicate::Ignore {
            column: normalize(column).to_string(),
        })
        .build()
    }
}

fn update_all(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!("{0} = VALUES({0})", quote(c)))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Statement for Insert {
    fn build(self) -> SqlResult<BuiltQuery> {
        Insert::build(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }
}

impl Mutation for Insert {}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> Insert {
        Insert::new("user")
            .add("user_id", 1)
            .add_all([("email", SqlValue::from("a@b.com")), ("level", SqlValue::from(2))])
    }

    #[test]
    fn test_basic_insert() {
        let q = user().build().unwrap();
        assert_eq!(
            q.sql,
            "INSERT INTO `user` ( `user_id`, `email`, `level` ) VALUES ( ?, ?, ? )"
        );
        assert_eq!(
            q.values,
            vec![SqlValue::Int(1), SqlValue::from("a@b.com"), SqlValue::Int(2)]
        );
    }

    #[test]
    fn test_ticks_are_normalized() {
        let q = Insert::new("`user`").add("`email`", "x").build().unwrap();
        assert_eq!(q.sql, "INSERT INTO `user` ( `email` ) VALUES ( ? )");
    }

    #[test]
    fn test_missing_table_and_columns() {
        assert!(matches!(
            Insert::new("").add("a", 1).build().unwrap_err(),
            SqlError::MissingTable
        ));
        assert!(matches!(
            Insert::new("t").build().unwrap_err(),
            SqlError::MissingColumns
        ));
    }

    #[test]
    fn test_column_value_mismatch() {
        let err = Insert::new("t")
            .add_list(&["a", "b"], vec![1, 2, 3])
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            SqlError::ColumnValueMismatch {
                columns: 2,
                values: 3
            }
        ));
    }

    #[test]
    fn test_on_duplicate_update_auto() {
        let q = Insert::new("user")
            .add("id", 1)
            .add("email", "a@b.com")
            .build_on_duplicate_update()
            .unwrap();
        assert_eq!(
            q.sql,
            "INSERT INTO `user` ( `id`, `email` ) VALUES ( ?, ? ) \
             ON DUPLICATE KEY UPDATE `id` = VALUES(`id`), `email` = VALUES(`email`)"
        );
        assert_eq!(q.values.len(), 2);
    }

    #[test]
    fn test_on_duplicate_update_with_extra_values() {
        let q = Insert::new("counter")
            .add("id", 7)
            .add("hits", 1)
            .build_on_duplicate_update_with("`hits` = `hits` + ?", 5)
            .unwrap();
        assert_eq!(
            q.sql,
            "INSERT INTO `counter` ( `id`, `hits` ) VALUES ( ?, ? ) \
             ON DUPLICATE KEY UPDATE `hits` = `hits` + ?"
        );
        assert_eq!(
            q.values,
            vec![SqlValue::Int(7), SqlValue::Int(1), SqlValue::Int(5)]
        );
        assert_eq!(q.placeholder_count(), q.values.len());
    }

    #[test]
    fn test_on_duplicate_ignore() {
        let q = Insert::new("user")
            .add("id", 1)
            .build_on_duplicate_ignore("`id`")
            .unwrap();
        assert_eq!(
            q.sql,
            "INSERT INTO `user` ( `id` ) VALUES ( ? ) ON DUPLICATE KEY UPDATE `id` = `id`"
        );
        assert_eq!(q.values, vec![SqlValue::Int(1)]);
    }

    #[test]
    fn test_on_duplicate_still_checks() {
        let err = Insert::new("t").build_on_duplicate_update().unwrap_err();
        assert!(matches!(err, SqlError::MissingColumns));
    }

    #[test]
    fn test_blank_update_clause_uses_every_column() {
        let expected = "INSERT INTO `t` ( `a`, `b` ) VALUES ( ?, ? ) \
                        ON DUPLICATE KEY UPDATE `a` = VALUES(`a`), `b` = VALUES(`b`)";

        for clause in ["", "   "] {
            let q = Insert::new("t")
                .add("a", 1)
                .add("b", 2)
                .build_on_duplicate_update_with(clause, ())
                .unwrap();
            assert_eq!(q.sql, expected);
            assert_eq!(q.values, vec![SqlValue::Int(1), SqlValue::Int(2)]);
        }
    }
}
