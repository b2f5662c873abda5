//! Table-backed models.
//!
//! A [`Model`] is any `Serialize` struct bound to a table. Its serialized
//! fields become the column map for INSERT and UPDATE; only string and
//! number fields are written, so `None`, booleans and nested values are
//! skipped.
//!
//! # Example
//! ```
//! use mysql_simple::{Model, SqlValue, Where};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     user_id: i64,
//!     email: String,
//!     nickname: Option<String>,
//! }
//!
//! impl Model for User {
//!     const TABLE: &'static str = "user";
//! }
//!
//! let user = User { user_id: 1, email: "a@b.com".into(), nickname: None };
//! let q = user.insert_query().unwrap();
//! assert_eq!(q.sql, "INSERT INTO `user` ( `user_id`, `email` ) VALUES ( ?, ? )");
//!
//! let q = User::select_row_query(User::where_clause([("user_id", 1)]).unwrap()).unwrap();
//! assert_eq!(q.sql, "SELECT * FROM `user` WHERE `user_id` = ? LIMIT ?");
//! assert_eq!(q.values, vec![SqlValue::Int(1), SqlValue::UInt(1)]);
//! ```

use crate::error::{SqlError, SqlResult};
use crate::executor::Executor;
use crate::qb::{BuiltQuery, Delete, Insert, Select, Update, Where};
use crate::value::SqlValue;
use serde::Serialize;
use std::future::Future;

/// A serializable row bound to a table.
pub trait Model: Serialize {
    /// Table this model is stored in.
    const TABLE: &'static str;

    /// Column/value pairs written by INSERT and UPDATE, in field order.
    ///
    /// Only string and number fields are kept. Fails with
    /// [`SqlError::InvalidArgument`] if the model does not serialize to a map.
    fn values(&self) -> SqlResult<Vec<(String, SqlValue)>> {
        let json = serde_json::to_value(self)
            .map_err(|e| SqlError::invalid_argument(format!("serialize {}: {e}", Self::TABLE)))?;
        let serde_json::Value::Object(map) = json else {
            return Err(SqlError::invalid_argument(format!(
                "model for `{}` must serialize to a map",
                Self::TABLE
            )));
        };

        Ok(map
            .into_iter()
            .filter_map(|(column, value)| {
                SqlValue::try_from(value)
                    .ok()
                    .filter(SqlValue::is_text_or_number)
                    .map(|value| (column, value))
            })
            .collect())
    }

    /// AND tree of `` `column` = ? `` conditions.
    ///
    /// Empty input fails with [`SqlError::InvalidArgument`].
    fn where_clause<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> SqlResult<Where>
    where
        Self: Sized,
        K: AsRef<str>,
        V: Into<SqlValue>,
    {
        let tree = Where::and_from(pairs);
        if tree.is_empty() && tree.error().is_none() {
            return Err(SqlError::invalid_argument(
                "at least one column is required for a where clause",
            ));
        }
        Ok(tree)
    }

    /// `INSERT` of every kept field.
    fn insert_query(&self) -> SqlResult<BuiltQuery> {
        Insert::new(Self::TABLE).add_all(self.values()?).build()
    }

    /// `UPDATE ... SET <fields> WHERE <filter> [LIMIT ?]` (`limit` 0 means none).
    ///
    /// An empty filter fails with [`SqlError::MissingConstraint`]; a model
    /// update never relies on the LIMIT alone.
    fn update_query(&self, filter: Where, limit: u64) -> SqlResult<BuiltQuery> {
        if filter.is_empty() && filter.error().is_none() {
            return Err(SqlError::MissingConstraint("update"));
        }
        Update::new(Self::TABLE)
            .values(self.values()?)
            .where_clause(filter)
            .limit(limit)
            .build()
    }

    /// `SELECT * ... WHERE <filter> LIMIT ?` bound to 1.
    fn select_row_query(filter: Where) -> SqlResult<BuiltQuery>
    where
        Self: Sized,
    {
        if filter.is_empty() && filter.error().is_none() {
            return Err(SqlError::invalid_argument(
                "at least one column is required for a where clause",
            ));
        }
        Select::new(Self::TABLE).where_clause(filter).limit(1).build()
    }

    /// `DELETE ... WHERE <filter>`; an empty filter is rejected.
    fn delete_query(filter: Where) -> SqlResult<BuiltQuery>
    where
        Self: Sized,
    {
        Delete::new(Self::TABLE).where_clause(filter).build()
    }

    /// Insert this model and return the affected row count.
    fn insert<E: Executor>(&self, exec: &E) -> impl Future<Output = SqlResult<u64>> + Send {
        let query = self.insert_query();
        async move { query?.execute(exec).await }
    }

    /// Update rows matching `filter` with this model's fields.
    fn update<E: Executor>(
        &self,
        exec: &E,
        filter: Where,
        limit: u64,
    ) -> impl Future<Output = SqlResult<u64>> + Send {
        let query = self.update_query(filter, limit);
        async move { query?.execute(exec).await }
    }

    /// Select the first row matching `filter`, if any.
    fn select_row<E: Executor>(
        exec: &E,
        filter: Where,
    ) -> impl Future<Output = SqlResult<Option<E::Row>>> + Send
    where
        Self: Sized,
    {
        let query = Self::select_row_query(filter);
        async move {
            let query = query?;
            exec.query_opt(&query.sql, &query.values).await
        }
    }

    /// Delete rows matching `filter`.
    fn delete<E: Executor>(exec: &E, filter: Where) -> impl Future<Output = SqlResult<u64>> + Send
    where
        Self: Sized,
    {
        let query = Self::delete_query(filter);
        async move { query?.execute(exec).await }
    }
}
