//! Execution adapter trait.
//!
//! The builders only produce `(sql, values)`; anything that can run a
//! statement with positional `?` placeholders implements [`Executor`].
//! `values[i]` binds to the i-th `?` in `sql`, left to right.

use crate::error::SqlResult;
use crate::value::SqlValue;
use std::future::Future;

/// Something that can run a parameterized statement.
///
/// Implementations wrap driver failures with [`crate::SqlError::execute`].
pub trait Executor: Send + Sync {
    /// Row type returned by queries.
    type Row: Send;

    /// Run a statement and return all rows.
    fn query(
        &self,
        sql: &str,
        values: &[SqlValue],
    ) -> impl Future<Output = SqlResult<Vec<Self::Row>>> + Send;

    /// Run a statement and return the affected row count.
    fn execute(&self, sql: &str, values: &[SqlValue]) -> impl Future<Output = SqlResult<u64>> + Send;

    /// Run a statement and return the first row, if any.
    fn query_opt(
        &self,
        sql: &str,
        values: &[SqlValue],
    ) -> impl Future<Output = SqlResult<Option<Self::Row>>> + Send {
        async move {
            let rows = self.query(sql, values).await?;
            Ok(rows.into_iter().next())
        }
    }
}

// Lets wrappers such as `InstrumentedExecutor` borrow an executor.
impl<E: Executor> Executor for &E {
    type Row = E::Row;

    async fn query(&self, sql: &str, values: &[SqlValue]) -> SqlResult<Vec<Self::Row>> {
        (*self).query(sql, values).await
    }

    async fn execute(&self, sql: &str, values: &[SqlValue]) -> SqlResult<u64> {
        (*self).execute(sql, values).await
    }
}
