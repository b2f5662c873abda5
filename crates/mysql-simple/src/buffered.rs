//! Page-by-page execution of a SELECT.
//!
//! [`BufferedQuery`] appends ` LIMIT ?, ?` to a base query and binds
//! `(offset, buffer_size)` after the base values, advancing the offset by one
//! buffer per page. Paging stops after the first page shorter than the
//! buffer.
//!
//! # Example
//! ```ignore
//! let base = qb::select("event").where_clause(Where::and().eq("kind", "click"));
//! BufferedQuery::from_select(base, 500)?
//!     .for_each_page(&exec, |rows| async move {
//!         process(rows).await
//!     })
//!     .await?;
//! ```

use crate::error::{SqlError, SqlResult};
use crate::executor::Executor;
use crate::qb::{BuiltQuery, Select};
use crate::value::SqlValue;
use std::future::Future;

/// Runs a base query in fixed-size pages.
#[derive(Debug, Clone)]
pub struct BufferedQuery {
    /// Base SQL with ` LIMIT ?, ?` appended
    sql: String,
    /// Base values (without offset/limit)
    values: Vec<SqlValue>,
    buffer_size: u64,
    offset: u64,
    first_only: bool,
    done: bool,
}

impl BufferedQuery {
    /// Page over a built query. The query must not carry its own LIMIT.
    ///
    /// Fails with [`SqlError::InvalidArgument`] when `buffer_size` is zero.
    pub fn new(base: BuiltQuery, buffer_size: u64) -> SqlResult<Self> {
        if buffer_size == 0 {
            return Err(SqlError::invalid_argument("buffer size must be greater than 0"));
        }
        Ok(Self {
            sql: format!("{} LIMIT ?, ?", base.sql.trim_end()),
            values: base.values,
            buffer_size,
            offset: 0,
            first_only: false,
            done: false,
        })
    }

    /// Build `select` and page over it.
    ///
    /// Fails with [`SqlError::InvalidArgument`] when `select` already has a
    /// LIMIT.
    pub fn from_select(select: Select, buffer_size: u64) -> SqlResult<Self> {
        if select.has_limit() {
            return Err(SqlError::invalid_argument(
                "buffered select must not set its own limit",
            ));
        }
        Self::new(select.build()?, buffer_size)
    }

    /// Start from `offset` instead of the first row.
    pub fn starting_at(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Stop after the first page.
    pub fn first_only(mut self) -> Self {
        self.first_only = true;
        self
    }

    /// Rows per page.
    pub fn buffer_size(&self) -> u64 {
        self.buffer_size
    }

    /// Offset of the next page.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Check if no further pages will be fetched.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The statement for the next page.
    pub fn page_query(&self) -> BuiltQuery {
        let mut values = Vec::with_capacity(self.values.len() + 2);
        values.extend(self.values.iter().cloned());
        values.push(SqlValue::UInt(self.offset));
        values.push(SqlValue::UInt(self.buffer_size));
        BuiltQuery::new(self.sql.clone(), values)
    }

    /// Fetch the next page.
    ///
    /// Returns `None` once paging is finished; an empty page also ends it.
    pub async fn next_page<E: Executor>(&mut self, exec: &E) -> SqlResult<Option<Vec<E::Row>>> {
        if self.done {
            return Ok(None);
        }

        let query = self.page_query();
        let rows = exec.query(&query.sql, &query.values).await?;
        let count = rows.len() as u64;

        tracing::trace!(
            target: "mysql_simple.sql",
            offset = self.offset,
            buffer_size = self.buffer_size,
            rows = count,
            "buffered page"
        );

        self.offset = self.offset.saturating_add(self.buffer_size);
        if count < self.buffer_size || self.first_only {
            self.done = true;
        }

        if count == 0 {
            return Ok(None);
        }
        Ok(Some(rows))
    }

    /// Fetch every page and hand it to `handler`, returning the page count.
    ///
    /// A handler error stops paging and is returned as-is.
    pub async fn for_each_page<E, F, Fut>(mut self, exec: &E, mut handler: F) -> SqlResult<u64>
    where
        E: Executor,
        F: FnMut(Vec<E::Row>) -> Fut,
        Fut: Future<Output = SqlResult<()>>,
    {
        let mut pages = 0;
        while let Some(rows) = self.next_page(exec).await? {
            handler(rows).await?;
            pages += 1;
        }
        Ok(pages)
    }
}
