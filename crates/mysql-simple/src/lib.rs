//! # mysql-simple
//!
//! Parameterized MySQL statement builders.
//!
//! ## Features
//!
//! - **Positional placeholders**: every statement is `(sql, values)` with `?`
//!   placeholders and values in the exact order the placeholders appear
//! - **Predicate trees**: AND/OR groups nest to any depth via [`Where`]
//! - **Quoted identifiers**: tables and columns are wrapped in backticks
//! - **Safe defaults**: UPDATE is `LIMIT 1` unless changed, DELETE requires
//!   WHERE or LIMIT
//! - **Bring your own driver**: statements run through the [`Executor`] trait
//! - **Statement logging**: [`monitor::InstrumentedExecutor`] emits `tracing`
//!   events and enforces timeouts
//!
//! ## Query Builder (qb)
//!
//! ```
//! use mysql_simple::{SqlValue, Where, qb};
//!
//! let q = qb::select("user")
//!     .where_clause(
//!         Where::and()
//!             .eq("user_id", 1)
//!             .nest(Where::or().eq("email", "a@b.com").eq("level", 2)),
//!     )
//!     .build()?;
//!
//! assert_eq!(
//!     q.sql,
//!     "SELECT * FROM `user` WHERE `user_id` = ? AND (`email` = ? OR `level` = ?)"
//! );
//! assert_eq!(q.values, vec![SqlValue::Int(1), SqlValue::from("a@b.com"), SqlValue::Int(2)]);
//! # Ok::<(), mysql_simple::SqlError>(())
//! ```
//!
//! Running a statement needs an [`Executor`]:
//!
//! ```ignore
//! use mysql_simple::{Mutation, Statement, Where, qb};
//!
//! let rows = qb::select("user").limit(10).fetch_all(&exec).await?;
//! let n = qb::delete("session")
//!     .where_raw("`expires` < ?", now)
//!     .execute(&exec)
//!     .await?;
//! ```

pub mod buffered;
pub mod error;
pub mod executor;
pub mod ident;
pub mod model;
pub mod monitor;
pub mod qb;
pub mod value;

#[cfg(test)]
mod testing;

pub use buffered::BufferedQuery;
pub use error::{DriverError, SqlError, SqlResult};
pub use executor::Executor;
pub use model::Model;
pub use monitor::{InstrumentedExecutor, MonitorConfig};
pub use qb::{
    BuiltQuery, Column, Condition, Delete, Direction, Fragment, Insert, Joiner, Mutation,
    OnDuplicate, Op, Predicate, Select, Statement, StatementKind, Update, Where,
};
pub use value::{IntoValues, SqlValue, pairs_from_json};
