//! Statement builders for mysql-simple.
//!
//! Each builder renders one statement with backtick-quoted identifiers and
//! positional `?` placeholders, plus the values in placeholder order.
//!
//! # Usage
//!
//! ```
//! use mysql_simple::{Direction, Where, qb};
//!
//! // SELECT
//! let q = qb::select("user")
//!     .where_clause(Where::and().eq("level", 2).is_not_null("email"))
//!     .order_by("user_id", Direction::Asc)
//!     .limit(20)
//!     .build()?;
//! assert_eq!(q.placeholder_count(), q.values.len());
//!
//! // INSERT
//! let q = qb::insert("user").add("email", "a@b.com").add("level", 1).build()?;
//! assert_eq!(q.values.len(), 2);
//!
//! // UPDATE (LIMIT 1 unless changed)
//! let q = qb::update("user")
//!     .set("level", 3)
//!     .where_clause(Where::and().eq("user_id", 9))
//!     .build()?;
//! assert!(q.sql.ends_with("LIMIT ?"));
//!
//! // DELETE (requires WHERE or LIMIT)
//! assert!(qb::delete("user").build().is_err());
//! # Ok::<(), mysql_simple::SqlError>(())
//! ```

mod delete;
mod expr;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::Delete;
pub use expr::{Condition, Fragment, Joiner, Op, Predicate, Where};
pub use insert::{Insert, OnDuplicate};
pub use select::{Column, Direction, Select};
pub use traits::{BuiltQuery, Mutation, Statement, StatementKind};
pub use update::{DEFAULT_UPDATE_LIMIT, Update};

/// Create a SELECT builder for the given table.
pub fn select(table: &str) -> Select {
    Select::new(table)
}

/// Create an INSERT builder for the given table.
pub fn insert(table: &str) -> Insert {
    Insert::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> Update {
    Update::new(table)
}

/// Create a DELETE builder for the given table.
pub fn delete(table: &str) -> Delete {
    Delete::new(table)
}
