//! Statement logging and timeouts for any [`Executor`](crate::Executor).
//!
//! [`InstrumentedExecutor`] wraps an executor, applies the configured
//! timeout, and emits one `tracing` event per statement.
//!
//! # Example
//!
//! ```ignore
//! use mysql_simple::monitor::{InstrumentedExecutor, MonitorConfig};
//! use std::time::Duration;
//!
//! let config = MonitorConfig::new()
//!     .with_query_timeout(Duration::from_secs(30))
//!     .with_slow_query_threshold(Duration::from_secs(1))
//!     .enable_monitoring();
//!
//! let exec = InstrumentedExecutor::new(pool).with_config(config);
//! ```

mod config;
mod instrumented;


pub use config::{DEFAULT_MAX_SQL_LENGTH, MonitorConfig};
pub use instrumented::{InstrumentedExecutor, QueryOutcome, QueryStats};

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
