use super::config::MonitorConfig;
use super::truncate_sql_bytes;
use crate::error::{SqlError, SqlResult};
use crate::executor::Executor;
use crate::qb::StatementKind;
use crate::value::SqlValue;
use std::fmt;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Maximum length for error messages in `QueryOutcome::Error`.
const MAX_ERROR_LEN: usize = 512;

/// Result of one statement, as reported in log events.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Query returned rows.
    Rows(usize),
    /// Statement affected rows.
    Affected(u64),
    /// Statement failed (message truncated to 512 bytes).
    Error(String),
}

impl QueryOutcome {
    /// Create an error outcome, truncating long messages.
    pub fn error(err: &SqlError) -> Self {
        let msg = err.to_string();
        if msg.len() > MAX_ERROR_LEN {
            Self::Error(format!("{}...", truncate_sql_bytes(&msg, MAX_ERROR_LEN)))
        } else {
            Self::Error(msg)
        }
    }

    /// Check if this outcome is a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Rows(n) => write!(f, "{n} rows"),
            QueryOutcome::Affected(n) => write!(f, "{n} affected"),
            QueryOutcome::Error(e) => write!(f, "error: {e}"),
        }
    }
}

/// Counters collected while monitoring is enabled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Statements run.
    pub total: u64,
    /// Statements that failed or timed out.
    pub failed: u64,
    /// Statements above the slow query threshold.
    pub slow: u64,
    /// Longest statement seen.
    pub max_duration: Duration,
}

/// An executor wrapper that logs every statement through `tracing`.
///
/// Events are emitted on target `mysql_simple.sql`: DEBUG for normal
/// statements, WARN above the slow query threshold, ERROR on failure.
/// Monitoring must be explicitly enabled via
/// [`MonitorConfig::enable_monitoring`]; the timeout applies either way.
///
/// # Example
/// ```ignore
/// let exec = InstrumentedExecutor::new(pool).with_config(
///     MonitorConfig::new()
///         .with_slow_query_threshold(Duration::from_millis(200))
///         .enable_monitoring(),
/// );
/// let rows = qb::select("user").fetch_all(&exec).await?;
/// ```
#[derive(Debug)]
pub struct InstrumentedExecutor<E> {
    inner: E,
    config: MonitorConfig,
    stats: Mutex<QueryStats>,
}

impl<E: Executor> InstrumentedExecutor<E> {
    /// Wrap an executor with monitoring disabled.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            config: MonitorConfig::default(),
            stats: Mutex::new(QueryStats::default()),
        }
    }

    /// Set the monitor configuration.
    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Check if monitoring is enabled.
    pub fn is_monitoring_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Get a reference to the inner executor.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Get the inner executor, consuming this wrapper.
    pub fn into_inner(self) -> E {
        self.inner
    }

    /// Snapshot of the collected counters.
    pub fn stats(&self) -> QueryStats {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset the collected counters.
    pub fn reset_stats(&self) {
        *self.stats.lock().unwrap_or_else(PoisonError::into_inner) = QueryStats::default();
    }

    async fn with_timeout<T, F>(&self, future: F) -> SqlResult<T>
    where
        F: Future<Output = SqlResult<T>>,
    {
        match self.config.query_timeout {
            Some(timeout) => tokio::time::timeout(timeout, future)
                .await
                .unwrap_or(Err(SqlError::Timeout(timeout))),
            None => future.await,
        }
    }

    fn display_sql<'a>(&self, sql: &'a str) -> std::borrow::Cow<'a, str> {
        match self.config.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)).into(),
            _ => sql.into(),
        }
    }

    fn report(&self, sql: &str, values: &[SqlValue], duration: Duration, outcome: &QueryOutcome) {
        if !self.config.enabled {
            return;
        }

        let slow = self
            .config
            .slow_query_threshold
            .is_some_and(|threshold| duration > threshold);
        let failed = outcome.is_error();

        {
            let mut stats = self.stats.lock().unwrap_or_else(PoisonError::into_inner);
            stats.total += 1;
            if failed {
                stats.failed += 1;
            }
            if slow {
                stats.slow += 1;
            }
            stats.max_duration = stats.max_duration.max(duration);
        }

        let kind = StatementKind::from_sql(sql);
        let sql = self.display_sql(sql);
        let value_count = values.len();
        let logged_values = if self.config.log_values {
            format!("{values:?}")
        } else {
            "-".to_string()
        };
        let elapsed_ms = duration.as_secs_f64() * 1000.0;

        if failed {
            tracing::error!(
                target: "mysql_simple.sql",
                kind = %kind,
                value_count,
                sql = %sql,
                values = %logged_values,
                elapsed_ms,
                outcome = %outcome,
                "statement failed"
            );
        } else if slow {
            tracing::warn!(
                target: "mysql_simple.sql",
                kind = %kind,
                value_count,
                sql = %sql,
                values = %logged_values,
                elapsed_ms,
                outcome = %outcome,
                "slow statement"
            );
        } else {
            tracing::debug!(
                target: "mysql_simple.sql",
                kind = %kind,
                value_count,
                sql = %sql,
                values = %logged_values,
                elapsed_ms,
                outcome = %outcome,
                "statement"
            );
        }
    }
}

impl<E: Executor> Executor for InstrumentedExecutor<E> {
    type Row = E::Row;

    async fn query(&self, sql: &str, values: &[SqlValue]) -> SqlResult<Vec<Self::Row>> {
        let start = Instant::now();
        let result = self.with_timeout(self.inner.query(sql, values)).await;
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(rows) => QueryOutcome::Rows(rows.len()),
            Err(e) => QueryOutcome::error(e),
        };

        self.report(sql, values, duration, &outcome);
        result
    }

    async fn execute(&self, sql: &str, values: &[SqlValue]) -> SqlResult<u64> {
        let start = Instant::now();
        let result = self.with_timeout(self.inner.execute(sql, values)).await;
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(n) => QueryOutcome::Affected(*n),
            Err(e) => QueryOutcome::error(e),
        };

        self.report(sql, values, duration, &outcome);
        result
    }
}
