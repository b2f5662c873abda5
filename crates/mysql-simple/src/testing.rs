//! In-memory executor used by unit tests.

use crate::error::{SqlError, SqlResult};
use crate::executor::Executor;
use crate::value::SqlValue;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) type Row = Vec<SqlValue>;

/// Records every statement it runs and replays queued results.
#[derive(Debug, Default)]
pub(crate) struct RecordingExecutor {
    calls: Mutex<Vec<(String, Vec<SqlValue>)>>,
    results: Mutex<VecDeque<Vec<Row>>>,
    affected: u64,
    fail: bool,
}

impl RecordingExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Rows returned by the next `query` calls, one entry per call.
    pub(crate) fn with_results(self, results: impl IntoIterator<Item = Vec<Row>>) -> Self {
        self.results.lock().unwrap().extend(results);
        self
    }

    pub(crate) fn with_affected(mut self, affected: u64) -> Self {
        self.affected = affected;
        self
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<(String, Vec<SqlValue>)> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, sql: &str, values: &[SqlValue]) -> SqlResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((sql.to_string(), values.to_vec()));
        if self.fail {
            return Err(SqlError::execute("connection lost"));
        }
        Ok(())
    }
}

impl Executor for RecordingExecutor {
    type Row = Row;

    async fn query(&self, sql: &str, values: &[SqlValue]) -> SqlResult<Vec<Row>> {
        self.record(sql, values)?;
        Ok(self.results.lock().unwrap().pop_front().unwrap_or_default())
    }

    async fn execute(&self, sql: &str, values: &[SqlValue]) -> SqlResult<u64> {
        self.record(sql, values)?;
        Ok(self.affected)
    }
}

/// Shorthand for a one-column row.
pub(crate) fn row(value: impl Into<SqlValue>) -> Row {
    vec![value.into()]
}
