//! SELECT statement builder.

use crate::error::{SqlError, SqlResult};
use crate::ident::{normalize, quote, quote_list};
use crate::qb::expr::{Predicate, build_predicate};
use crate::qb::traits::{BuiltQuery, Statement, StatementKind};
use crate::value::{IntoValues, SqlValue};
use std::fmt;

/// One entry of the SELECT list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Column {
    /// Plain column name, rendered quoted.
    Name(String),
    /// `` expr AS `alias` ``; the expression is not quoted.
    Aliased { expr: String, alias: String },
    /// Passed through unchanged (`*`, `COUNT(*)`, ...).
    Raw(String),
}

impl Column {
    /// Raw expression, rendered as-is.
    pub fn raw(expr: impl Into<String>) -> Self {
        Column::Raw(expr.into())
    }

    /// Expression with an alias.
    pub fn aliased(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Column::Aliased {
            expr: expr.into(),
            alias: alias.into(),
        }
    }

    fn render(&self) -> String {
        match self {
            Column::Name(name) if normalize(name) == "*" => "*".to_string(),
            Column::Name(name) => quote(name),
            Column::Aliased { expr, alias } => format!("{expr} AS {}", quote(alias)),
            Column::Raw(expr) => expr.clone(),
        }
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::Name(name.to_string())
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column::Name(name)
    }
}

impl<E: Into<String>, A: Into<String>> From<(E, A)> for Column {
    fn from((expr, alias): (E, A)) -> Self {
        Column::aliased(expr, alias)
    }
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SELECT statement builder.
///
/// # Example
/// ```
/// use mysql_simple::{Direction, SqlValue, Where, qb};
///
/// let built = qb::select("user")
///     .columns(["user_id", "email"])
///     .where_clause(Where::and().eq("level", 2))
///     .order_by("created", Direction::Desc)
///     .limit_offset(5, 10)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     built.sql,
///     "SELECT `user_id`, `email` FROM `user` WHERE `level` = ? ORDER BY `created` DESC LIMIT ?, ?"
/// );
/// assert_eq!(built.values, vec![SqlValue::Int(2), SqlValue::UInt(10), SqlValue::UInt(5)]);
/// ```
#[derive(Clone, Debug)]
pub struct Select {
    /// Table name (unquoted)
    table: String,
    /// Raw options after SELECT, e.g. `DISTINCT`
    options: Option<String>,
    /// SELECT list; `None` means `*`
    columns: Option<Vec<Column>>,
    /// WHERE predicate
    where_pred: Option<Predicate>,
    /// GROUP BY columns
    group_by: Vec<String>,
    /// HAVING predicate
    having_pred: Option<Predicate>,
    /// Rendered ORDER BY entries
    order_clauses: Vec<String>,
    /// LIMIT (0 means none)
    limit: u64,
    /// OFFSET (only rendered together with a limit)
    offset: u64,
}

impl Select {
    /// Create a new SELECT builder for a table.
    pub fn new(table: &str) -> Self {
        Self {
            table: normalize(table).to_string(),
            options: None,
            columns: None,
            where_pred: None,
            group_by: Vec::new(),
            having_pred: None,
            order_clauses: Vec::new(),
            limit: 0,
            offset: 0,
        }
    }

    /// Set raw options rendered right after `SELECT` (e.g. `DISTINCT`).
    pub fn options(mut self, opts: &str) -> Self {
        let opts = opts.trim();
        self.options = (!opts.is_empty()).then(|| opts.to_string());
        self
    }

    // ==================== SELECT columns ====================

    /// Set the SELECT list. An empty list fails `build()` with `MissingColumns`.
    pub fn columns<C: Into<Column>>(mut self, cols: impl IntoIterator<Item = C>) -> Self {
        self.columns = Some(cols.into_iter().map(Into::into).collect());
        self
    }

    /// Append one entry to the SELECT list.
    pub fn column(mut self, col: impl Into<Column>) -> Self {
        self.columns.get_or_insert_with(Vec::new).push(col.into());
        self
    }

    // ==================== WHERE / HAVING ====================

    /// Set the WHERE predicate (a `Where` tree or a raw string).
    ///
    /// Replaces any previous predicate and its values.
    pub fn where_clause(mut self, predicate: impl Into<Predicate>) -> Self {
        self.where_pred = Some(predicate.into());
        self
    }

    /// Set a raw WHERE clause with its values.
    pub fn where_raw(self, sql: impl Into<String>, values: impl IntoValues) -> Self {
        self.where_clause(Predicate::raw(sql, values))
    }

    /// Set the GROUP BY columns.
    pub fn group_by<S: AsRef<str>>(mut self, cols: impl IntoIterator<Item = S>) -> Self {
        self.group_by = cols.into_iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    /// Set the HAVING predicate (a `Where` tree or a raw string).
    pub fn having(mut self, predicate: impl Into<Predicate>) -> Self {
        self.having_pred = Some(predicate.into());
        self
    }

    /// Set a raw HAVING clause with its values.
    pub fn having_raw(self, sql: impl Into<String>, values: impl IntoValues) -> Self {
        self.having(Predicate::raw(sql, values))
    }

    // ==================== ORDER BY ====================

    /// Add `` `column` ASC|DESC ``.
    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order_clauses
            .push(format!("{} {}", quote(column), direction));
        self
    }

    /// Add one ORDER BY entry per pair, in iteration order.
    pub fn order_by_all<S: AsRef<str>>(
        self,
        pairs: impl IntoIterator<Item = (S, Direction)>,
    ) -> Self {
        pairs
            .into_iter()
            .fold(self, |qb, (col, dir)| qb.order_by(col.as_ref(), dir))
    }

    /// Add a raw ORDER BY expression (e.g. `FIELD(`id`, 3, 1, 2)`).
    pub fn order_by_raw(mut self, expr: &str) -> Self {
        self.order_clauses.push(expr.trim().to_string());
        self
    }

    // ==================== LIMIT ====================

    /// Set LIMIT. Zero removes the clause.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = n;
        self.offset = 0;
        self
    }

    /// Set LIMIT and OFFSET, rendered as `LIMIT ?, ?` bound `(offset, limit)`.
    pub fn limit_offset(mut self, limit: u64, offset: u64) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }

    /// Set pagination (1-based pages; page 0 is treated as page 1).
    pub fn paginate(self, page: u64, per_page: u64) -> Self {
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        self.limit_offset(per_page, offset)
    }

    /// Check if a LIMIT clause will be rendered.
    pub fn has_limit(&self) -> bool {
        self.limit > 0
    }

    // ==================== Build ====================

    /// Render the statement and its ordered values.
    pub fn build(self) -> SqlResult<BuiltQuery> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingTable);
        }
        let cols = match &self.columns {
            None => "*".to_string(),
            Some(cols) if cols.is_empty() => return Err(SqlError::MissingColumns),
            Some(cols) => cols.iter().map(Column::render).collect::<Vec<_>>().join(", "),
        };

        let mut sql = String::from("SELECT");
        if let Some(opts) = &self.options {
            sql.push(' ');
            sql.push_str(opts);
        }
        sql.push(' ');
        sql.push_str(&cols);
        sql.push_str(" FROM ");
        sql.push_str(&quote(&self.table));

        let mut values: Vec<SqlValue> = Vec::new();

        if let Some(clause) = build_predicate(self.where_pred.as_ref())? {
            sql.push_str(" WHERE ");
            sql.push_str(&clause.sql);
            values.extend(clause.values);
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&quote_list(&self.group_by));
        }

        if let Some(clause) = build_predicate(self.having_pred.as_ref())? {
            sql.push_str(" HAVING ");
            sql.push_str(&clause.sql);
            values.extend(clause.values);
        }

        if !self.order_clauses.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_clauses.join(", "));
        }

        if self.limit > 0 {
            if self.offset > 0 {
                sql.push_str(" LIMIT ?, ?");
                values.push(SqlValue::UInt(self.offset));
            } else {
                sql.push_str(" LIMIT ?");
            }
            values.push(SqlValue::UInt(self.limit));
        }

        Ok(BuiltQuery { sql, values })
    }
}

impl Statement for Select {
    fn build(self) -> SqlResult<BuiltQuery> {
        Select::build(self)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }
}
