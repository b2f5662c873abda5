//! Predicate trees for WHERE/HAVING clauses.
//!
//! A [`Where`] is an ordered list of [`Condition`]s joined by one [`Joiner`].
//! Mixing AND and OR is done by nesting a child tree, which is rendered inside
//! parentheses. Every condition carries its own bound values, and
//! linearization walks the tree once, left to right, so the value list always
//! follows placeholder order in the rendered string.
//!
//! # Example
//! ```
//! use mysql_simple::{SqlValue, Where};
//!
//! let clause = Where::and()
//!     .eq("user_id", 1)
//!     .nest(Where::or().eq("email", "a@b.com").eq("level", 2))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(clause.sql, "`user_id` = ? AND (`email` = ? OR `level` = ?)");
//! assert_eq!(
//!     clause.values,
//!     vec![SqlValue::Int(1), SqlValue::from("a@b.com"), SqlValue::Int(2)]
//! );
//! ```

use crate::error::{SqlError, SqlResult};
use crate::ident::{normalize, questions, quote};
use crate::value::{IntoValues, SqlValue};
use std::fmt;

/// Boolean operator joining the conditions of one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joiner {
    /// All conditions must hold.
    #[default]
    And,
    /// At least one condition must hold.
    Or,
}

impl Joiner {
    /// SQL keyword for this joiner.
    pub fn as_str(self) -> &'static str {
        match self {
            Joiner::And => "AND",
            Joiner::Or => "OR",
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Joiner::And => " AND ",
            Joiner::Or => " OR ",
        }
    }
}

impl fmt::Display for Joiner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator for structured conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Op {
    /// `=`
    #[default]
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `IS NULL` (takes no value)
    IsNull,
    /// `IS NOT NULL` (takes no value)
    IsNotNull,
}

impl Op {
    /// SQL spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Like => "LIKE",
            Op::NotLike => "NOT LIKE",
            Op::IsNull => "IS NULL",
            Op::IsNotNull => "IS NOT NULL",
        }
    }

    /// Whether this operator is a null check.
    pub fn is_null_check(self) -> bool {
        matches!(self, Op::IsNull | Op::IsNotNull)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a predicate tree.
#[derive(Clone, Debug)]
pub enum Condition {
    /// `` `column` op ? ``
    Compare {
        column: String,
        op: Op,
        value: SqlValue,
    },

    /// `` `column` IS [NOT] NULL ``
    NullCheck { column: String, negated: bool },

    /// `` `column` [NOT] IN (?, ...) ``
    InList {
        column: String,
        values: Vec<SqlValue>,
        negated: bool,
    },

    /// Pre-formatted fragment; placeholder count is the caller's responsibility.
    Raw { sql: String, values: Vec<SqlValue> },

    /// Child tree, optionally wrapped in parentheses.
    Nested { tree: Where, parenthesize: bool },
}

impl Condition {
    fn is_empty(&self) -> bool {
        match self {
            Condition::Nested { tree, .. } => tree.is_empty(),
            Condition::Raw { sql, values } => sql.trim().is_empty() && values.is_empty(),
            _ => false,
        }
    }

    fn linearize(&self, values: &mut Vec<SqlValue>) -> String {
        match self {
            Condition::Compare { column, op, value } => {
                values.push(value.clone());
                format!("{} {} ?", quote(column), op)
            }
            Condition::NullCheck { column, negated } => {
                if *negated {
                    format!("{} IS NOT NULL", quote(column))
                } else {
                    format!("{} IS NULL", quote(column))
                }
            }
            Condition::InList {
                column,
                values: list,
                negated,
            } => {
                if list.is_empty() {
                    return if *negated { "1=1".to_string() } else { "1=0".to_string() };
                }
                values.extend(list.iter().cloned());
                let op = if *negated { "NOT IN" } else { "IN" };
                format!("{} {} ({})", quote(column), op, questions(list.len()))
            }
            Condition::Raw { sql, values: bound } => {
                values.extend(bound.iter().cloned());
                sql.clone()
            }
            Condition::Nested { tree, parenthesize } => {
                let inner = tree.linearize(values);
                if *parenthesize {
                    format!("({inner})")
                } else {
                    inner
                }
            }
        }
    }
}

/// A linearized clause: SQL text plus its values in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

impl Fragment {
    /// Check if the clause text is empty.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Predicate tree with a uniform joiner.
///
/// Fluent methods never fail on the spot; the first invalid call is recorded
/// and returned by [`Where::build`] (and by any statement the tree is attached
/// to).
#[derive(Clone, Debug, Default)]
pub struct Where {
    joiner: Joiner,
    conditions: Vec<Condition>,
    error: Option<SqlError>,
}

impl Where {
    /// Create an empty tree joined by `joiner`.
    pub fn new(joiner: Joiner) -> Self {
        Self {
            joiner,
            conditions: Vec::new(),
            error: None,
        }
    }

    /// Create an empty AND tree.
    pub fn and() -> Self {
        Self::new(Joiner::And)
    }

    /// Create an empty OR tree.
    pub fn or() -> Self {
        Self::new(Joiner::Or)
    }

    /// AND tree with one `` `column` = ? `` per pair, in iteration order.
    pub fn and_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<SqlValue>,
    {
        Self::and().eq_all(pairs)
    }

    /// OR tree with one `` `column` = ? `` per pair, in iteration order.
    pub fn or_from<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<SqlValue>,
    {
        Self::or().eq_all(pairs)
    }

    /// The joiner fixed at construction.
    pub fn joiner(&self) -> Joiner {
        self.joiner
    }

    /// Number of top-level conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Check if the tree renders to nothing.
    pub fn is_empty(&self) -> bool {
        self.conditions.iter().all(Condition::is_empty)
    }

    /// Top-level conditions in insertion order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// First error recorded by a fluent call, if any.
    pub fn error(&self) -> Option<&SqlError> {
        self.error.as_ref()
    }

    fn record(&mut self, err: SqlError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn checked_column(&mut self, column: &str) -> Option<String> {
        let name = normalize(column);
        if name.trim().is_empty() {
            self.record(SqlError::invalid_condition("column is required"));
            return None;
        }
        Some(name.to_string())
    }

    /// Append a condition node as-is.
    pub fn push(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    // ==================== Structured conditions ====================

    /// Add `` `column` op ? ``.
    ///
    /// Records [`SqlError::InvalidCondition`] when the column is empty, when a
    /// comparison gets a NULL value, or when a null check gets a value.
    pub fn condition(mut self, column: &str, op: Op, value: impl Into<SqlValue>) -> Self {
        let Some(column) = self.checked_column(column) else {
            return self;
        };
        let value = value.into();

        if op.is_null_check() {
            if !value.is_null() {
                self.record(SqlError::invalid_condition(format!(
                    "`{column}` {op} takes no value"
                )));
                return self;
            }
            self.conditions.push(Condition::NullCheck {
                column,
                negated: op == Op::IsNotNull,
            });
            return self;
        }

        if value.is_null() {
            self.record(SqlError::invalid_condition(format!(
                "`{column}` {op} requires a value; use is_null/is_not_null for NULL"
            )));
            return self;
        }

        self.conditions.push(Condition::Compare { column, op, value });
        self
    }

    /// Add `` `column` = ? ``.
    pub fn eq(self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Eq, value)
    }

    /// Add `` `column` = ? `` for every pair, in iteration order.
    pub fn eq_all<K, V>(self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<SqlValue>,
    {
        pairs
            .into_iter()
            .fold(self, |tree, (column, value)| tree.eq(column.as_ref(), value))
    }

    /// Add `` `column` != ? ``.
    pub fn ne(self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Ne, value)
    }

    /// Add `` `column` > ? ``.
    pub fn gt(self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Gt, value)
    }

    /// Add `` `column` >= ? ``.
    pub fn gte(self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Gte, value)
    }

    /// Add `` `column` < ? ``.
    pub fn lt(self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Lt, value)
    }

    /// Add `` `column` <= ? ``.
    pub fn lte(self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Lte, value)
    }

    /// Add `` `column` LIKE ? ``.
    pub fn like(self, column: &str, pattern: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::Like, pattern)
    }

    /// Add `` `column` NOT LIKE ? ``.
    pub fn not_like(self, column: &str, pattern: impl Into<SqlValue>) -> Self {
        self.condition(column, Op::NotLike, pattern)
    }

    /// Add `` `column` IS NULL ``.
    pub fn is_null(self, column: &str) -> Self {
        self.condition(column, Op::IsNull, SqlValue::Null)
    }

    /// Add `` `column` IS NOT NULL ``.
    pub fn is_not_null(self, column: &str) -> Self {
        self.condition(column, Op::IsNotNull, SqlValue::Null)
    }

    /// Add `` `column` IN (?, ...) ``. An empty list renders `1=0`.
    pub fn in_list(mut self, column: &str, values: impl IntoValues) -> Self {
        let Some(column) = self.checked_column(column) else {
            return self;
        };
        self.conditions.push(Condition::InList {
            column,
            values: values.into_values(),
            negated: false,
        });
        self
    }

    /// Add `` `column` NOT IN (?, ...) ``. An empty list renders `1=1`.
    pub fn not_in(mut self, column: &str, values: impl IntoValues) -> Self {
        let Some(column) = self.checked_column(column) else {
            return self;
        };
        self.conditions.push(Condition::InList {
            column,
            values: values.into_values(),
            negated: true,
        });
        self
    }

    // ==================== Raw fragments ====================

    /// Add a pre-formatted fragment and its values.
    ///
    /// `values` may be a scalar (one entry), a sequence (flattened in order)
    /// or `()`. The number of `?` in `sql` is not checked. A blank fragment
    /// is skipped, or records [`SqlError::InvalidCondition`] if it has values.
    pub fn raw(mut self, sql: impl Into<String>, values: impl IntoValues) -> Self {
        let sql = sql.into();
        let values = values.into_values();
        if sql.trim().is_empty() {
            if !values.is_empty() {
                self.record(blank_raw(values.len()));
            }
            return self;
        }
        self.conditions.push(Condition::Raw { sql, values });
        self
    }

    /// Add one raw fragment per `(sql, value)` pair.
    pub fn raw_all<S, V>(self, pairs: impl IntoIterator<Item = (S, V)>) -> Self
    where
        S: Into<String>,
        V: IntoValues,
    {
        pairs
            .into_iter()
            .fold(self, |tree, (sql, values)| tree.raw(sql, values))
    }

    /// Repeat the same raw fragment once per value.
    ///
    /// `Where::or().repeated("`tag` = ?", ["a", "b"])` renders
    /// `` `tag` = ? OR `tag` = ? ``.
    pub fn repeated<V: Into<SqlValue>>(
        self,
        sql: &str,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        values
            .into_iter()
            .fold(self, |tree, value| tree.raw(sql, SqlValue::from(value.into())))
    }

    // ==================== Nesting ====================

    /// Append a child tree wrapped in parentheses.
    pub fn nest(self, tree: Where) -> Self {
        self.nest_with(tree, true)
    }

    /// Append a child tree, parenthesized or inlined.
    ///
    /// Inlining is only meaningful when both trees share a joiner. Errors
    /// recorded on the child carry over to this tree; empty children are
    /// dropped.
    pub fn nest_with(mut self, mut tree: Where, parenthesize: bool) -> Self {
        if let Some(err) = tree.error.take() {
            self.record(err);
        }
        if !tree.is_empty() {
            self.conditions.push(Condition::Nested { tree, parenthesize });
        }
        self
    }

    // ==================== Linearization ====================

    fn linearize(&self, values: &mut Vec<SqlValue>) -> String {
        self.conditions
            .iter()
            .filter(|c| !c.is_empty())
            .map(|c| c.linearize(values))
            .collect::<Vec<_>>()
            .join(self.joiner.separator())
    }

    /// Render the clause (without `WHERE`) and collect its values.
    pub fn build(&self) -> SqlResult<Fragment> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let mut values = Vec::new();
        let sql = self.linearize(&mut values);
        Ok(Fragment { sql, values })
    }

    /// Get the rendered clause (for debugging).
    pub fn to_sql(&self) -> String {
        self.linearize(&mut Vec::new())
    }

    /// Concatenate the value lists of several trees, in order.
    pub fn concat<'a>(trees: impl IntoIterator<Item = &'a Where>) -> SqlResult<Vec<SqlValue>> {
        let mut values = Vec::new();
        for tree in trees {
            values.extend(tree.build()?.values);
        }
        Ok(values)
    }
}

/// Argument accepted by `where_clause` / `having`: a tree or a raw string.
#[derive(Clone, Debug)]
pub enum Predicate {
    /// A predicate tree.
    Tree(Where),
    /// A raw clause and its values.
    Raw { sql: String, values: Vec<SqlValue> },
}

impl Predicate {
    /// Raw clause with values (scalar or sequence).
    pub fn raw(sql: impl Into<String>, values: impl IntoValues) -> Self {
        Predicate::Raw {
            sql: sql.into(),
            values: values.into_values(),
        }
    }

    pub(crate) fn build(&self) -> SqlResult<Fragment> {
        match self {
            Predicate::Tree(tree) => tree.build(),
            Predicate::Raw { sql, values } if sql.trim().is_empty() && !values.is_empty() => {
                Err(blank_raw(values.len()))
            }
            Predicate::Raw { sql, values } => Ok(Fragment {
                sql: sql.trim().to_string(),
                values: values.clone(),
            }),
        }
    }
}

impl From<Where> for Predicate {
    fn from(tree: Where) -> Self {
        Predicate::Tree(tree)
    }
}

impl From<&str> for Predicate {
    fn from(sql: &str) -> Self {
        Predicate::raw(sql, ())
    }
}

impl From<String> for Predicate {
    fn from(sql: String) -> Self {
        Predicate::raw(sql, ())
    }
}

fn blank_raw(count: usize) -> SqlError {
    SqlError::invalid_condition(format!("blank raw clause with {count} value(s)"))
}

/// Render an optional predicate, treating an empty clause as absent.
pub(crate) fn build_predicate(predicate: Option<&Predicate>) -> SqlResult<Option<Fragment>> {
    match predicate {
        Some(p) => {
            let fragment = p.build()?;
            Ok((!fragment.is_empty()).then_some(fragment))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<SqlValue> {
        values.iter().copied().map(SqlValue::Int).collect()
    }

    #[test]
    fn test_simple_eq() {
        let clause = Where::and().eq("name", "alice").build().unwrap();
        assert_eq!(clause.sql, "`name` = ?");
        assert_eq!(clause.values, vec![SqlValue::from("alice")]);
    }

    #[test]
    fn test_and_group() {
        let clause = Where::and()
            .eq("status", "active")
            .gt("age", 18)
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`status` = ? AND `age` > ?");
        assert_eq!(clause.values.len(), 2);
    }

    #[test]
    fn test_or_group() {
        let clause = Where::or()
            .eq("role", "admin")
            .eq("role", "superuser")
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`role` = ? OR `role` = ?");
    }

    #[test]
    fn test_nested_and_or() {
        let clause = Where::and_from([("user_id", 1)])
            .nest(Where::or_from([
                ("email", SqlValue::from("x@y.z")),
                ("level", SqlValue::from(3)),
            ]))
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`user_id` = ? AND (`email` = ? OR `level` = ?)");
        assert_eq!(
            clause.values,
            vec![SqlValue::Int(1), SqlValue::from("x@y.z"), SqlValue::Int(3)]
        );
    }

    #[test]
    fn test_deep_nesting_keeps_value_order() {
        let clause = Where::and()
            .eq("a", 1)
            .nest(
                Where::or()
                    .eq("b", 2)
                    .nest(Where::and().eq("c", 3).raw("`d` BETWEEN ? AND ?", [4, 5])),
            )
            .eq("e", 6)
            .build()
            .unwrap();
        assert_eq!(
            clause.sql,
            "`a` = ? AND (`b` = ? OR (`c` = ? AND `d` BETWEEN ? AND ?)) AND `e` = ?"
        );
        assert_eq!(clause.values, ints(&[1, 2, 3, 4, 5, 6]));
        assert_eq!(clause.sql.matches('?').count(), clause.values.len());
    }

    #[test]
    fn test_nest_without_parentheses() {
        let clause = Where::and()
            .eq("a", 1)
            .nest_with(Where::and().eq("b", 2).eq("c", 3), false)
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`a` = ? AND `b` = ? AND `c` = ?");
        assert_eq!(clause.values, ints(&[1, 2, 3]));
    }

    #[test]
    fn test_empty_tree() {
        let clause = Where::and().build().unwrap();
        assert_eq!(clause.sql, "");
        assert!(clause.values.is_empty());
    }

    #[test]
    fn test_empty_child_is_skipped() {
        let clause = Where::and()
            .eq("a", 1)
            .nest(Where::or())
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`a` = ?");
    }

    #[test]
    fn test_raw_scalar_and_list() {
        let clause = Where::and()
            .raw("`created` > NOW()", ())
            .raw("`score` > ?", 10)
            .raw("`x` IN (?, ?)", vec![7, 8])
            .build()
            .unwrap();
        assert_eq!(
            clause.sql,
            "`created` > NOW() AND `score` > ? AND `x` IN (?, ?)"
        );
        assert_eq!(clause.values, ints(&[10, 7, 8]));
    }

    #[test]
    fn test_raw_all_and_repeated() {
        let clause = Where::or()
            .raw_all([("`a` = ?", 1), ("`b` = ?", 2)])
            .repeated("`tag` = ?", ["x", "y"])
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`a` = ? OR `b` = ? OR `tag` = ? OR `tag` = ?");
        assert_eq!(
            clause.values,
            vec![
                SqlValue::Int(1),
                SqlValue::Int(2),
                SqlValue::from("x"),
                SqlValue::from("y"),
            ]
        );
    }

    #[test]
    fn test_in_list() {
        let clause = Where::and().in_list("id", vec![1, 2, 3]).build().unwrap();
        assert_eq!(clause.sql, "`id` IN (?, ?, ?)");
        assert_eq!(clause.values, ints(&[1, 2, 3]));
    }

    #[test]
    fn test_empty_in_lists() {
        let clause = Where::and()
            .in_list("id", Vec::<i64>::new())
            .not_in("id", Vec::<i64>::new())
            .build()
            .unwrap();
        assert_eq!(clause.sql, "1=0 AND 1=1");
        assert!(clause.values.is_empty());
    }

    #[test]
    fn test_null_checks() {
        let clause = Where::and()
            .is_null("deleted_at")
            .is_not_null("`email`")
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`deleted_at` IS NULL AND `email` IS NOT NULL");
        assert!(clause.values.is_empty());
    }

    #[test]
    fn test_column_ticks_are_normalized() {
        let clause = Where::and().eq("`level`", 2).build().unwrap();
        assert_eq!(clause.sql, "`level` = ?");
    }

    #[test]
    fn test_empty_column_is_invalid() {
        let err = Where::and().eq("", 1).build().unwrap_err();
        assert!(matches!(err, SqlError::InvalidCondition(_)));
    }

    #[test]
    fn test_null_value_for_comparison_is_invalid() {
        let err = Where::and()
            .eq("email", Option::<&str>::None)
            .build()
            .unwrap_err();
        assert!(matches!(err, SqlError::InvalidCondition(_)));
    }

    #[test]
    fn test_value_for_null_check_is_invalid() {
        let err = Where::and()
            .condition("email", Op::IsNull, "x")
            .build()
            .unwrap_err();
        assert!(matches!(err, SqlError::InvalidCondition(_)));
    }

    #[test]
    fn test_child_error_propagates() {
        let tree = Where::and().eq("a", 1).nest(Where::or().eq("", 2));
        assert!(tree.error().is_some());
        assert!(tree.build().is_err());
    }

    #[test]
    fn test_first_error_wins() {
        let err = Where::and()
            .eq("", 1)
            .condition("b", Op::Gt, SqlValue::Null)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid condition: column is required");
    }

    #[test]
    fn test_concat() {
        let a = Where::and().eq("a", 1).eq("b", 2);
        let b = Where::or().eq("c", 3);
        assert_eq!(Where::concat([&a, &b]).unwrap(), ints(&[1, 2, 3]));
    }

    #[test]
    fn test_build_is_repeatable() {
        let tree = Where::and().eq("a", 1);
        assert_eq!(tree.build().unwrap(), tree.build().unwrap());
    }

    #[test]
    fn test_predicate_from_str() {
        let fragment = Predicate::from(" `a` = 1 ").build().unwrap();
        assert_eq!(fragment.sql, "`a` = 1");
        assert!(fragment.values.is_empty());
    }

    #[test]
    fn test_build_predicate_treats_empty_tree_as_absent() {
        let empty = Predicate::from(Where::and());
        assert!(build_predicate(Some(&empty)).unwrap().is_none());
        assert!(build_predicate(None).unwrap().is_none());
    }

    #[test]
    fn test_blank_raw_is_skipped() {
        let clause = Where::and()
            .eq("a", 1)
            .raw("", ())
            .raw("   ", Vec::<SqlValue>::new())
            .build()
            .unwrap();
        assert_eq!(clause.sql, "`a` = ?");
        assert_eq!(clause.values, ints(&[1]));

        let pushed = Where::or().push(Condition::Raw {
            sql: " ".into(),
            values: vec![],
        });
        assert!(pushed.is_empty());
        assert_eq!(Where::and().nest(pushed).eq("b", 2).to_sql(), "`b` = ?");
    }

    #[test]
    fn test_blank_raw_with_values_is_invalid() {
        let err = Where::and().eq("a", 1).raw(" ", 5).build().unwrap_err();
        assert!(matches!(err, SqlError::InvalidCondition(_)));

        let err = Where::or().repeated("", [1, 2]).build().unwrap_err();
        assert!(matches!(err, SqlError::InvalidCondition(_)));
    }

    #[test]
    fn test_blank_raw_predicate_with_values_is_invalid() {
        let blank = Predicate::raw("  ", 5);
        let err = build_predicate(Some(&blank)).unwrap_err();
        assert!(matches!(err, SqlError::InvalidCondition(_)));

        let bare = Predicate::raw("  ", ());
        assert!(build_predicate(Some(&bare)).unwrap().is_none());
    }
}
