//! Bound values.
//!
//! [`SqlValue`] is the scalar that ends up behind one `?` placeholder.
//! [`IntoValues`] lets the same argument position accept either one scalar or
//! an ordered sequence of scalars.

use crate::error::{SqlError, SqlResult};
use serde::Serialize;
use std::fmt;

/// A scalar value bound to one positional placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
}

impl SqlValue {
    /// Check if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Strings and numbers; the only values `Model::values` keeps.
    pub(crate) fn is_text_or_number(&self) -> bool {
        matches!(
            self,
            SqlValue::Int(_) | SqlValue::UInt(_) | SqlValue::Float(_) | SqlValue::Text(_)
        )
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => f.write_str("NULL"),
            SqlValue::Bool(b) => write!(f, "{b}"),
            SqlValue::Int(n) => write!(f, "{n}"),
            SqlValue::UInt(n) => write!(f, "{n}"),
            SqlValue::Float(x) => write!(f, "{x}"),
            SqlValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl From<$t> for SqlValue {
                fn from(v: $t) -> Self {
                    SqlValue::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64: i8, i16, i32, i64);
impl_from_int!(UInt, u64: u8, u16, u32, u64);

impl From<usize> for SqlValue {
    fn from(v: usize) -> Self {
        SqlValue::UInt(v as u64)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        SqlValue::Float(f64::from(v))
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<&String> for SqlValue {
    fn from(v: &String) -> Self {
        SqlValue::Text(v.clone())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl TryFrom<serde_json::Value> for SqlValue {
    type Error = SqlError;

    /// Scalars convert one-to-one; arrays and objects are rejected.
    fn try_from(value: serde_json::Value) -> SqlResult<Self> {
        use serde_json::Value;

        match value {
            Value::Null => Ok(SqlValue::Null),
            Value::Bool(b) => Ok(SqlValue::Bool(b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(SqlValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(SqlValue::UInt(u))
                } else {
                    n.as_f64().map(SqlValue::Float).ok_or_else(|| {
                        SqlError::invalid_argument(format!("unrepresentable number {n}"))
                    })
                }
            }
            Value::String(s) => Ok(SqlValue::Text(s)),
            Value::Array(_) => Err(SqlError::invalid_argument(
                "expected a scalar value, got an array",
            )),
            Value::Object(_) => Err(SqlError::invalid_argument(
                "expected a scalar value, got an object",
            )),
        }
    }
}

/// Convert a JSON object into ordered `(column, value)` pairs.
///
/// Key order is the object's insertion order. Non-scalar members fail with
/// [`SqlError::InvalidArgument`].
pub fn pairs_from_json(
    map: serde_json::Map<String, serde_json::Value>,
) -> SqlResult<Vec<(String, SqlValue)>> {
    map.into_iter()
        .map(|(column, value)| {
            let value = SqlValue::try_from(value).map_err(|e| match e {
                SqlError::InvalidArgument(msg) => {
                    SqlError::InvalidArgument(format!("column `{column}`: {msg}"))
                }
                other => other,
            })?;
            Ok((column, value))
        })
        .collect()
}

/// Argument that supplies zero, one or many bound values.
///
/// A scalar pushes one entry; a sequence is flattened in order; `()` pushes
/// nothing.
pub trait IntoValues {
    /// Consume the argument into an ordered list of values.
    fn into_values(self) -> Vec<SqlValue>;
}

macro_rules! impl_into_values_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoValues for $t {
                fn into_values(self) -> Vec<SqlValue> {
                    vec![SqlValue::from(self)]
                }
            }
        )*
    };
}

impl_into_values_scalar!(
    SqlValue, bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64, String, &str, &String
);

impl<T: Into<SqlValue>> IntoValues for Option<T> {
    fn into_values(self) -> Vec<SqlValue> {
        vec![SqlValue::from(self)]
    }
}

impl IntoValues for () {
    fn into_values(self) -> Vec<SqlValue> {
        Vec::new()
    }
}

impl<T: Into<SqlValue>> IntoValues for Vec<T> {
    fn into_values(self) -> Vec<SqlValue> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<SqlValue>, const N: usize> IntoValues for [T; N] {
    fn into_values(self) -> Vec<SqlValue> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<SqlValue> + Clone> IntoValues for &[T] {
    fn into_values(self) -> Vec<SqlValue> {
        self.iter().cloned().map(Into::into).collect()
    }
}
