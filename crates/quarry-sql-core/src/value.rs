//! Scalar parameters and value-position nodes.

use crate::expr::Expression;
use crate::query::SelectQuery;

/// A scalar that can be bound as a statement parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Renders the scalar straight into SQL text.
    ///
    /// This is the unbound interpolation path used by identifier and
    /// fragment positions: text is emitted verbatim, with no quoting or
    /// escaping. Untrusted data must never travel through it; bind it
    /// as a parameter instead.
    #[must_use]
    pub fn render_raw(&self) -> String {
        match self {
            Self::Null => String::from("NULL"),
            Self::Bool(b) => {
                if *b {
                    String::from("TRUE")
                } else {
                    String::from("FALSE")
                }
            }
            Self::Int(n) => format!("{n}"),
            Self::Float(f) => format!("{f}"),
            Self::Text(s) => s.clone(),
            Self::Blob(bytes) => {
                let hex: String = bytes.iter().map(|b| format!("{b:02X}")).collect();
                format!("X'{hex}'")
            }
        }
    }
}

/// Conversion of Rust values into [`SqlValue`] parameters.
pub trait ToSqlValue {
    /// Converts the value.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

macro_rules! impl_to_sql_int {
    ($($t:ty),*) => {
        $(
            impl ToSqlValue for $t {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

impl_to_sql_int!(i64, i32, i16, i8, u32, u16, u8);

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(value) => value.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Blob(self.to_vec())
    }
}

/// A value-position node in a statement tree.
///
/// This is the closed set of shapes the value compiler accepts. Each
/// variant maps to exactly one rendering rule, and the `From`
/// conversions normalize on the way in: a Rust `None` or `bool` lands
/// on the literal variants, never on [`Value::Scalar`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A scalar, bound as a parameter or rendered raw per call site.
    Scalar(SqlValue),
    /// The NULL literal. Never bound.
    Null,
    /// The TRUE or FALSE literal. Never bound.
    Bool(bool),
    /// Nested values rendered as a parenthesized tuple.
    List(Vec<Value>),
    /// A precompiled fragment, inlined verbatim with its parameters.
    Raw(Expression),
    /// A nested SELECT, compiled in place and parenthesized.
    Subquery(Box<SelectQuery>),
}

impl Value {
    /// Creates a raw fragment value from SQL text.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(Expression::new(sql))
    }

    /// Whether a filter entry point treats this value as absent.
    ///
    /// Absent means NULL, an empty list, or blank text.
    #[must_use]
    pub fn is_filter_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::List(items) => items.is_empty(),
            Self::Scalar(SqlValue::Text(s)) => s.trim().is_empty(),
            Self::Raw(expr) => expr.is_empty(),
            _ => false,
        }
    }
}

impl From<SqlValue> for Value {
    fn from(value: SqlValue) -> Self {
        match value {
            SqlValue::Null => Self::Null,
            SqlValue::Bool(b) => Self::Bool(b),
            other => Self::Scalar(other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

macro_rules! impl_value_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Scalar(value.to_sql_value())
                }
            }
        )*
    };
}

impl_value_from_scalar!(i64, i32, i16, i8, u32, u16, u8, f64, f32);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Scalar(SqlValue::Text(String::from(value)))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Scalar(SqlValue::Text(value))
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        Self::Raw(expr)
    }
}

impl From<SelectQuery> for Value {
    fn from(query: SelectQuery) -> Self {
        Self::Subquery(Box::new(query))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Null,
        }
    }
}
