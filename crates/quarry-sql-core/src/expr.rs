//! Compiled SQL fragments.

use std::fmt;

use indexmap::IndexMap;

use crate::value::{SqlValue, ToSqlValue};

/// Placeholder name to value map, ordered by registration.
pub type Params = IndexMap<String, SqlValue>;

/// A compiled SQL fragment: text plus the parameters it binds.
///
/// Every compilation step produces one of these, and the statement
/// builders fold nested fragments together in clause order. Fragments
/// built by hand slot into any value or condition position and are
/// always emitted verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expression {
    sql: String,
    params: Params,
}

impl Expression {
    /// Creates a fragment with no parameters.
    #[must_use]
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Params::new(),
        }
    }

    /// Creates a fragment with bound parameters.
    #[must_use]
    pub fn with_params(sql: impl Into<String>, params: Params) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    /// Adds one bound parameter, keeping registration order.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.params.insert(name.into(), value.to_sql_value());
        self
    }

    /// The SQL text.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bound parameters, in the order they were registered.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Whether the text is blank.
    ///
    /// Blank fragments disappear from the surrounding clause, keyword
    /// included.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty()
    }

    /// Splits the fragment into text and parameters.
    #[must_use]
    pub fn into_parts(self) -> (String, Params) {
        (self.sql, self.params)
    }

    /// Folds another parameter map into this one.
    ///
    /// A colliding name keeps its original position and takes the later
    /// value. Generated `vN` names never collide; hand-named parameters
    /// on raw fragments can, and the override is deliberate.
    pub fn merge_params(&mut self, params: Params) {
        for (name, value) in params {
            self.params.insert(name, value);
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl From<&str> for Expression {
    fn from(sql: &str) -> Self {
        Self::new(sql)
    }
}

impl From<String> for Expression {
    fn from(sql: String) -> Self {
        Self::new(sql)
    }
}
