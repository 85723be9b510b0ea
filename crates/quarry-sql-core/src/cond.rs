//! Condition nodes for WHERE, HAVING and ON clauses.

use indexmap::IndexMap;

use crate::expr::Expression;
use crate::query::SelectQuery;
use crate::value::Value;

/// Logical connector of a compound condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundOp {
    /// Every operand must hold.
    And,
    /// Any operand may hold.
    Or,
    /// The AND-joined operands are negated as one group.
    Not,
}

impl CompoundOp {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }
}

/// A condition node.
///
/// The equality map and the operator compound are separate variants the
/// caller picks explicitly; the compiler never guesses a grammar from
/// the shape of a value. Conditions nest to any depth through
/// [`Cond::Compound`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cond {
    /// A fragment emitted untouched, parameters included.
    Raw(Expression),
    /// Column to value pairs, AND-joined in insertion order.
    ///
    /// The operator per pair follows the value: lists and subselects
    /// compare with `IN`, NULL and booleans with `IS`, everything else
    /// with `=`.
    Equality(IndexMap<String, Value>),
    /// Operand conditions joined by a logical connector.
    Compound {
        /// The connector.
        op: CompoundOp,
        /// The operand conditions.
        operands: Vec<Cond>,
    },
    /// `lhs <op> rhs` with a caller-chosen comparison operator.
    Compare {
        /// Comparison operator such as `>` or `!=`.
        op: String,
        /// Left operand, rendered raw.
        lhs: Value,
        /// Right operand, bound.
        rhs: Value,
    },
    /// `expr BETWEEN low AND high`.
    Between {
        /// Bracketed expression, rendered raw.
        expr: Value,
        /// Lower bound, bound.
        low: Value,
        /// Upper bound, bound.
        high: Value,
        /// Renders `NOT BETWEEN` instead.
        negated: bool,
    },
    /// `lhs IN rhs`.
    InList {
        /// Left operand, rendered raw.
        lhs: Value,
        /// Right operand, bound.
        rhs: Value,
        /// Renders `NOT IN` instead.
        negated: bool,
    },
    /// A parenthesized subselect used as a predicate.
    Subquery(Box<SelectQuery>),
}

impl Cond {
    /// Creates a raw condition from SQL text.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(Expression::new(sql))
    }

    /// Creates an equality map from column and value pairs.
    #[must_use]
    pub fn equality<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Equality(
            entries
                .into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        )
    }

    /// Creates a single-pair equality map.
    #[must_use]
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::equality([(column.into(), value.into())])
    }

    /// Joins conditions with AND.
    #[must_use]
    pub fn and(operands: impl IntoIterator<Item = Self>) -> Self {
        Self::compound(CompoundOp::And, operands)
    }

    /// Joins conditions with OR.
    #[must_use]
    pub fn or(operands: impl IntoIterator<Item = Self>) -> Self {
        Self::compound(CompoundOp::Or, operands)
    }

    /// Negates the AND-joined conditions as one group.
    #[must_use]
    pub fn not(operands: impl IntoIterator<Item = Self>) -> Self {
        Self::compound(CompoundOp::Not, operands)
    }

    fn compound(op: CompoundOp, operands: impl IntoIterator<Item = Self>) -> Self {
        Self::Compound {
            op,
            operands: operands.into_iter().collect(),
        }
    }

    /// Creates a comparison with a caller-chosen operator.
    #[must_use]
    pub fn compare(op: impl Into<String>, lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::Compare {
            op: op.into(),
            lhs: lhs.into(),
            rhs: rhs.into(),
        }
    }

    /// Creates a `BETWEEN` range check.
    #[must_use]
    pub fn between(
        expr: impl Into<Value>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Self::Between {
            expr: expr.into(),
            low: low.into(),
            high: high.into(),
            negated: false,
        }
    }

    /// Creates a `NOT BETWEEN` range check.
    #[must_use]
    pub fn not_between(
        expr: impl Into<Value>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Self::Between {
            expr: expr.into(),
            low: low.into(),
            high: high.into(),
            negated: true,
        }
    }

    /// Creates an `IN` membership check.
    #[must_use]
    pub fn in_list(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::InList {
            lhs: lhs.into(),
            rhs: rhs.into(),
            negated: false,
        }
    }

    /// Creates a `NOT IN` membership check.
    #[must_use]
    pub fn not_in_list(lhs: impl Into<Value>, rhs: impl Into<Value>) -> Self {
        Self::InList {
            lhs: lhs.into(),
            rhs: rhs.into(),
            negated: true,
        }
    }

    /// Creates a multi-column `IN` over keyed rows.
    ///
    /// Each row is reordered up front to match `columns`, so rows may
    /// list their keys in any order. When any row misses a column, or
    /// carries a nested list, every row keeps its own insertion order
    /// instead.
    #[must_use]
    pub fn in_columns<C, R, K, V>(
        columns: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = R>,
    ) -> Self
    where
        C: Into<String>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::multi_column_in(columns, rows, false)
    }

    /// Creates a multi-column `NOT IN` over keyed rows.
    #[must_use]
    pub fn not_in_columns<C, R, K, V>(
        columns: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = R>,
    ) -> Self
    where
        C: Into<String>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::multi_column_in(columns, rows, true)
    }

    fn multi_column_in<C, R, K, V>(
        columns: impl IntoIterator<Item = C>,
        rows: impl IntoIterator<Item = R>,
        negated: bool,
    ) -> Self
    where
        C: Into<String>,
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let rows: Vec<IndexMap<String, Value>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|(key, value)| (key.into(), value.into()))
                    .collect()
            })
            .collect();

        let lhs = Value::List(columns.iter().map(|c| Value::from(c.as_str())).collect());
        let reordered: Option<Vec<Value>> =
            rows.iter().map(|row| reorder_row(&columns, row)).collect();
        let rhs_rows = reordered.unwrap_or_else(|| {
            rows.iter()
                .map(|row| Value::List(row.values().cloned().collect()))
                .collect()
        });

        Self::InList {
            lhs,
            rhs: Value::List(rhs_rows),
            negated,
        }
    }

    /// Drops the parts a filter entry point considers absent.
    ///
    /// Equality pairs with an absent value vanish; compound operands are
    /// filtered recursively and an emptied compound vanishes whole;
    /// comparisons vanish when their bound side is NULL (both bounds,
    /// for ranges); raw conditions vanish only when blank. `None` means
    /// nothing was left.
    #[must_use]
    pub fn filter(self) -> Option<Self> {
        match self {
            Self::Raw(expr) => {
                if expr.is_empty() {
                    None
                } else {
                    Some(Self::Raw(expr))
                }
            }
            Self::Equality(entries) => {
                let entries: IndexMap<String, Value> = entries
                    .into_iter()
                    .filter(|(_, value)| !value.is_filter_empty())
                    .collect();
                if entries.is_empty() {
                    None
                } else {
                    Some(Self::Equality(entries))
                }
            }
            Self::Compound { op, operands } => {
                let operands: Vec<Self> =
                    operands.into_iter().filter_map(Self::filter).collect();
                if operands.is_empty() {
                    None
                } else {
                    Some(Self::Compound { op, operands })
                }
            }
            Self::Compare {
                rhs: Value::Null, ..
            } => None,
            Self::Between {
                low: Value::Null,
                high: Value::Null,
                ..
            } => None,
            Self::InList {
                rhs: Value::Null, ..
            } => None,
            other => Some(other),
        }
    }
}

fn reorder_row(columns: &[String], row: &IndexMap<String, Value>) -> Option<Value> {
    if row.len() != columns.len() {
        return None;
    }
    if row.values().any(|value| matches!(value, Value::List(_))) {
        return None;
    }
    let mut items = Vec::with_capacity(columns.len());
    for column in columns {
        items.push(row.get(column)?.clone());
    }
    Some(Value::List(items))
}

impl From<&str> for Cond {
    fn from(sql: &str) -> Self {
        Self::raw(sql)
    }
}

impl From<String> for Cond {
    fn from(sql: String) -> Self {
        Self::raw(sql)
    }
}

impl From<Expression> for Cond {
    fn from(expr: Expression) -> Self {
        Self::Raw(expr)
    }
}

impl From<SelectQuery> for Cond {
    fn from(query: SelectQuery) -> Self {
        Self::Subquery(Box::new(query))
    }
}

impl From<IndexMap<String, Value>> for Cond {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self::Equality(entries)
    }
}
