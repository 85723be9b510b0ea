//! Clause value-objects shared by the statement kinds.

use crate::cond::Cond;
use crate::expr::Expression;
use crate::query::SelectQuery;
use crate::value::Value;

/// Where the rows of one table reference come from.
#[derive(Debug, Clone, PartialEq)]
pub enum TableSource {
    /// A table name, or any reference text, emitted verbatim.
    Named(String),
    /// A precompiled fragment.
    Raw(Expression),
    /// A parenthesized subselect.
    Subquery(Box<SelectQuery>),
}

/// One table reference with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    /// The referenced source.
    pub source: TableSource,
    /// Alias rendered as `... AS alias`.
    pub alias: Option<String>,
}

impl TableRef {
    /// References a table by name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            source: TableSource::Named(name.into()),
            alias: None,
        }
    }

    /// Attaches an alias.
    #[must_use]
    pub fn aliased(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}

impl From<Expression> for TableRef {
    fn from(expr: Expression) -> Self {
        Self {
            source: TableSource::Raw(expr),
            alias: None,
        }
    }
}

impl From<SelectQuery> for TableRef {
    fn from(query: SelectQuery) -> Self {
        Self {
            source: TableSource::Subquery(Box::new(query)),
            alias: None,
        }
    }
}

impl<S: Into<TableRef>> From<(S, &str)> for TableRef {
    fn from((source, alias): (S, &str)) -> Self {
        source.into().aliased(alias)
    }
}

/// The ordered table list behind FROM, USING and the UPDATE target.
///
/// An alias set before any table arrives is remembered and applied to
/// the first table of the next list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableClause {
    tables: Vec<TableRef>,
    pending_alias: Option<String>,
}

impl TableClause {
    /// Replaces the table list.
    pub fn set(&mut self, tables: Vec<TableRef>) {
        self.tables = tables;
        if let Some(alias) = self.pending_alias.take() {
            self.set_alias(alias);
        }
    }

    /// Clears the table list.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Re-aliases the first table, keeping its source.
    ///
    /// With no table set yet, the alias is held back until one arrives.
    pub fn set_alias(&mut self, alias: impl Into<String>) {
        if let Some(first) = self.tables.first_mut() {
            first.alias = Some(alias.into());
        } else {
            self.pending_alias = Some(alias.into());
        }
    }

    /// The table list.
    #[must_use]
    pub fn tables(&self) -> &[TableRef] {
        &self.tables
    }

    /// Whether no table has been set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Join flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinKind {
    /// `INNER JOIN`.
    Inner,
    /// `LEFT JOIN`.
    Left,
    /// `RIGHT JOIN`.
    Right,
    /// `FULL JOIN`.
    Full,
    /// `CROSS JOIN`.
    Cross,
    /// Any other join text, emitted verbatim.
    Custom(String),
}

impl JoinKind {
    /// Returns the SQL join keyword.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
            Self::Custom(text) => text,
        }
    }
}

/// One join record.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The join flavor.
    pub kind: JoinKind,
    /// The joined table.
    pub table: TableRef,
    /// The ON condition; when it compiles to nothing, no ON part is
    /// rendered.
    pub on: Option<Cond>,
}

/// The accumulated join list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinClause {
    joins: Vec<Join>,
}

impl JoinClause {
    /// Appends a join.
    pub fn push(&mut self, join: Join) {
        self.joins.push(join);
    }

    /// The joins, in the order they were added.
    #[must_use]
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Whether no join has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joins.is_empty()
    }
}

/// A WHERE or HAVING slot.
///
/// The slot holds at most one condition; the combinators wrap the old
/// and new conditions into a compound instead of keeping a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionClause {
    cond: Option<Cond>,
}

impl ConditionClause {
    /// Replaces the condition.
    pub fn set(&mut self, cond: Cond) {
        self.cond = Some(cond);
    }

    /// ANDs a condition onto the existing one.
    pub fn and(&mut self, cond: Cond) {
        self.cond = Some(match self.cond.take() {
            Some(existing) => Cond::and([existing, cond]),
            None => cond,
        });
    }

    /// ORs a condition onto the existing one.
    pub fn or(&mut self, cond: Cond) {
        self.cond = Some(match self.cond.take() {
            Some(existing) => Cond::or([existing, cond]),
            None => cond,
        });
    }

    /// Like [`set`](Self::set), but an emptied condition leaves the slot
    /// untouched.
    pub fn filter_set(&mut self, cond: Cond) {
        if let Some(cond) = cond.filter() {
            self.set(cond);
        }
    }

    /// Like [`and`](Self::and), but an emptied condition is ignored.
    pub fn filter_and(&mut self, cond: Cond) {
        if let Some(cond) = cond.filter() {
            self.and(cond);
        }
    }

    /// Like [`or`](Self::or), but an emptied condition is ignored.
    pub fn filter_or(&mut self, cond: Cond) {
        if let Some(cond) = cond.filter() {
            self.or(cond);
        }
    }

    /// The assembled condition, if any.
    #[must_use]
    pub fn get(&self) -> Option<&Cond> {
        self.cond.as_ref()
    }
}

/// A LIMIT or OFFSET slot.
///
/// Setting the slot to NULL disables it again, so a count can be
/// plumbed straight through from an optional input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitClause {
    value: Option<Value>,
}

impl LimitClause {
    /// Sets the count expression.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// The count expression, unless unset or disabled.
    #[must_use]
    pub fn get(&self) -> Option<&Value> {
        match &self.value {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }
}

/// One select-list item.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectItem {
    /// The selected expression.
    pub expr: Value,
    /// Alias rendered as `... AS alias`.
    pub alias: Option<String>,
}

impl SelectItem {
    /// Selects an expression without an alias.
    #[must_use]
    pub fn new(expr: impl Into<Value>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
        }
    }

    /// Selects an expression under an alias.
    #[must_use]
    pub fn aliased(expr: impl Into<Value>, alias: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<&str> for SelectItem {
    fn from(expr: &str) -> Self {
        Self::new(expr)
    }
}

impl From<String> for SelectItem {
    fn from(expr: String) -> Self {
        Self::new(expr)
    }
}

impl From<Expression> for SelectItem {
    fn from(expr: Expression) -> Self {
        Self::new(expr)
    }
}

impl From<SelectQuery> for SelectItem {
    fn from(query: SelectQuery) -> Self {
        Self::new(query)
    }
}

impl From<Value> for SelectItem {
    fn from(expr: Value) -> Self {
        Self::new(expr)
    }
}

impl<E: Into<Value>> From<(E, &str)> for SelectItem {
    fn from((expr, alias): (E, &str)) -> Self {
        Self::aliased(expr, alias)
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderItem {
    /// `expr ASC`.
    Asc(Value),
    /// `expr DESC`.
    Desc(Value),
    /// A bare expression carrying its own direction text.
    Expr(Value),
}

impl OrderItem {
    /// Orders ascending on an expression.
    #[must_use]
    pub fn asc(expr: impl Into<Value>) -> Self {
        Self::Asc(expr.into())
    }

    /// Orders descending on an expression.
    #[must_use]
    pub fn desc(expr: impl Into<Value>) -> Self {
        Self::Desc(expr.into())
    }
}

impl From<&str> for OrderItem {
    fn from(expr: &str) -> Self {
        Self::Expr(Value::from(expr))
    }
}

impl From<String> for OrderItem {
    fn from(expr: String) -> Self {
        Self::Expr(Value::from(expr))
    }
}

impl From<Expression> for OrderItem {
    fn from(expr: Expression) -> Self {
        Self::Expr(Value::Raw(expr))
    }
}

impl From<Value> for OrderItem {
    fn from(expr: Value) -> Self {
        Self::Expr(expr)
    }
}

/// One SET-list entry of an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub enum SetItem {
    /// `column = value` with the value bound.
    Assign {
        /// Assigned column.
        column: String,
        /// Bound value.
        value: Value,
    },
    /// A bare fragment rendered raw, e.g. `counter = counter + 1`.
    Expr(Value),
}

/// What one union branch contains.
#[derive(Debug, Clone, PartialEq)]
pub enum UnionSource {
    /// A nested SELECT whose ORDER BY hoists to the outer statement.
    Select(Box<SelectQuery>),
    /// Raw SQL text or a precompiled fragment.
    Raw(Expression),
}

impl From<SelectQuery> for UnionSource {
    fn from(query: SelectQuery) -> Self {
        Self::Select(Box::new(query))
    }
}

impl From<&str> for UnionSource {
    fn from(sql: &str) -> Self {
        Self::Raw(Expression::new(sql))
    }
}

impl From<String> for UnionSource {
    fn from(sql: String) -> Self {
        Self::Raw(Expression::new(sql))
    }
}

impl From<Expression> for UnionSource {
    fn from(expr: Expression) -> Self {
        Self::Raw(expr)
    }
}

/// One union branch.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionBranch {
    /// The unioned query.
    pub source: UnionSource,
    /// Renders `UNION ALL` instead of `UNION`.
    pub all: bool,
}
