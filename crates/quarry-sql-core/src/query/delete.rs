//! DELETE statement trees.

use crate::cond::Cond;
use crate::value::Value;

use super::clause::{ConditionClause, Join, JoinClause, JoinKind, LimitClause, TableClause, TableRef};

/// A DELETE statement under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteQuery {
    /// Deleted-from table list.
    pub tables: TableClause,
    /// USING table list.
    pub using: TableClause,
    /// Join list.
    pub joins: JoinClause,
    /// WHERE slot.
    pub where_clause: ConditionClause,
    /// LIMIT slot.
    pub limit: LimitClause,
    /// Replacement for the leading `DELETE FROM` keyword.
    pub start: Option<Value>,
    /// Fragment appended after everything else.
    pub end: Option<Value>,
}

impl DeleteQuery {
    /// Creates an empty DELETE.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the deleted-from table.
    #[must_use]
    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.tables.set(vec![table.into()]);
        self
    }

    /// Sets several deleted-from tables.
    #[must_use]
    pub fn from_tables<T: Into<TableRef>>(mut self, tables: impl IntoIterator<Item = T>) -> Self {
        self.tables.set(tables.into_iter().map(Into::into).collect());
        self
    }

    /// Re-aliases the first table, or the next one to arrive.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.tables.set_alias(alias);
        self
    }

    /// Sets the USING table.
    #[must_use]
    pub fn using(mut self, table: impl Into<TableRef>) -> Self {
        self.using.set(vec![table.into()]);
        self
    }

    /// Sets several USING tables.
    #[must_use]
    pub fn using_tables<T: Into<TableRef>>(mut self, tables: impl IntoIterator<Item = T>) -> Self {
        self.using.set(tables.into_iter().map(Into::into).collect());
        self
    }

    /// Appends a join of any flavor.
    #[must_use]
    pub fn join(
        mut self,
        kind: JoinKind,
        table: impl Into<TableRef>,
        on: impl Into<Cond>,
    ) -> Self {
        self.joins.push(Join {
            kind,
            table: table.into(),
            on: Some(on.into()),
        });
        self
    }

    /// Appends an `INNER JOIN`.
    #[must_use]
    pub fn inner_join(self, table: impl Into<TableRef>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    /// Appends a `LEFT JOIN`.
    #[must_use]
    pub fn left_join(self, table: impl Into<TableRef>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    /// Appends a `RIGHT JOIN`.
    #[must_use]
    pub fn right_join(self, table: impl Into<TableRef>, on: impl Into<Cond>) -> Self {
        self.join(JoinKind::Right, table, on)
    }

    /// Appends a `CROSS JOIN` without an ON part.
    #[must_use]
    pub fn cross_join(mut self, table: impl Into<TableRef>) -> Self {
        self.joins.push(Join {
            kind: JoinKind::Cross,
            table: table.into(),
            on: None,
        });
        self
    }

    /// Replaces the WHERE condition.
    #[must_use]
    pub fn where_clause(mut self, cond: impl Into<Cond>) -> Self {
        self.where_clause.set(cond.into());
        self
    }

    /// ANDs a condition onto the WHERE slot.
    #[must_use]
    pub fn and_where(mut self, cond: impl Into<Cond>) -> Self {
        self.where_clause.and(cond.into());
        self
    }

    /// ORs a condition onto the WHERE slot.
    #[must_use]
    pub fn or_where(mut self, cond: impl Into<Cond>) -> Self {
        self.where_clause.or(cond.into());
        self
    }

    /// Replaces the WHERE condition, dropping its absent parts first.
    #[must_use]
    pub fn filter_where(mut self, cond: impl Into<Cond>) -> Self {
        self.where_clause.filter_set(cond.into());
        self
    }

    /// ANDs a filtered condition onto the WHERE slot.
    #[must_use]
    pub fn and_filter_where(mut self, cond: impl Into<Cond>) -> Self {
        self.where_clause.filter_and(cond.into());
        self
    }

    /// ORs a filtered condition onto the WHERE slot.
    #[must_use]
    pub fn or_filter_where(mut self, cond: impl Into<Cond>) -> Self {
        self.where_clause.filter_or(cond.into());
        self
    }

    /// Sets the LIMIT count; NULL disables it again.
    #[must_use]
    pub fn limit(mut self, count: impl Into<Value>) -> Self {
        self.limit.set(count);
        self
    }

    /// Replaces the leading `DELETE FROM` keyword, e.g. `DELETE FROM ONLY`.
    #[must_use]
    pub fn start(mut self, fragment: impl Into<Value>) -> Self {
        self.start = Some(fragment.into());
        self
    }

    /// Appends a fragment after every other clause, e.g. `RETURNING id`.
    #[must_use]
    pub fn end(mut self, fragment: impl Into<Value>) -> Self {
        self.end = Some(fragment.into());
        self
    }
}
