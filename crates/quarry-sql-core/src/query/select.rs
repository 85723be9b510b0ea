//! SELECT statement trees.

use crate::cond::Cond;
use crate::value::Value;

use super::clause::{
    ConditionClause, Join, JoinClause, JoinKind, LimitClause, OrderItem, SelectItem, TableClause,
    TableRef, UnionBranch, UnionSource,
};

/// A SELECT statement under construction.
///
/// Setters consume and return the query, so statements read as one
/// fluent chain. The tree stays inert until a
/// [`QueryBuilder`](crate::QueryBuilder) compiles it; building twice
/// from one tree gives the same text with fresh parameter names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    /// FROM table list.
    pub tables: TableClause,
    /// Join list.
    pub joins: JoinClause,
    /// WHERE slot.
    pub where_clause: ConditionClause,
    /// HAVING slot.
    pub having: ConditionClause,
    /// Select list; empty renders `*`.
    pub select: Vec<SelectItem>,
    /// Prefixes the select list with `DISTINCT`.
    pub distinct: bool,
    /// GROUP BY expressions.
    pub group_by: Vec<Value>,
    /// ORDER BY entries.
    pub order_by: Vec<OrderItem>,
    /// LIMIT slot.
    pub limit: LimitClause,
    /// OFFSET slot.
    pub offset: LimitClause,
    /// Union branches appended after the base statement.
    pub unions: Vec<UnionBranch>,
    /// Replacement for the leading `SELECT` keyword.
    pub start: Option<Value>,
    /// Fragment appended after everything else.
    pub end: Option<Value>,
}

impl SelectQuery {
    /// Creates an empty SELECT.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the select list.
    #[must_use]
    pub fn select<I: Into<SelectItem>>(mut self, items: impl IntoIterator<Item = I>) -> Self {
        self.select = items.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one select-list item.
    #[must_use]
    pub fn add_select(mut self, item: impl Into<SelectItem>) -> Self {
        self.select.push(item.into());
        self
    }

    /// Switches `DISTINCT` on or off.
    #[must_use]
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }

    /// Sets a single FROM table.
    #[must_use]
    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.tables.set(vec![table.into()]);
        self
    }

    /// Sets several FROM tables.
    #[must_use]
    pub fn from_tables<T: Into<TableRef>>(mut self, tables: impl IntoIterator<Item = T>) -> Self {
        self.tables.set(tables.into_iter().map(Into::into).collect());
        self
    }

    /// Re-aliases the first FROM table, or the next one to arrive.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.tables.set_alias(alias);
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

    /// Replaces the GROUP BY list.
    #[must_use]
    pub fn group_by<V: Into<Value>>(mut self, items: impl IntoIterator<Item = V>) -> Self {
        self.group_by = items.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one GROUP BY expression.
    #[must_use]
    pub fn add_group_by(mut self, item: impl Into<Value>) -> Self {
        self.group_by.push(item.into());
        self
    }

    /// Replaces the HAVING condition.
    #[must_use]
    pub fn having(mut self, cond: impl Into<Cond>) -> Self {
        self.having.set(cond.into());
        self
    }

    /// ANDs a condition onto the HAVING slot.
    #[must_use]
    pub fn and_having(mut self, cond: impl Into<Cond>) -> Self {
        self.having.and(cond.into());
        self
    }

    /// ORs a condition onto the HAVING slot.
    #[must_use]
    pub fn or_having(mut self, cond: impl Into<Cond>) -> Self {
        self.having.or(cond.into());
        self
    }

    /// Replaces the HAVING condition, dropping its absent parts first.
    #[must_use]
    pub fn filter_having(mut self, cond: impl Into<Cond>) -> Self {
        self.having.filter_set(cond.into());
        self
    }

    /// ANDs a filtered condition onto the HAVING slot.
    #[must_use]
    pub fn and_filter_having(mut self, cond: impl Into<Cond>) -> Self {
        self.having.filter_and(cond.into());
        self
    }

    /// ORs a filtered condition onto the HAVING slot.
    #[must_use]
    pub fn or_filter_having(mut self, cond: impl Into<Cond>) -> Self {
        self.having.filter_or(cond.into());
        self
    }

    /// Replaces the ORDER BY list.
    #[must_use]
    pub fn order_by<O: Into<OrderItem>>(mut self, items: impl IntoIterator<Item = O>) -> Self {
        self.order_by = items.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one ORDER BY entry.
    #[must_use]
    pub fn add_order_by(mut self, item: impl Into<OrderItem>) -> Self {
        self.order_by.push(item.into());
        self
    }

    /// Sets the LIMIT count; NULL disables it again.
    #[must_use]
    pub fn limit(mut self, count: impl Into<Value>) -> Self {
        self.limit.set(count);
        self
    }

    /// Sets the OFFSET count; NULL disables it again.
    #[must_use]
    pub fn offset(mut self, count: impl Into<Value>) -> Self {
        self.offset.set(count);
        self
    }

    /// Appends a `UNION` branch.
    #[must_use]
    pub fn union(mut self, source: impl Into<UnionSource>) -> Self {
        self.unions.push(UnionBranch {
            source: source.into(),
            all: false,
        });
        self
    }

    /// Appends a `UNION ALL` branch.
    #[must_use]
    pub fn union_all(mut self, source: impl Into<UnionSource>) -> Self {
        self.unions.push(UnionBranch {
            source: source.into(),
            all: true,
        });
        self
    }

    /// Drops every union branch.
    #[must_use]
    pub fn delete_unions(mut self) -> Self {
        self.unions.clear();
        self
    }

    /// Replaces the leading `SELECT` keyword.
    #[must_use]
    pub fn start(mut self, fragment: impl Into<Value>) -> Self {
        self.start = Some(fragment.into());
        self
    }

    /// Appends a fragment after every other clause, e.g. `FOR UPDATE`.
    #[must_use]
    pub fn end(mut self, fragment: impl Into<Value>) -> Self {
        self.end = Some(fragment.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replaces_add_select_appends() {
        let query = SelectQuery::new()
            .select(["id"])
            .select(["name"])
            .add_select("surname");
        let exprs: Vec<&SelectItem> = query.select.iter().collect();
        assert_eq!(exprs.len(), 2);
        assert_eq!(exprs[0].expr, Value::from("name"));
    }

    #[test]
    fn test_union_branches_accumulate() {
        let query = SelectQuery::new()
            .union(SelectQuery::new().from("a"))
            .union_all("SELECT 1");
        assert_eq!(query.unions.len(), 2);
        assert!(!query.unions[0].all);
        assert!(query.unions[1].all);
    }
}
