//! UPDATE statement trees.

use crate::cond::Cond;
use crate::value::Value;

use super::clause::{
    ConditionClause, Join, JoinClause, JoinKind, LimitClause, SetItem, TableClause, TableRef,
};

/// An UPDATE statement under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuery {
    /// Updated table.
    pub tables: TableClause,
    /// SET-list entries.
    pub set: Vec<SetItem>,
    /// Extra FROM tables rendered between SET and the joins.
    pub join_from: TableClause,
    /// Join list.
    pub joins: JoinClause,
    /// WHERE slot.
    pub where_clause: ConditionClause,
    /// LIMIT slot.
    pub limit: LimitClause,
    /// Replacement for the leading `UPDATE` keyword.
    pub start: Option<Value>,
    /// Fragment appended after everything else.
    pub end: Option<Value>,
}

impl UpdateQuery {
    /// Creates an empty UPDATE.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the updated table.
    #[must_use]
    pub fn table(mut self, table: impl Into<TableRef>) -> Self {
        self.tables.set(vec![table.into()]);
        self
    }

    /// Re-aliases the updated table, or the next one to arrive.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.tables.set_alias(alias);
        self
    }

    /// Replaces the SET list with column assignments.
    #[must_use]
    pub fn set<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.set.clear();
        self.add_set(entries)
    }

    /// Merges column assignments into the SET list.
    ///
    /// Assigning a column again overwrites its value in place; the
    /// original position in the list is kept.
    #[must_use]
    pub fn add_set<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (column, value) in entries {
            let column = column.into();
            let value = value.into();
            let existing = self.set.iter().position(
                |item| matches!(item, SetItem::Assign { column: c, .. } if *c == column),
            );
            match existing {
                Some(index) => self.set[index] = SetItem::Assign { column, value },
                None => self.set.push(SetItem::Assign { column, value }),
            }
        }
        self
    }

    /// Replaces the SET list with one raw fragment.
    #[must_use]
    pub fn set_expr(mut self, expr: impl Into<Value>) -> Self {
        self.set.clear();
        self.add_set_expr(expr)
    }

    /// Appends one raw fragment to the SET list.
    ///
    /// Raw entries render as written and never merge with assignments.
    #[must_use]
    pub fn add_set_expr(mut self, expr: impl Into<Value>) -> Self {
        self.set.push(SetItem::Expr(expr.into()));
        self
    }

    /// Sets the extra FROM table rendered after the SET list.
    #[must_use]
    pub fn join_from(mut self, table: impl Into<TableRef>) -> Self {
        self.join_from.set(vec![table.into()]);
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

    /// Replaces the leading `UPDATE` keyword, e.g. `UPDATE ONLY`.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_set_overwrites_in_place() {
        let query = UpdateQuery::new()
            .set([("name", "John"), ("age", "18")])
            .add_set([("name", "Mike")]);

        assert_eq!(query.set.len(), 2);
        let SetItem::Assign { column, value } = &query.set[0] else {
            panic!("expected an assignment");
        };
        assert_eq!(column, "name");
        assert_eq!(*value, Value::from("Mike"));
    }

    #[test]
    fn test_raw_entries_never_merge() {
        let query = UpdateQuery::new()
            .set([("name", "John")])
            .add_set_expr(Value::raw("status = 'active'"))
            .add_set_expr(Value::raw("status = 'active'"));
        assert_eq!(query.set.len(), 3);
    }
}
