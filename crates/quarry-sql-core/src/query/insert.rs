//! INSERT statement trees.

use indexmap::IndexMap;

use crate::value::Value;

use super::clause::{TableClause, TableRef};
use super::select::SelectQuery;

/// One row source of the VALUES clause.
#[derive(Debug, Clone, PartialEq)]
pub enum InsertRow {
    /// One column to value row.
    Values(IndexMap<String, Value>),
    /// A subselect supplying every row; cannot be mixed with plain rows.
    Subquery(Box<SelectQuery>),
}

/// An INSERT statement under construction.
///
/// The first plain row fixes the column list; later rows are looked up
/// by those columns, with missing columns filled by `NULL` and surplus
/// keys ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertQuery {
    /// Target table.
    pub tables: TableClause,
    /// Row sources.
    pub rows: Vec<InsertRow>,
    /// Replacement for the leading `INSERT INTO` keyword.
    pub start: Option<Value>,
    /// Fragment appended after everything else.
    pub end: Option<Value>,
}

impl InsertQuery {
    /// Creates an empty INSERT.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target table.
    #[must_use]
    pub fn into_table(mut self, table: impl Into<TableRef>) -> Self {
        self.tables.set(vec![table.into()]);
        self
    }

    /// Re-aliases the target table, or the next one to arrive.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.tables.set_alias(alias);
        self
    }

    /// Appends one row of column and value pairs.
    #[must_use]
    pub fn add_values<K, V>(mut self, row: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.rows.push(InsertRow::Values(
            row.into_iter()
                .map(|(column, value)| (column.into(), value.into()))
                .collect(),
        ));
        self
    }

    /// Appends several rows at once.
    #[must_use]
    pub fn add_multiple_values<R, K, V>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for row in rows {
            self = self.add_values(row);
        }
        self
    }

    /// Uses a subselect as the sole row source.
    #[must_use]
    pub fn from_select(mut self, query: SelectQuery) -> Self {
        self.rows.push(InsertRow::Subquery(Box::new(query)));
        self
    }

    /// Replaces the leading `INSERT INTO` keyword, e.g. `INSERT IGNORE INTO`.
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
    fn test_add_values_keeps_column_order() {
        let query = InsertQuery::new().add_values([("name", "John"), ("surname", "Jonson")]);
        let InsertRow::Values(row) = &query.rows[0] else {
            panic!("expected a value row");
        };
        let columns: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(columns, ["name", "surname"]);
    }

    #[test]
    fn test_add_multiple_values_appends_each() {
        let query = InsertQuery::new()
            .add_multiple_values([[("a", 1)], [("a", 2)]])
            .add_values([("a", 3)]);
        assert_eq!(query.rows.len(), 3);
    }
}
