//! Statement trees and their fluent setter APIs.

mod clause;
mod delete;
mod insert;
mod select;
mod update;

pub use clause::{
    ConditionClause, Join, JoinClause, JoinKind, LimitClause, OrderItem, SelectItem, SetItem,
    TableClause, TableRef, TableSource, UnionBranch, UnionSource,
};
pub use delete::DeleteQuery;
pub use insert::{InsertQuery, InsertRow};
pub use select::SelectQuery;
pub use update::UpdateQuery;

/// A DML statement of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// SELECT statement.
    Select(SelectQuery),
    /// INSERT statement.
    Insert(InsertQuery),
    /// UPDATE statement.
    Update(UpdateQuery),
    /// DELETE statement.
    Delete(DeleteQuery),
}

impl From<SelectQuery> for Statement {
    fn from(query: SelectQuery) -> Self {
        Self::Select(query)
    }
}

impl From<InsertQuery> for Statement {
    fn from(query: InsertQuery) -> Self {
        Self::Insert(query)
    }
}

impl From<UpdateQuery> for Statement {
    fn from(query: UpdateQuery) -> Self {
        Self::Update(query)
    }
}

impl From<DeleteQuery> for Statement {
    fn from(query: DeleteQuery) -> Self {
        Self::Delete(query)
    }
}

/// Entry points for starting statements.
///
/// Plain shorthand for the `new` constructors, so call sites read as
/// `Query::select().from("user")`.
#[derive(Debug, Clone, Copy)]
pub struct Query;

impl Query {
    /// Starts a SELECT.
    #[must_use]
    pub fn select() -> SelectQuery {
        SelectQuery::new()
    }

    /// Starts an INSERT.
    #[must_use]
    pub fn insert() -> InsertQuery {
        InsertQuery::new()
    }

    /// Starts an UPDATE.
    #[must_use]
    pub fn update() -> UpdateQuery {
        UpdateQuery::new()
    }

    /// Starts a DELETE.
    #[must_use]
    pub fn delete() -> DeleteQuery {
        DeleteQuery::new()
    }
}
