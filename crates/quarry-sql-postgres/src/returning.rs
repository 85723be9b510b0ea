//! `RETURNING` clauses for INSERT, UPDATE and DELETE statements.

use quarry_sql_core::{DeleteQuery, Expression, InsertQuery, UpdateQuery, Value};

use crate::fragment::chain_end;

/// A `RETURNING` fragment for a statement end slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Returning {
    columns: Vec<String>,
}

impl Returning {
    /// Returns every column of the affected rows (`RETURNING *`).
    #[must_use]
    pub const fn all() -> Self {
        Self { columns: Vec::new() }
    }

    /// Returns only the named columns.
    #[must_use]
    pub fn columns<C: Into<String>>(columns: impl IntoIterator<Item = C>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Renders the fragment as a raw value for a statement end slot.
    #[must_use]
    pub fn into_value(self) -> Value {
        let sql = if self.columns.is_empty() {
            String::from("RETURNING *")
        } else {
            format!("RETURNING {}", self.columns.join(", "))
        };
        Value::Raw(Expression::new(sql))
    }
}

/// Attaches `RETURNING` clauses to the statements that support them.
///
/// The clause chains after any raw fragment already sitting in the end
/// slot, so it composes with `ON CONFLICT` and friends.
pub trait ReturningExt: Sized {
    /// Ends the statement with `RETURNING` for the named columns.
    #[must_use]
    fn returning<C: Into<String>>(self, columns: impl IntoIterator<Item = C>) -> Self;

    /// Ends the statement with `RETURNING *`.
    #[must_use]
    fn returning_all(self) -> Self;
}

macro_rules! impl_returning_ext {
    ($($query:ty),+ $(,)?) => {$(
        impl ReturningExt for $query {
            fn returning<C: Into<String>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
                let fragment = chain_end(self.end.take(), Returning::columns(columns).into_value());
                self.end(fragment)
            }

            fn returning_all(mut self) -> Self {
                let fragment = chain_end(self.end.take(), Returning::all().into_value());
                self.end(fragment)
            }
        }
    )+};
}

impl_returning_ext!(InsertQuery, UpdateQuery, DeleteQuery);
