//! PostgreSQL UPSERT (`INSERT ... ON CONFLICT`) end fragments.

use quarry_sql_core::{Expression, InsertQuery, Params, Value};

use crate::fragment::chain_end;

/// Conflict action selected for an [`OnConflict`] fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ConflictAction {
    /// `DO NOTHING`: skip the conflicting row.
    Nothing,
    /// `DO UPDATE SET col = excluded.col, ...` for the named columns.
    Update(Vec<String>),
}

/// An `ON CONFLICT` fragment attached to an INSERT through its end slot.
///
/// The fragment compiles to a [`Value::Raw`], so any parameters carried
/// by the optional `WHERE` filter ride into the statement unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct OnConflict {
    target: Vec<String>,
    action: ConflictAction,
    filter: Option<Expression>,
}

impl OnConflict {
    /// Creates a fragment targeting the named conflict columns.
    ///
    /// An empty column list produces a bare `ON CONFLICT`, which
    /// PostgreSQL accepts for `DO NOTHING`. The action defaults to
    /// `DO NOTHING` until [`do_update`](Self::do_update) is called.
    #[must_use]
    pub fn on_columns<C: Into<String>>(columns: impl IntoIterator<Item = C>) -> Self {
        Self {
            target: columns.into_iter().map(Into::into).collect(),
            action: ConflictAction::Nothing,
            filter: None,
        }
    }

    /// Sets the `DO NOTHING` action.
    #[must_use]
    pub fn do_nothing(mut self) -> Self {
        self.action = ConflictAction::Nothing;
        self
    }

    /// Sets `DO UPDATE SET col = excluded.col` for the named columns.
    #[must_use]
    pub fn do_update<C: Into<String>>(mut self, columns: impl IntoIterator<Item = C>) -> Self {
        self.action = ConflictAction::Update(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Guards the `DO UPDATE` action with a `WHERE` filter.
    ///
    /// Parameters already bound into the expression are carried into
    /// the final statement.
    #[must_use]
    pub fn update_where(mut self, filter: impl Into<Expression>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Renders the fragment as a raw value for an INSERT end slot.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut sql = String::from("ON CONFLICT");
        let mut params = Params::new();

        if !self.target.is_empty() {
            sql.push_str(&format!(" ({})", self.target.join(", ")));
        }

        match self.action {
            ConflictAction::Nothing => sql.push_str(" DO NOTHING"),
            ConflictAction::Update(columns) => {
                let assignments: Vec<String> = columns
                    .iter()
                    .map(|col| format!("{col} = excluded.{col}"))
                    .collect();
                sql.push_str(" DO UPDATE SET ");
                sql.push_str(&assignments.join(", "));
                if let Some(filter) = self.filter {
                    let (text, filter_params) = filter.into_parts();
                    sql.push_str(" WHERE ");
                    sql.push_str(&text);
                    params = filter_params;
                }
            }
        }

        Value::Raw(Expression::with_params(sql, params))
    }
}

/// Attaches [`OnConflict`] fragments to INSERT statements.
pub trait UpsertExt: Sized {
    /// Ends the statement with the given `ON CONFLICT` fragment.
    ///
    /// Chains after any raw fragment already in the end slot.
    #[must_use]
    fn on_conflict(self, conflict: OnConflict) -> Self;
}

impl UpsertExt for InsertQuery {
    fn on_conflict(mut self, conflict: OnConflict) -> Self {
        let fragment = chain_end(self.end.take(), conflict.into_value());
        self.end(fragment)
    }
}
