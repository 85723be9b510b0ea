//! INSERT statement assembly.

use tracing::trace;

use crate::error::{BuildError, Result};
use crate::expr::{Expression, Params};
use crate::query::{InsertQuery, InsertRow};
use crate::value::Value;

use super::{merge_into, QueryBuilder};

impl QueryBuilder<'_> {
    pub(crate) fn build_insert(&mut self, query: &InsertQuery) -> Result<Expression> {
        self.enter()?;
        let result = self.insert_statement(query);
        self.leave();
        result
    }

    fn insert_statement(&mut self, query: &InsertQuery) -> Result<Expression> {
        trace!(depth = self.depth, "assembling INSERT");
        let mut params = Params::new();

        let keyword = self.start_keyword(query.start.as_ref(), "INSERT INTO", &mut params)?;
        let table = self.table_list(query.tables.tables(), &mut params)?;
        let values = self.insert_values(&query.rows, &mut params)?;
        let mut sql = format!("{keyword} {table} {values}");

        let end = self.end_fragment(query.end.as_ref(), &mut params)?;
        if !end.is_empty() {
            sql.push(' ');
            sql.push_str(&end);
        }

        Ok(Expression::with_params(sql, params))
    }

    /// Renders the column list and row groups.
    ///
    /// The first row fixes the column list. Later rows are read per
    /// column: a missing column renders `NULL`, surplus keys are
    /// ignored. A subselect must be the only row source.
    fn insert_values(&mut self, rows: &[InsertRow], params: &mut Params) -> Result<String> {
        if let [InsertRow::Subquery(query)] = rows {
            let expr = self.build_select(query)?;
            let (sql, sub_params) = expr.into_parts();
            for (name, value) in sub_params {
                params.insert(name, value);
            }
            return Ok(format!("({sql})"));
        }

        let Some(InsertRow::Values(first_row)) = rows.first() else {
            return Err(match rows.first() {
                Some(InsertRow::Subquery(_)) => BuildError::MixedInsertSource,
                _ => BuildError::EmptyInsert,
            });
        };

        let columns: Vec<&str> = first_row.keys().map(String::as_str).collect();
        let mut groups = Vec::with_capacity(rows.len());
        for row in rows {
            let InsertRow::Values(row) = row else {
                return Err(BuildError::MixedInsertSource);
            };
            let mut rendered = Vec::with_capacity(columns.len());
            for column in &columns {
                let expr =
                    self.build_value(row.get(*column).unwrap_or(&Value::Null), true)?;
                rendered.push(merge_into(params, expr));
            }
            groups.push(format!("({})", rendered.join(", ")));
        }

        Ok(format!(
            "({}) VALUES {}",
            columns.join(", "),
            groups.join(", ")
        ))
    }
}
