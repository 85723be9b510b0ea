//! DELETE statement assembly.

use tracing::trace;

use crate::error::Result;
use crate::expr::{Expression, Params};
use crate::query::DeleteQuery;

use super::QueryBuilder;

impl QueryBuilder<'_> {
    pub(crate) fn build_delete(&mut self, query: &DeleteQuery) -> Result<Expression> {
        self.enter()?;
        let result = self.delete_statement(query);
        self.leave();
        result
    }

    fn delete_statement(&mut self, query: &DeleteQuery) -> Result<Expression> {
        trace!(depth = self.depth, "assembling DELETE");
        let mut params = Params::new();

        let keyword = self.start_keyword(query.start.as_ref(), "DELETE FROM", &mut params)?;
        let table = self.table_list(query.tables.tables(), &mut params)?;
        let mut sql = format!("{keyword} {table}");

        let using = self.table_list(query.using.tables(), &mut params)?;
        if !using.is_empty() {
            sql.push_str(" USING ");
            sql.push_str(&using);
        }

        let joins = self.join_list(query.joins.joins(), &mut params)?;
        if !joins.is_empty() {
            sql.push(' ');
            sql.push_str(&joins);
        }

        let where_sql = self.clause_cond(query.where_clause.get(), &mut params)?;
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        let limit = self.limit_sql(&query.limit, &mut params)?;
        if !limit.is_empty() {
            sql.push_str(" LIMIT ");
            sql.push_str(&limit);
        }

        let end = self.end_fragment(query.end.as_ref(), &mut params)?;
        if !end.is_empty() {
            sql.push(' ');
            sql.push_str(&end);
        }

        Ok(Expression::with_params(sql, params))
    }
}
