//! UPDATE statement assembly.

use tracing::trace;

use crate::error::Result;
use crate::expr::{Expression, Params};
use crate::query::{SetItem, UpdateQuery};

use super::{merge_into, QueryBuilder};

impl QueryBuilder<'_> {
    pub(crate) fn build_update(&mut self, query: &UpdateQuery) -> Result<Expression> {
        self.enter()?;
        let result = self.update_statement(query);
        self.leave();
        result
    }

    fn update_statement(&mut self, query: &UpdateQuery) -> Result<Expression> {
        trace!(depth = self.depth, "assembling UPDATE");
        let mut params = Params::new();

        let keyword = self.start_keyword(query.start.as_ref(), "UPDATE", &mut params)?;
        let table = self.table_list(query.tables.tables(), &mut params)?;
        let mut sql = format!("{keyword} {table}");

        let set = self.set_list(&query.set, &mut params)?;
        if !set.is_empty() {
            sql.push_str(" SET ");
            sql.push_str(&set);
        }

        let from = self.table_list(query.join_from.tables(), &mut params)?;
        if !from.is_empty() {
            sql.push_str(" FROM ");
            sql.push_str(&from);
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

    fn set_list(&mut self, items: &[SetItem], params: &mut Params) -> Result<String> {
        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                SetItem::Assign { column, value } => {
                    let rendered = merge_into(params, self.build_value(value, true)?);
                    parts.push(format!("{column} = {rendered}"));
                }
                SetItem::Expr(value) => {
                    let rendered = merge_into(params, self.build_value(value, false)?);
                    parts.push(rendered);
                }
            }
        }
        Ok(parts.join(", "))
    }
}
