//! SELECT statement assembly.

use tracing::trace;

use crate::error::Result;
use crate::expr::{Expression, Params};
use crate::query::{OrderItem, SelectQuery, UnionSource};

use super::{merge_into, QueryBuilder};

impl QueryBuilder<'_> {
    pub(crate) fn build_select(&mut self, query: &SelectQuery) -> Result<Expression> {
        self.enter()?;
        let result = self.select_statement(query);
        self.leave();
        result
    }

    fn select_statement(&mut self, query: &SelectQuery) -> Result<Expression> {
        trace!(depth = self.depth, "assembling SELECT");
        let mut params = Params::new();

        let keyword = self.start_keyword(query.start.as_ref(), "SELECT", &mut params)?;
        let mut sql = format!("{keyword} {}", self.select_list(query, &mut params)?);

        let from = self.table_list(query.tables.tables(), &mut params)?;
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

        let group = self.value_list(&query.group_by, &mut params)?;
        if !group.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&group);
        }

        let having_sql = self.clause_cond(query.having.get(), &mut params)?;
        if !having_sql.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&having_sql);
        }

        // With union branches present, ordering moves behind the last
        // branch and takes the branches' own ORDER BY entries with it.
        let mut hoisted: Vec<OrderItem> = query.order_by.clone();

        if query.unions.is_empty() {
            let order = self.order_list(&hoisted, &mut params)?;
            if !order.is_empty() {
                sql.push_str(" ORDER BY ");
                sql.push_str(&order);
            }
        }

        let limit = self.limit_sql(&query.limit, &mut params)?;
        if !limit.is_empty() {
            sql.push_str(" LIMIT ");
            sql.push_str(&limit);
        }

        let offset = self.limit_sql(&query.offset, &mut params)?;
        if !offset.is_empty() {
            sql.push_str(" OFFSET ");
            sql.push_str(&offset);
        }

        if !query.unions.is_empty() {
            for branch in &query.unions {
                let keyword = if branch.all { "UNION ALL" } else { "UNION" };
                let rendered = match &branch.source {
                    UnionSource::Select(sub) => {
                        hoisted.extend(sub.order_by.iter().cloned());
                        let mut stripped = (**sub).clone();
                        stripped.order_by.clear();
                        merge_into(&mut params, self.build_select(&stripped)?)
                    }
                    UnionSource::Raw(expr) => merge_into(&mut params, expr.clone()),
                };
                sql.push(' ');
                sql.push_str(keyword);
                sql.push(' ');
                sql.push_str(&rendered);
            }

            let order = self.order_list(&hoisted, &mut params)?;
            if !order.is_empty() {
                sql.push_str(" ORDER BY ");
                sql.push_str(&order);
            }
        }

        let end = self.end_fragment(query.end.as_ref(), &mut params)?;
        if !end.is_empty() {
            sql.push(' ');
            sql.push_str(&end);
        }

        Ok(Expression::with_params(sql, params))
    }

    fn select_list(&mut self, query: &SelectQuery, params: &mut Params) -> Result<String> {
        let mut list = String::from("*");
        if !query.select.is_empty() {
            let mut parts = Vec::with_capacity(query.select.len());
            for item in &query.select {
                let rendered = merge_into(params, self.build_value(&item.expr, false)?);
                match &item.alias {
                    Some(alias) => parts.push(format!("{rendered} AS {alias}")),
                    None => parts.push(rendered),
                }
            }
            list = parts.join(", ");
        }
        if query.distinct {
            list = format!("DISTINCT {list}");
        }
        Ok(list)
    }
}
