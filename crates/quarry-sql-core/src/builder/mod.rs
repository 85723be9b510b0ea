//! The statement compiler.
//!
//! [`QueryBuilder`] walks an immutable statement tree and produces one
//! [`Expression`]: the SQL text plus every parameter it binds, in the
//! order the placeholders appear. Parameter names come from a borrowed
//! [`ParamSession`], so statements compiled in one session never reuse
//! a name.

mod cond;
mod delete;
mod insert;
mod select;
mod update;
mod value;

use tracing::debug;

use crate::cond::Cond;
use crate::dialect::Dialect;
use crate::error::{BuildError, Result};
use crate::expr::{Expression, Params};
use crate::query::{Join, LimitClause, OrderItem, Statement, TableRef, TableSource};
use crate::session::ParamSession;
use crate::value::Value;

/// Deepest statement nesting the compiler follows before giving up.
pub const MAX_DEPTH: usize = 64;

/// Compiles statement trees into SQL text plus bound parameters.
///
/// The builder holds no state of its own beyond the dialect tag and the
/// borrowed session, so one instance can compile any number of
/// statements.
#[derive(Debug)]
pub struct QueryBuilder<'s> {
    session: &'s ParamSession,
    dialect: Dialect,
    depth: usize,
}

impl<'s> QueryBuilder<'s> {
    /// Creates a builder for the ANSI dialect.
    #[must_use]
    pub const fn new(session: &'s ParamSession) -> Self {
        Self {
            session,
            dialect: Dialect::Ansi,
            depth: 0,
        }
    }

    /// Creates a builder tagged with a specific dialect.
    #[must_use]
    pub const fn with_dialect(session: &'s ParamSession, dialect: Dialect) -> Self {
        Self {
            session,
            dialect,
            depth: 0,
        }
    }

    /// The dialect this builder carries.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Compiles one statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the tree is malformed: an INSERT
    /// without rows, a VALUES list mixing a subselect with plain rows,
    /// or nesting past [`MAX_DEPTH`].
    pub fn build(&mut self, statement: &Statement) -> Result<Expression> {
        let expr = match statement {
            Statement::Select(query) => self.build_select(query)?,
            Statement::Insert(query) => self.build_insert(query)?,
            Statement::Update(query) => self.build_update(query)?,
            Statement::Delete(query) => self.build_delete(query)?,
        };
        debug!(sql = %expr.sql(), params = expr.params().len(), "built statement");
        Ok(expr)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth == MAX_DEPTH {
            return Err(BuildError::NestingTooDeep { limit: MAX_DEPTH });
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn table_ref(&mut self, table: &TableRef, params: &mut Params) -> Result<String> {
        let rendered = match &table.source {
            TableSource::Named(name) => name.clone(),
            TableSource::Raw(expr) => merge_into(params, expr.clone()),
            TableSource::Subquery(query) => {
                let expr = self.build_select(query)?;
                let (sql, sub_params) = expr.into_parts();
                for (name, value) in sub_params {
                    params.insert(name, value);
                }
                format!("({sql})")
            }
        };
        Ok(match &table.alias {
            Some(alias) => format!("{rendered} AS {alias}"),
            None => rendered,
        })
    }

    fn table_list(&mut self, tables: &[TableRef], params: &mut Params) -> Result<String> {
        let mut parts = Vec::with_capacity(tables.len());
        for table in tables {
            parts.push(self.table_ref(table, params)?);
        }
        Ok(parts.join(", "))
    }

    fn join_list(&mut self, joins: &[Join], params: &mut Params) -> Result<String> {
        let mut parts = Vec::with_capacity(joins.len());
        for join in joins {
            let table = self.table_ref(&join.table, params)?;
            let on = self.clause_cond(join.on.as_ref(), params)?;
            if on.is_empty() {
                parts.push(format!("{} {table}", join.kind.as_str()));
            } else {
                parts.push(format!("{} {table} ON {on}", join.kind.as_str()));
            }
        }
        Ok(parts.join(" "))
    }

    fn clause_cond(&mut self, cond: Option<&Cond>, params: &mut Params) -> Result<String> {
        let expr = self.build_cond(cond)?;
        Ok(merge_into(params, expr))
    }

    fn value_list(&mut self, values: &[Value], params: &mut Params) -> Result<String> {
        let mut parts = Vec::with_capacity(values.len());
        for value in values {
            let expr = self.build_value(value, false)?;
            parts.push(merge_into(params, expr));
        }
        Ok(parts.join(", "))
    }

    fn order_list(&mut self, items: &[OrderItem], params: &mut Params) -> Result<String> {
        let mut parts = Vec::with_capacity(items.len());
        for item in items {
            match item {
                OrderItem::Asc(value) => {
                    let rendered = merge_into(params, self.build_value(value, false)?);
                    parts.push(format!("{rendered} ASC"));
                }
                OrderItem::Desc(value) => {
                    let rendered = merge_into(params, self.build_value(value, false)?);
                    parts.push(format!("{rendered} DESC"));
                }
                OrderItem::Expr(value) => {
                    let rendered = merge_into(params, self.build_value(value, false)?);
                    if !rendered.is_empty() {
                        parts.push(rendered);
                    }
                }
            }
        }
        Ok(parts.join(", "))
    }

    fn limit_sql(&mut self, limit: &LimitClause, params: &mut Params) -> Result<String> {
        match limit.get() {
            Some(value) => {
                let expr = self.build_value(value, false)?;
                Ok(merge_into(params, expr))
            }
            None => Ok(String::new()),
        }
    }

    fn start_keyword(
        &mut self,
        start: Option<&Value>,
        default: &str,
        params: &mut Params,
    ) -> Result<String> {
        match start {
            Some(value) => {
                let rendered = merge_into(params, self.build_value(value, false)?);
                if rendered.is_empty() {
                    Ok(String::from(default))
                } else {
                    Ok(rendered)
                }
            }
            None => Ok(String::from(default)),
        }
    }

    fn end_fragment(&mut self, end: Option<&Value>, params: &mut Params) -> Result<String> {
        match end {
            Some(value) => {
                let expr = self.build_value(value, false)?;
                Ok(merge_into(params, expr))
            }
            None => Ok(String::new()),
        }
    }
}

/// Folds a fragment's parameters into `params` and returns its text.
///
/// A colliding name keeps its position and takes the later value.
fn merge_into(params: &mut Params, expr: Expression) -> String {
    let (sql, fragment_params) = expr.into_parts();
    for (name, value) in fragment_params {
        params.insert(name, value);
    }
    sql
}
