//! Value compilation.

use crate::error::Result;
use crate::expr::{Expression, Params};
use crate::value::{SqlValue, Value};

use super::{merge_into, QueryBuilder};

impl QueryBuilder<'_> {
    /// Compiles one value-position node.
    ///
    /// `bind` decides what happens to scalars: bound scalars turn into
    /// `:vN` placeholders registered in the parameter map, unbound ones
    /// are rendered straight into the text. Lists recurse with the same
    /// flag and wrap in parentheses, raw fragments inline verbatim,
    /// subselects compile in place. NULL and booleans are always
    /// literals, never placeholders.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`](crate::BuildError) when a nested
    /// subselect is malformed or nesting runs past
    /// [`MAX_DEPTH`](super::MAX_DEPTH).
    pub fn build_value(&mut self, value: &Value, bind: bool) -> Result<Expression> {
        self.enter()?;
        let result = self.value_expr(value, bind);
        self.leave();
        result
    }

    fn value_expr(&mut self, value: &Value, bind: bool) -> Result<Expression> {
        match value {
            Value::List(items) => {
                let mut params = Params::new();
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    let expr = self.build_value(item, bind)?;
                    parts.push(merge_into(&mut params, expr));
                }
                Ok(Expression::with_params(
                    format!("({})", parts.join(", ")),
                    params,
                ))
            }
            Value::Raw(expr) => Ok(expr.clone()),
            Value::Subquery(query) => {
                let expr = self.build_select(query)?;
                let (sql, params) = expr.into_parts();
                Ok(Expression::with_params(format!("({sql})"), params))
            }
            Value::Null | Value::Scalar(SqlValue::Null) => Ok(Expression::new("NULL")),
            Value::Bool(b) | Value::Scalar(SqlValue::Bool(b)) => Ok(Expression::new(if *b {
                "TRUE"
            } else {
                "FALSE"
            })),
            Value::Scalar(scalar) => {
                if bind {
                    let name = self.session.next();
                    let mut params = Params::new();
                    params.insert(name.clone(), scalar.clone());
                    Ok(Expression::with_params(format!(":{name}"), params))
                } else {
                    Ok(Expression::new(scalar.render_raw()))
                }
            }
        }
    }
}
