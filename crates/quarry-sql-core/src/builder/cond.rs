//! Condition compilation.

use indexmap::IndexMap;

use crate::cond::{CompoundOp, Cond};
use crate::error::Result;
use crate::expr::{Expression, Params};
use crate::value::{SqlValue, Value};

use super::{merge_into, QueryBuilder};

/// Predicate emitted for an equality pair over an empty list.
const ALWAYS_FALSE: &str = "(0=1)";

impl QueryBuilder<'_> {
    /// Compiles a condition node.
    ///
    /// An absent condition, or one that renders to blank text, produces
    /// an empty fragment; the surrounding clause keyword disappears
    /// with it.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`](crate::BuildError) when a nested
    /// subselect is malformed or nesting runs past
    /// [`MAX_DEPTH`](super::MAX_DEPTH).
    pub fn build_cond(&mut self, cond: Option<&Cond>) -> Result<Expression> {
        let Some(cond) = cond else {
            return Ok(Expression::default());
        };
        self.enter()?;
        let result = self.cond_expr(cond);
        self.leave();
        result
    }

    fn cond_expr(&mut self, cond: &Cond) -> Result<Expression> {
        match cond {
            Cond::Raw(expr) => Ok(expr.clone()),
            Cond::Equality(entries) => self.equality_expr(entries),
            Cond::Compound { op, operands } => self.compound_expr(*op, operands),
            Cond::Compare { op, lhs, rhs } => {
                let mut params = Params::new();
                let left = merge_into(&mut params, self.build_value(lhs, false)?);
                let right = merge_into(&mut params, self.build_value(rhs, true)?);
                Ok(Expression::with_params(format!("{left} {op} {right}"), params))
            }
            Cond::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let mut params = Params::new();
                let target = merge_into(&mut params, self.build_value(expr, false)?);
                let low = merge_into(&mut params, self.build_value(low, true)?);
                let high = merge_into(&mut params, self.build_value(high, true)?);
                let keyword = if *negated { "NOT BETWEEN" } else { "BETWEEN" };
                Ok(Expression::with_params(
                    format!("{target} {keyword} {low} AND {high}"),
                    params,
                ))
            }
            Cond::InList { lhs, rhs, negated } => {
                let mut params = Params::new();
                let left = merge_into(&mut params, self.build_value(lhs, false)?);
                let right = merge_into(&mut params, self.build_value(rhs, true)?);
                let keyword = if *negated { "NOT IN" } else { "IN" };
                Ok(Expression::with_params(
                    format!("{left} {keyword} {right}"),
                    params,
                ))
            }
            Cond::Subquery(query) => {
                let expr = self.build_select(query)?;
                let (sql, params) = expr.into_parts();
                Ok(Expression::with_params(format!("({sql})"), params))
            }
        }
    }

    fn equality_expr(&mut self, entries: &IndexMap<String, Value>) -> Result<Expression> {
        let mut params = Params::new();
        let mut parts = Vec::with_capacity(entries.len());
        for (column, value) in entries {
            if matches!(value, Value::List(items) if items.is_empty()) {
                parts.push(String::from(ALWAYS_FALSE));
                continue;
            }
            let op = equality_operator(value);
            let rendered = merge_into(&mut params, self.build_value(value, true)?);
            parts.push(format!("{column} {op} {rendered}"));
        }
        Ok(Expression::with_params(parts.join(" AND "), params))
    }

    fn compound_expr(&mut self, op: CompoundOp, operands: &[Cond]) -> Result<Expression> {
        let mut params = Params::new();
        let mut parts = Vec::with_capacity(operands.len());
        for operand in operands {
            let expr = self.build_cond(Some(operand))?;
            parts.push(merge_into(&mut params, expr));
        }
        if parts.len() > 1 {
            for part in &mut parts {
                *part = format!("({part})");
            }
        }
        let sql = match op {
            CompoundOp::Not => format!("NOT ({})", parts.join(" AND ")),
            CompoundOp::And => parts.join(" AND "),
            CompoundOp::Or => parts.join(" OR "),
        };
        Ok(Expression::with_params(sql, params))
    }
}

/// Picks the comparison operator for one equality pair.
const fn equality_operator(value: &Value) -> &'static str {
    match value {
        Value::List(_) | Value::Subquery(_) => "IN",
        Value::Null | Value::Bool(_) => "IS",
        Value::Scalar(SqlValue::Null | SqlValue::Bool(_)) => "IS",
        Value::Scalar(_) | Value::Raw(_) => "=",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ParamSession;

    fn compile(cond: &Cond) -> Expression {
        let session = ParamSession::new();
        QueryBuilder::new(&session).build_cond(Some(cond)).unwrap()
    }

    #[test]
    fn test_equality_operator_follows_value() {
        let expr = compile(&Cond::equality([
            ("id", Value::from(2)),
            ("session_id", Value::from(vec![3, 4])),
            ("deleted_at", Value::Null),
            ("active", Value::from(true)),
        ]));
        assert_eq!(
            expr.sql(),
            "id = :v1 AND session_id IN (:v2, :v3) AND deleted_at IS NULL AND active IS TRUE"
        );
    }

    #[test]
    fn test_empty_list_pair_is_always_false() {
        let expr = compile(&Cond::equality([
            ("id", Value::from(1)),
            ("tag", Value::List(Vec::new())),
        ]));
        assert_eq!(expr.sql(), "id = :v1 AND (0=1)");
    }

    #[test]
    fn test_not_wraps_single_operand_without_inner_parens() {
        let expr = compile(&Cond::not([Cond::raw("id = 1")]));
        assert_eq!(expr.sql(), "NOT (id = 1)");
    }

    #[test]
    fn test_not_parenthesizes_multiple_operands() {
        let expr = compile(&Cond::not([Cond::raw("a = 1"), Cond::raw("b = 2")]));
        assert_eq!(expr.sql(), "NOT ((a = 1) AND (b = 2))");
    }

    #[test]
    fn test_single_operand_compound_stays_bare() {
        let expr = compile(&Cond::and([Cond::raw("a = 1")]));
        assert_eq!(expr.sql(), "a = 1");
    }

    #[test]
    fn test_blank_operands_still_render_groups() {
        let expr = compile(&Cond::or([Cond::raw(""), Cond::raw("b = 2")]));
        assert_eq!(expr.sql(), "() OR (b = 2)");
    }
}
