#![allow(dead_code)]

use quarry_sql_core::{Expression, ParamSession, QueryBuilder, SqlValue, Statement};

/// Compiles a statement with a fresh naming session, so placeholder
/// names always start at `v1`.
pub fn build(statement: impl Into<Statement>) -> Expression {
    let session = ParamSession::new();
    build_with(&session, statement)
}

/// Compiles a statement in an existing session.
pub fn build_with(session: &ParamSession, statement: impl Into<Statement>) -> Expression {
    QueryBuilder::new(session)
        .build(&statement.into())
        .expect("statement should compile")
}

/// The parameter map as an ordered list of pairs.
pub fn params_of(expr: &Expression) -> Vec<(String, SqlValue)> {
    expr.params()
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Shorthand for a text parameter value.
pub fn text(value: &str) -> SqlValue {
    SqlValue::Text(String::from(value))
}

/// Shorthand for an integer parameter value.
pub fn int(value: i64) -> SqlValue {
    SqlValue::Int(value)
}

/// Asserts the parameter names and values, in registration order.
pub fn assert_params(expr: &Expression, expected: &[(&str, SqlValue)]) {
    let actual = params_of(expr);
    let expected: Vec<(String, SqlValue)> = expected
        .iter()
        .map(|(name, value)| (String::from(*name), value.clone()))
        .collect();
    assert_eq!(actual, expected);
}
