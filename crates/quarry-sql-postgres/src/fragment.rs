//! Shared plumbing for end-slot fragments.

use quarry_sql_core::{Expression, Value};

/// Joins a new raw fragment after whatever already sits in an end slot.
///
/// Two raw fragments merge into one, text joined by a space and both
/// parameter maps carried over. Any other existing shape is replaced.
pub(crate) fn chain_end(existing: Option<Value>, fragment: Value) -> Value {
    match (existing, fragment) {
        (Some(Value::Raw(prev)), Value::Raw(next)) => {
            let (prev_sql, mut params) = prev.into_parts();
            let (next_sql, next_params) = next.into_parts();
            params.extend(next_params);
            Value::Raw(Expression::with_params(
                format!("{prev_sql} {next_sql}"),
                params,
            ))
        }
        (_, fragment) => fragment,
    }
}
