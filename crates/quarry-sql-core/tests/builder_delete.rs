//! Integration tests for DELETE assembly: USING tables, joins, limits
//! and override slots.

mod common;

use common::*;
use quarry_sql_core::{Cond, Query, Value};

#[test]
fn bare_delete_renders_table_only() {
    let expr = build(Query::delete().from("user"));
    assert_eq!(expr.sql(), "DELETE FROM user");
}

#[test]
fn using_renders_after_the_table() {
    let expr = build(Query::delete().from("user").using("\"table\""));
    assert_eq!(expr.sql(), "DELETE FROM user USING \"table\"");
}

#[test]
fn aliased_tables_pass_through_verbatim() {
    let query = Query::delete()
        .from("user u")
        .using("\"table\" t")
        .where_clause(Cond::raw("t.id = u.id"));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "DELETE FROM user u USING \"table\" t WHERE t.id = u.id"
    );
}

#[test]
fn where_and_limit_render_in_clause_order() {
    let query = Query::delete()
        .from("user")
        .where_clause(Cond::eq("id", 7))
        .limit(1);

    let expr = build(query);
    assert_eq!(expr.sql(), "DELETE FROM user WHERE id = :v1 LIMIT 1");
    assert_params(&expr, &[("v1", int(7))]);
}

#[test]
fn joins_render_between_using_and_where() {
    let query = Query::delete()
        .from("user u")
        .left_join("session s", Cond::raw("s.user_id = u.id"))
        .where_clause(Cond::raw("s.expired_at < now()"));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "DELETE FROM user u LEFT JOIN session s ON s.user_id = u.id \
         WHERE s.expired_at < now()"
    );
}

#[test]
fn start_and_end_override_the_frame() {
    let query = Query::delete()
        .from("user")
        .start(Value::raw("DELETE FROM ONLY"))
        .end(Value::raw("RETURNING id"));

    let expr = build(query);
    assert_eq!(expr.sql(), "DELETE FROM ONLY user RETURNING id");
}

#[test]
fn filter_where_on_delete_drops_absent_pairs() {
    let query = Query::delete().from("user").filter_where(Cond::equality([
        ("id", Value::from(5)),
        ("name", Value::Null),
    ]));

    let expr = build(query);
    assert_eq!(expr.sql(), "DELETE FROM user WHERE id = :v1");
}
