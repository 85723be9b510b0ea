//! Integration tests for UPDATE assembly: SET lists, the extra FROM
//! table, joins and override slots.

mod common;

use common::*;
use quarry_sql_core::{Cond, Query, Value};

#[test]
fn update_without_set_renders_bare() {
    let expr = build(Query::update().table("user"));
    assert_eq!(expr.sql(), "UPDATE user");
}

#[test]
fn set_list_mixes_bound_raw_and_subquery_values() {
    let last_session = Query::select()
        .select(["MAX(created_at)"])
        .from("session")
        .where_clause(Cond::eq("user_id", 2));

    let query = Query::update()
        .table("\"user\"")
        .set([("name", Value::from("John"))])
        .add_set([("age", Value::raw("18 + 10"))])
        .add_set([("last_session_at", Value::from(last_session))])
        .add_set_expr(Value::raw("status='active'"));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "UPDATE \"user\" SET name = :v1, age = 18 + 10, \
         last_session_at = (SELECT MAX(created_at) FROM session WHERE user_id = :v2), \
         status='active'"
    );
    assert_params(&expr, &[("v1", text("John")), ("v2", int(2))]);
}

#[test]
fn assigning_a_column_again_overwrites_in_place() {
    let query = Query::update()
        .table("user")
        .set([("name", "John"), ("status", "new")])
        .add_set([("name", "Mike")]);

    let expr = build(query);
    assert_eq!(expr.sql(), "UPDATE user SET name = :v1, status = :v2");
    assert_params(&expr, &[("v1", text("Mike")), ("v2", text("new"))]);
}

#[test]
fn false_and_zero_values_still_render() {
    let query = Query::update()
        .table("user")
        .set([("active", Value::from(false)), ("retries", Value::from(0))]);

    let expr = build(query);
    assert_eq!(expr.sql(), "UPDATE user SET active = FALSE, retries = :v1");
    assert_params(&expr, &[("v1", int(0))]);
}

#[test]
fn join_from_renders_between_set_and_where() {
    let query = Query::update()
        .table("user u")
        .set_expr(Value::raw("status = 'active'"))
        .join_from("\"table\" t")
        .where_clause(Cond::raw("t.id = u.id"))
        .and_where(Cond::eq("t.id", 1));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "UPDATE user u SET status = 'active' FROM \"table\" t \
         WHERE (t.id = u.id) AND (t.id = :v1)"
    );
    assert_params(&expr, &[("v1", int(1))]);
}

#[test]
fn joins_and_limit_render_in_clause_order() {
    let query = Query::update()
        .table("user u")
        .set_expr(Value::raw("status = 'active'"))
        .left_join("\"table\" t", Cond::raw("t.id = u.id"))
        .where_clause(Cond::eq("t.id", 1))
        .limit(1);

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "UPDATE user u SET status = 'active' LEFT JOIN \"table\" t ON t.id = u.id \
         WHERE t.id = :v1 LIMIT 1"
    );
}

#[test]
fn start_and_end_override_the_frame() {
    let query = Query::update()
        .table("user")
        .set([("name", "John")])
        .start(Value::raw("UPDATE ONLY"))
        .end(Value::raw("RETURNING id"));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "UPDATE ONLY user SET name = :v1 RETURNING id"
    );
}

#[test]
fn filter_where_on_update_drops_absent_pairs() {
    let query = Query::update()
        .table("user")
        .set([("status", "archived")])
        .filter_where(Cond::equality([
            ("id", Value::from(3)),
            ("name", Value::from("")),
        ]));

    let expr = build(query);
    assert_eq!(expr.sql(), "UPDATE user SET status = :v1 WHERE id = :v2");
    assert_params(&expr, &[("v1", text("archived")), ("v2", int(3))]);
}
