//! Integration tests for condition compilation: equality maps,
//! compounds, ranges, membership checks and the filter entry points.

mod common;

use common::*;
use quarry_sql_core::{Cond, Expression, Query, Value};

#[test]
fn equality_map_picks_operator_per_value() {
    let subquery = Query::select().select(["id"]).from("user u");
    let query = Query::select().from("user").where_clause(Cond::equality([
        ("id", Value::from(2)),
        ("session_id", Value::from(12)),
        ("user_id", Value::from(vec![22, 32])),
        ("client_id", Value::from(subquery)),
        ("created_at", Value::raw("now()")),
    ]));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE id = :v1 AND session_id = :v2 \
         AND user_id IN (:v3, :v4) AND client_id IN (SELECT id FROM user u) \
         AND created_at = now()"
    );
    assert_params(
        &expr,
        &[("v1", int(2)), ("v2", int(12)), ("v3", int(22)), ("v4", int(32))],
    );
}

#[test]
fn equality_null_and_bool_compare_with_is() {
    let query = Query::select().from("user").where_clause(Cond::equality([
        ("deleted_at", Value::Null),
        ("active", Value::from(true)),
        ("banned", Value::from(false)),
    ]));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE deleted_at IS NULL AND active IS TRUE AND banned IS FALSE"
    );
    assert!(expr.params().is_empty());
}

#[test]
fn empty_list_renders_always_false_predicate() {
    let query = Query::select().from("user").where_clause(Cond::equality([
        ("id", Value::from(2)),
        ("session_id", Value::from(12)),
        ("user_id", Value::List(Vec::new())),
    ]));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE id = :v1 AND session_id = :v2 AND (0=1)"
    );
}

#[test]
fn compound_operands_parenthesize_when_several() {
    let query = Query::select().from("user").where_clause(Cond::or([
        Cond::and([
            Cond::raw("created_at >= now()"),
            Cond::compare(">", "id", 1),
        ]),
        Cond::eq("id", 2),
    ]));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE ((created_at >= now()) AND (id > :v1)) OR (id = :v2)"
    );
    assert_params(&expr, &[("v1", int(1)), ("v2", int(2))]);
}

#[test]
fn single_operand_compound_adds_no_parens() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::and([Cond::eq("id", 2)]));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id = :v1");
}

#[test]
fn not_joins_operands_with_and_then_negates() {
    let query = Query::select().from("user").where_clause(Cond::not([
        Cond::raw("created_at >= now()"),
        Cond::compare(">", "id", 1),
    ]));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE NOT ((created_at >= now()) AND (id > :v1))"
    );
}

#[test]
fn not_with_single_operand_wraps_once() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::not([Cond::eq("id", 1)]));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE NOT (id = :v1)");
}

#[test]
fn compounds_nest_to_any_depth() {
    let query = Query::select().from("user").where_clause(Cond::and([
        Cond::raw("created_at >= now()"),
        Cond::or([
            Cond::compare(">", "id", 1),
            Cond::not([Cond::eq("id", 2)]),
        ]),
    ]));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE (created_at >= now()) \
         AND ((id > :v1) OR (NOT (id = :v2)))"
    );
}

#[test]
fn between_binds_both_bounds() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::between("id", 1, 10));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id BETWEEN :v1 AND :v2");
    assert_params(&expr, &[("v1", int(1)), ("v2", int(10))]);
}

#[test]
fn not_between_renders_raw_lhs() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::not_between("created_at::DATE", "2023-01-01", "2023-02-01"));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE created_at::DATE NOT BETWEEN :v1 AND :v2"
    );
    assert_params(&expr, &[("v1", text("2023-01-01")), ("v2", text("2023-02-01"))]);
}

#[test]
fn between_with_raw_bounds_binds_nothing() {
    let query = Query::select().from("user").where_clause(Cond::between(
        "id",
        Value::raw("'2023-01-01'::DATE"),
        Value::raw("'2023-02-01'::DATE"),
    ));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE id BETWEEN '2023-01-01'::DATE AND '2023-02-01'::DATE"
    );
    assert!(expr.params().is_empty());
}

#[test]
fn in_list_binds_each_item() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::in_list("id", vec![1, 2]));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id IN (:v1, :v2)");
    assert_params(&expr, &[("v1", int(1)), ("v2", int(2))]);
}

#[test]
fn in_list_accepts_subquery_rhs() {
    let subquery = Query::select().select(["id"]).from("user");
    let query = Query::select()
        .from("session")
        .where_clause(Cond::in_list("user_id", subquery));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM session WHERE user_id IN (SELECT id FROM user)"
    );
}

#[test]
fn multi_column_in_reorders_rows_to_columns() {
    let query = Query::select().from("user").where_clause(Cond::in_columns(
        ["id", "name"],
        [
            [("id", Value::from(10)), ("name", Value::from("John"))],
            [("name", Value::from("Mike")), ("id", Value::from(20))],
        ],
    ));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE (id, name) IN ((:v1, :v2), (:v3, :v4))"
    );
    assert_params(
        &expr,
        &[
            ("v1", int(10)),
            ("v2", text("John")),
            ("v3", int(20)),
            ("v4", text("Mike")),
        ],
    );
}

#[test]
fn raw_condition_passes_through_with_params() {
    let cond = Expression::new("id = :id").bind("id", 7);
    let query = Query::select().from("user").where_clause(cond);

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id = :id");
    assert_params(&expr, &[("id", int(7))]);
}

#[test]
fn subquery_condition_is_parenthesized() {
    let exists = Query::select()
        .select(["1"])
        .from("session")
        .where_clause(Cond::raw("session.user_id = user.id"));
    let query = Query::select().from("user").where_clause(exists);

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE (SELECT 1 FROM session WHERE session.user_id = user.id)"
    );
}

#[test]
fn filter_where_drops_absent_pairs() {
    let query = Query::select().from("user").filter_where(Cond::equality([
        ("id", Value::from(2)),
        ("name", Value::from("")),
        ("tags", Value::List(Vec::new())),
        ("note", Value::from("   ")),
        ("deleted_at", Value::Null),
    ]));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id = :v1");
    assert_params(&expr, &[("v1", int(2))]);
}

#[test]
fn filter_where_with_nothing_left_adds_no_clause() {
    let query = Query::select()
        .from("user")
        .filter_where(Cond::equality([("name", Value::from("")), ("age", Value::Null)]));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user");
}

#[test]
fn and_filter_where_keeps_existing_condition() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::eq("id", 2))
        .and_filter_where(Cond::eq("name", Value::Null));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id = :v1");
}

#[test]
fn or_filter_where_wraps_when_condition_survives() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::eq("id", 2))
        .or_filter_where(Cond::eq("name", "John"));

    let expr = build(query);
    assert_eq!(
        expr.sql(),
        "SELECT * FROM user WHERE (id = :v1) OR (name = :v2)"
    );
    assert_params(&expr, &[("v1", int(2)), ("v2", text("John"))]);
}

#[test]
fn filtered_compound_drops_empty_operands_recursively() {
    let query = Query::select().from("user").filter_where(Cond::or([
        Cond::equality([("id", Value::Null)]),
        Cond::equality([("name", Value::from("John"))]),
    ]));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE name = :v1");
}

#[test]
fn unfiltered_null_comparison_renders_null_literal() {
    let query = Query::select()
        .from("user")
        .where_clause(Cond::compare(">", "id", Value::Null));

    let expr = build(query);
    assert_eq!(expr.sql(), "SELECT * FROM user WHERE id > NULL");
}
