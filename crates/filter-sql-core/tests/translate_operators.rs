//! Tests for binary and unary operator emission, parenthesization and the
//! null-comparison rewrite.

mod common;
use common::*;

use filter_sql_core::{BinaryOperatorKind, Expr, SqlValue, TranslateError, UnaryOperatorKind};

// ===================================================================
// Literal parameterization
// ===================================================================

#[test]
fn equal_literal_is_parameterized() {
    let (sql, params) = build(prop("Quantity").eq(Expr::constant(5)));
    assert_eq!(sql, "WHERE (Quantity = @p0)");
    assert_eq!(params, vec![SqlValue::Int(5)]);
}

#[test]
fn text_literal_never_reaches_sql() {
    let (sql, params) = build(prop("Name").eq(text("'; DROP TABLE users; --")));
    assert_eq!(sql, "WHERE (Name = @p0)");
    assert_eq!(
        params,
        vec![SqlValue::Text(String::from("'; DROP TABLE users; --"))]
    );
}

#[test]
fn comparison_tokens() {
    let cases = [
        (BinaryOperatorKind::Equal, "="),
        (BinaryOperatorKind::NotEqual, "<>"),
        (BinaryOperatorKind::GreaterThan, ">"),
        (BinaryOperatorKind::GreaterThanOrEqual, ">="),
        (BinaryOperatorKind::LessThan, "<"),
        (BinaryOperatorKind::LessThanOrEqual, "<="),
    ];
    for (kind, token) in cases {
        let sql = filter_sql(prop("Price").binary(kind, Expr::constant(10)));
        assert_eq!(sql, format!("(Price {token} @p0)"), "operator {kind:?}");
    }
}

#[test]
fn arithmetic_is_parenthesized_per_operator() {
    // (Price mul Quantity) sub Discount gt 100
    let expr = prop("Price")
        .binary(BinaryOperatorKind::Multiply, prop("Quantity"))
        .binary(BinaryOperatorKind::Subtract, prop("Discount"))
        .gt(Expr::constant(100));
    assert_eq!(filter_sql(expr), "(((Price * Quantity) - Discount) > @p0)");

    let expr = prop("Id")
        .binary(BinaryOperatorKind::Modulo, Expr::constant(2))
        .eq(Expr::constant(0));
    let (sql, params) = build(expr);
    assert_eq!(sql, "WHERE ((Id % @p0) = @p1)");
    assert_eq!(params, vec![SqlValue::Int(2), SqlValue::Int(0)]);

    let expr = prop("Total")
        .binary(BinaryOperatorKind::Divide, prop("Count"))
        .binary(BinaryOperatorKind::Add, Expr::constant(1.5));
    assert_eq!(filter_sql(expr), "((Total / Count) + @p0)");
}

// ===================================================================
// Parenthesization and parameter order
// ===================================================================

#[test]
fn and_of_comparisons() {
    let (sql, params) = build(
        prop("a")
            .eq(Expr::constant(1))
            .and(prop("b").eq(Expr::constant(2))),
    );
    assert_eq!(sql, "WHERE ((a = @p0) AND (b = @p1))");
    assert_eq!(params, vec![SqlValue::Int(1), SqlValue::Int(2)]);
}

#[test]
fn grouping_follows_tree_not_precedence() {
    // a eq 1 or (b eq 2 and c eq 3)
    let expr = prop("a").eq(Expr::constant(1)).or(prop("b")
        .eq(Expr::constant(2))
        .and(prop("c").eq(Expr::constant(3))));
    let (sql, params) = build(expr);
    assert_eq!(sql, "WHERE ((a = @p0) OR ((b = @p1) AND (c = @p2)))");
    assert_eq!(
        params,
        vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
    );

    // (a eq 1 or b eq 2) and c eq 3
    let expr = prop("a")
        .eq(Expr::constant(1))
        .or(prop("b").eq(Expr::constant(2)))
        .and(prop("c").eq(Expr::constant(3)));
    assert_eq!(filter_sql(expr), "(((a = @p0) OR (b = @p1)) AND (c = @p2))");
}

#[test]
fn constant_on_left_keeps_emission_order() {
    let (sql, params) = build(
        Expr::constant(3)
            .lt(prop("Rank"))
            .and(prop("Rank").lt(Expr::constant(9))),
    );
    assert_eq!(sql, "WHERE ((@p0 < Rank) AND (Rank < @p1))");
    assert_eq!(params, vec![SqlValue::Int(3), SqlValue::Int(9)]);
}

// ===================================================================
// Null rewrite
// ===================================================================

#[test]
fn equal_null_becomes_is_null() {
    let (sql, params) = build(prop("ShippedAt").eq(Expr::null()));
    assert_eq!(sql, "WHERE (ShippedAt IS NULL)");
    assert!(params.is_empty());
}

#[test]
fn not_equal_null_becomes_is_not_null() {
    let (sql, params) = build(prop("ShippedAt").ne(Expr::null()));
    assert_eq!(sql, "WHERE (ShippedAt IS NOT NULL)");
    assert!(params.is_empty());
}

#[test]
fn null_behind_conversions_is_rewritten() {
    let right = Expr::null().convert("Edm.DateTimeOffset").convert("Edm.Object");
    assert_eq!(filter_sql(prop("ShippedAt").eq(right)), "(ShippedAt IS NULL)");
}

#[test]
fn null_with_ordering_operator_is_not_rewritten() {
    assert_eq!(
        filter_sql(prop("Age").binary(BinaryOperatorKind::GreaterThanOrEqual, Expr::null())),
        "(Age >= NULL)"
    );
}

#[test]
fn predicate_function_compared_to_null_keeps_equals() {
    let (sql, params) = build(call("contains", vec![prop("a"), text("x")]).eq(Expr::null()));
    assert_eq!(sql, "WHERE (a LIKE ('%' + @p0 + '%') = NULL)");
    assert_eq!(params, vec![SqlValue::Text(String::from("x"))]);

    assert_eq!(
        filter_sql(call("endswith", vec![prop("a"), text("x")]).ne(Expr::null())),
        "(a LIKE ('%' + @p0) <> NULL)"
    );
}

#[test]
fn converted_predicate_function_gets_null_rewrite() {
    let left = call("contains", vec![prop("a"), text("x")]).convert("Edm.Boolean");
    assert_eq!(
        filter_sql(left.eq(Expr::null())),
        "(a LIKE ('%' + @p0 + '%') IS NULL)"
    );
}

// ===================================================================
// Unary NOT
// ===================================================================

#[test]
fn not_wraps_without_parentheses() {
    assert_eq!(filter_sql(prop("IsDeleted").not()), "NOT IsDeleted");
    assert_eq!(
        filter_sql(prop("Status").eq(text("open")).not()),
        "NOT (Status = @p0)"
    );
}

#[test]
fn not_of_predicate_function() {
    assert_eq!(
        filter_sql(call("startswith", vec![prop("Code"), text("X")]).not()),
        "NOT Code LIKE (@p0 + '%')"
    );
}

#[test]
fn double_not() {
    assert_eq!(filter_sql(prop("Flag").not().not()), "NOT NOT Flag");
}

// ===================================================================
// Rejections
// ===================================================================

#[test]
fn has_operator_is_rejected() {
    let (err, params) = build_err(
        prop("Color")
            .eq(text("red"))
            .and(prop("Flags").binary(BinaryOperatorKind::Has, Expr::constant(4))),
    );
    assert_eq!(err, TranslateError::UnsupportedOperator(String::from("Has")));
    // Everything left of the failing operator was already emitted.
    assert_eq!(params, vec![SqlValue::Text(String::from("red"))]);
}

#[test]
fn negate_is_rejected() {
    let expr = Expr::UnaryOperator {
        kind: UnaryOperatorKind::Negate,
        operand: Box::new(prop("Balance")),
    };
    let (err, params) = build_err(expr.lt(Expr::constant(0)));
    assert_eq!(err, TranslateError::UnsupportedOperator(String::from("Negate")));
    assert!(params.is_empty());
}
