#![allow(dead_code)]

use filter_sql_core::{
    Expr, ParameterSink, PropertyRef, QueryOptions, SqlValue, TranslateError, WhereClause,
};

/// Builds `WHERE <filter>` with the default resolver and `@pN` placeholders.
pub fn build(filter: Expr) -> (String, Vec<SqlValue>) {
    let options = QueryOptions::new().with_filter(filter);
    let mut sink = ParameterSink::default();
    let sql = WhereClause::new("where", &mut sink, &options)
        .build()
        .unwrap_or_else(|e| panic!("Failed to build clause: {e}"));
    (sql, sink.into_values())
}

/// Like [`build`], but expects a failure and returns it with whatever was
/// appended before the failure.
pub fn build_err(filter: Expr) -> (TranslateError, Vec<SqlValue>) {
    let options = QueryOptions::new().with_filter(filter);
    let mut sink = ParameterSink::default();
    let err = WhereClause::new("where", &mut sink, &options)
        .build()
        .expect_err("Expected translation error");
    (err, sink.into_values())
}

/// Builds the clause and strips the leading `WHERE `.
pub fn filter_sql(filter: Expr) -> String {
    let (sql, _) = build(filter);
    sql.strip_prefix("WHERE ")
        .unwrap_or_else(|| panic!("Missing WHERE keyword: {sql}"))
        .to_string()
}

pub fn prop(name: &str) -> Expr {
    Expr::property(name)
}

pub fn text(value: &str) -> Expr {
    Expr::constant(value)
}

pub fn call(name: &str, parameters: Vec<Expr>) -> Expr {
    Expr::call(name, parameters)
}

pub fn qualified(entity: &str, name: &str) -> Expr {
    Expr::PropertyAccess(PropertyRef::qualified(entity, name))
}
