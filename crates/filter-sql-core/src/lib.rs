//! # filter-sql-core
//!
//! Translates parsed filter-expression trees into parameterized SQL `WHERE`
//! clauses.
//!
//! This crate provides:
//! - An expression tree ([`Expr`]) as delivered by a filter-language parser
//! - A recursive translator mapping operators and functions to T-SQL
//! - A shared [`ParameterSink`] collecting every literal as a bound parameter
//! - Pluggable column resolution through the [`ColumnResolver`] capability
//!
//! ## Building a clause
//!
//! ```rust
//! use filter_sql_core::{Expr, ParameterSink, QueryOptions, SqlValue, WhereClause};
//!
//! // Name eq null and startswith(City, 'Ber')
//! let filter = Expr::property("Name")
//!     .eq(Expr::null())
//!     .and(Expr::call(
//!         "startswith",
//!         vec![Expr::property("City"), Expr::constant("Ber")],
//!     ));
//! let options = QueryOptions::new().with_filter(filter);
//!
//! let mut params = ParameterSink::default();
//! let sql = WhereClause::new("where", &mut params, &options).build().unwrap();
//!
//! assert_eq!(sql, "WHERE ((Name IS NULL) AND City LIKE (@p0 + '%'))");
//! assert_eq!(params.into_values(), vec![SqlValue::Text("Ber".into())]);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Literals never reach the SQL text. Each non-null constant becomes a
//! placeholder (`@p0`, `?` or `$1` depending on the sink's
//! [`PlaceholderStyle`]) and its value is appended to the sink in emission
//! order, ready to be bound.
//!
//! Unsupported constructs fail with a [`TranslateError`] instead of producing
//! approximate SQL.

pub mod ast;
pub mod clause;
mod error;
pub mod options;
pub mod params;
pub mod resolver;
pub mod translate;

pub use ast::{BinaryOperatorKind, Expr, PropertyRef, UnaryOperatorKind};
pub use clause::WhereClause;
pub use error::{Result, TranslateError};
pub use options::QueryOptions;
pub use params::{ParameterSink, PlaceholderStyle, SqlValue, ToSqlValue};
pub use resolver::{ColumnMap, ColumnResolver, DefaultColumnResolver};
pub use translate::Translator;
