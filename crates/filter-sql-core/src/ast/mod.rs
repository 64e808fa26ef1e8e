//! Abstract Syntax Tree (AST) types for parsed filter expressions.

mod expression;

pub use expression::{BinaryOperatorKind, Expr, LambdaKind, PropertyRef, UnaryOperatorKind};
