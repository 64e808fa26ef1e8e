//! Operator token tables.

use crate::ast::{BinaryOperatorKind, UnaryOperatorKind};
use crate::error::{Result, TranslateError};

/// Returns the SQL token for a binary operator.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedOperator`] for kinds without a token.
pub fn binary_token(kind: BinaryOperatorKind) -> Result<&'static str> {
    let token = match kind {
        BinaryOperatorKind::Or => "OR",
        BinaryOperatorKind::And => "AND",
        BinaryOperatorKind::Equal => "=",
        BinaryOperatorKind::NotEqual => "<>",
        BinaryOperatorKind::GreaterThan => ">",
        BinaryOperatorKind::GreaterThanOrEqual => ">=",
        BinaryOperatorKind::LessThan => "<",
        BinaryOperatorKind::LessThanOrEqual => "<=",
        BinaryOperatorKind::Add => "+",
        BinaryOperatorKind::Subtract => "-",
        BinaryOperatorKind::Multiply => "*",
        BinaryOperatorKind::Divide => "/",
        BinaryOperatorKind::Modulo => "%",
        other => return Err(TranslateError::UnsupportedOperator(format!("{other:?}"))),
    };
    Ok(token)
}

/// Returns the token replacing `kind` when the right operand is a null
/// constant, if `kind` has one.
#[must_use]
pub const fn null_comparison_token(kind: BinaryOperatorKind) -> Option<&'static str> {
    match kind {
        BinaryOperatorKind::Equal => Some("IS"),
        BinaryOperatorKind::NotEqual => Some("IS NOT"),
        _ => None,
    }
}

/// Returns the SQL token for a unary operator.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedOperator`] for kinds without a token.
pub fn unary_token(kind: UnaryOperatorKind) -> Result<&'static str> {
    match kind {
        UnaryOperatorKind::Not => Ok("NOT"),
        other => Err(TranslateError::UnsupportedOperator(format!("{other:?}"))),
    }
}
