//! Parsed query options handed to the clause builders.

use serde::{Deserialize, Serialize};

use crate::ast::Expr;

/// The parsed options of one query.
///
/// Only the filter is consumed here; an absent filter means the WHERE clause
/// is omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// The parsed `$filter` expression, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Expr>,
}

impl QueryOptions {
    /// Creates options without a filter.
    #[must_use]
    pub const fn new() -> Self {
        Self { filter: None }
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn with_filter(mut self, filter: Expr) -> Self {
        self.filter = Some(filter);
        self
    }
}
