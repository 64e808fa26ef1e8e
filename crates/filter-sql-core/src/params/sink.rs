//! The ordered parameter sink shared by every clause of one statement.

use serde::{Deserialize, Serialize};

use super::value::SqlValue;

/// How a positional placeholder is rendered.
///
/// - SQL Server / ADO style uses `@p0`, `@p1`, etc.
/// - ODBC and MySQL use `?`
/// - PostgreSQL uses `$1`, `$2`, etc.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `@p{index}`, zero-based.
    #[default]
    AtP,
    /// A bare `?`.
    Question,
    /// `${index + 1}`.
    Dollar,
}

impl PlaceholderStyle {
    /// Renders the placeholder for the zero-based parameter `index`.
    #[must_use]
    pub fn render(self, index: usize) -> String {
        match self {
            Self::AtP => format!("@p{index}"),
            Self::Question => String::from("?"),
            Self::Dollar => format!("${}", index + 1),
        }
    }
}

/// An append-only list of extracted literal values.
///
/// One sink is created per statement build and lent (`&mut`) to each clause
/// builder in turn, so placeholder indices keep increasing across clauses
/// in the order the clauses are concatenated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSink {
    style: PlaceholderStyle,
    values: Vec<SqlValue>,
}

impl ParameterSink {
    /// Creates an empty sink rendering placeholders in `style`.
    #[must_use]
    pub const fn new(style: PlaceholderStyle) -> Self {
        Self {
            style,
            values: Vec::new(),
        }
    }

    /// Appends `value` and returns its placeholder.
    ///
    /// The placeholder index is the sink length before the append.
    pub fn append_argument(&mut self, value: SqlValue) -> String {
        let placeholder = self.style.render(self.values.len());
        self.values.push(value);
        placeholder
    }

    /// Returns the placeholder style.
    #[must_use]
    pub const fn style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Returns the number of values appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the values in binding order.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Consumes the sink, yielding the values in binding order.
    #[must_use]
    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}
