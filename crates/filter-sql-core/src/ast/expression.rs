//! Filter expression tree types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::{SqlValue, ToSqlValue};

/// Binary operator kinds produced by the filter parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum BinaryOperatorKind {
    // Logical
    Or,
    And,

    // Comparison
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    /// Enum flag test (`has`). Parsed, never translated.
    Has,
}

/// Unary operator kinds produced by the filter parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum UnaryOperatorKind {
    /// Logical NOT.
    Not,
    /// Arithmetic negation. Parsed, never translated.
    Negate,
}

/// Lambda operator kinds (`any` / `all`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LambdaKind {
    /// True when at least one element matches.
    Any,
    /// True when every element matches.
    All,
}

/// A reference to a property of the data model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyRef {
    /// Owning entity or navigation source (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Property name.
    pub name: String,
}

impl PropertyRef {
    /// Creates an unqualified property reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            entity: None,
            name: name.into(),
        }
    }

    /// Creates a property reference qualified by its entity.
    #[must_use]
    pub fn qualified(entity: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entity: Some(entity.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(entity) => write!(f, "{entity}/{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A node of a parsed filter expression.
///
/// The tree is owned by whoever parsed it; translation only ever borrows it.
/// `Collection`, `Lambda` and `RangeVariable` are shapes the parser can
/// produce that have no SQL translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Expr {
    /// A type-coercion wrapper with no SQL of its own.
    Convert {
        /// The wrapped expression.
        source: Box<Expr>,
        /// Target type name, informational only.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },

    /// A literal value (`SqlValue::Null` for `null`).
    Constant(SqlValue),

    /// A binary expression.
    BinaryOperator {
        /// Operator.
        kind: BinaryOperatorKind,
        /// Left operand.
        left: Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A unary expression.
    UnaryOperator {
        /// Operator.
        kind: UnaryOperatorKind,
        /// Operand.
        operand: Box<Expr>,
    },

    /// A property of the data model.
    PropertyAccess(PropertyRef),

    /// A function call.
    FunctionCall {
        /// The function name, as written in the filter.
        name: String,
        /// The arguments, in call order.
        #[serde(default)]
        parameters: Vec<Expr>,
    },

    /// A literal list, the right side of `in`.
    Collection(Vec<Expr>),

    /// An `any`/`all` lambda over a collection property.
    Lambda {
        /// `any` or `all`.
        kind: LambdaKind,
        /// The collection being iterated.
        source: Box<Expr>,
        /// Name of the range variable bound to each element.
        variable: String,
        /// Condition evaluated per element.
        predicate: Box<Expr>,
    },

    /// The lambda range variable (`$it` or a named one).
    RangeVariable(String),
}

impl Expr {
    /// Creates a property access.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self::PropertyAccess(PropertyRef::new(name))
    }

    /// Creates a constant.
    #[must_use]
    pub fn constant<T: ToSqlValue>(value: T) -> Self {
        Self::Constant(value.to_sql_value())
    }

    /// Creates a null constant.
    #[must_use]
    pub const fn null() -> Self {
        Self::Constant(SqlValue::Null)
    }

    /// Creates a function call.
    #[must_use]
    pub fn call(name: impl Into<String>, parameters: Vec<Self>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            parameters,
        }
    }

    /// Wraps this expression in a type conversion.
    #[must_use]
    pub fn convert(self, target: impl Into<String>) -> Self {
        Self::Convert {
            source: Box::new(self),
            target: Some(target.into()),
        }
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, kind: BinaryOperatorKind, right: Self) -> Self {
        Self::BinaryOperator {
            kind,
            left: Box::new(self),
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOperatorKind::Equal, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn ne(self, right: Self) -> Self {
        self.binary(BinaryOperatorKind::NotEqual, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOperatorKind::GreaterThan, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOperatorKind::LessThan, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOperatorKind::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOperatorKind::Or, right)
    }

    /// Negates the expression with NOT.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::UnaryOperator {
            kind: UnaryOperatorKind::Not,
            operand: Box::new(self),
        }
    }

    /// Returns the node kind name used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Convert { .. } => "Convert",
            Self::Constant(_) => "Constant",
            Self::BinaryOperator { .. } => "BinaryOperator",
            Self::UnaryOperator { .. } => "UnaryOperator",
            Self::PropertyAccess(_) => "PropertyAccess",
            Self::FunctionCall { .. } => "FunctionCall",
            Self::Collection(_) => "Collection",
            Self::Lambda { .. } => "Lambda",
            Self::RangeVariable(_) => "RangeVariable",
        }
    }

    /// Strips any number of `Convert` wrappers.
    #[must_use]
    pub fn unwrap_convert(&self) -> &Self {
        let mut node = self;
        while let Self::Convert { source, .. } = node {
            node = source;
        }
        node
    }
}
