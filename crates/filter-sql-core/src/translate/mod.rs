//! Recursive filter-tree to SQL translation.
//!
//! The translator walks an [`Expr`] tree and writes SQL text into its own
//! buffer. Non-null constants are replaced by placeholders and appended to
//! the [`ParameterSink`] in emission order; property accesses go through the
//! injected [`ColumnResolver`].
//!
//! Every binary expression is wrapped in parentheses, which is the only
//! precedence mechanism: `a eq 1 and b eq 2` becomes
//! `((a = @p0) AND (b = @p1))`. Unary `NOT` is emitted without parentheses.

pub mod functions;
pub mod operators;

use tracing::trace;

use crate::ast::{BinaryOperatorKind, Expr, UnaryOperatorKind};
use crate::error::{Result, TranslateError};
use crate::params::{ParameterSink, SqlValue};
use crate::resolver::ColumnResolver;

use self::functions::is_predicate_call;
use self::operators::{binary_token, null_comparison_token, unary_token};

/// Translates one expression tree into SQL.
///
/// A translator is single-use: [`Translator::translate`] consumes it and
/// returns the emitted text.
pub struct Translator<'a> {
    sink: &'a mut ParameterSink,
    resolver: &'a dyn ColumnResolver,
    sql: String,
    depth: usize,
}

impl<'a> Translator<'a> {
    /// Deepest node nesting accepted before translation is refused.
    pub const MAX_DEPTH: usize = 256;

    /// Creates a translator appending parameters to `sink` and resolving
    /// columns through `resolver`.
    pub fn new(sink: &'a mut ParameterSink, resolver: &'a dyn ColumnResolver) -> Self {
        Self {
            sink,
            resolver,
            sql: String::new(),
            depth: 0,
        }
    }

    /// Translates `expr` and returns the SQL text.
    ///
    /// # Errors
    ///
    /// Fails on the first unsupported node, operator or function, or on the
    /// first property the resolver cannot map. A tree nested deeper than
    /// [`Translator::MAX_DEPTH`] fails with
    /// [`TranslateError::UnsupportedNode`]. Values appended before the
    /// failure stay in the sink.
    pub fn translate(mut self, expr: &Expr) -> Result<String> {
        self.emit(expr)?;
        Ok(self.sql)
    }

    fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn emit(&mut self, node: &Expr) -> Result<()> {
        if self.depth >= Self::MAX_DEPTH {
            return Err(TranslateError::UnsupportedNode(format!(
                "{} nested deeper than {} levels",
                node.kind_name(),
                Self::MAX_DEPTH
            )));
        }
        self.depth += 1;
        let result = self.emit_node(node);
        self.depth -= 1;
        result
    }

    fn emit_node(&mut self, node: &Expr) -> Result<()> {
        trace!(kind = node.kind_name(), depth = self.depth, "emitting node");
        match node {
            Expr::Convert { source, .. } => self.emit(source),
            Expr::Constant(value) => {
                self.emit_constant(value);
                Ok(())
            }
            Expr::BinaryOperator { kind, left, right } => self.emit_binary(*kind, left, right),
            Expr::UnaryOperator { kind, operand } => self.emit_unary(*kind, operand),
            Expr::PropertyAccess(property) => {
                let column = self
                    .resolver
                    .resolve(property)
                    .ok_or_else(|| TranslateError::UnresolvedColumn(property.to_string()))?;
                self.push(&column);
                Ok(())
            }
            Expr::FunctionCall { name, parameters } => self.emit_function(name, parameters),
            other => Err(TranslateError::UnsupportedNode(other.kind_name().to_string())),
        }
    }

    fn emit_constant(&mut self, value: &SqlValue) {
        if value.is_null() {
            self.push("NULL");
        } else {
            let placeholder = self.sink.append_argument(value.clone());
            self.push(&placeholder);
        }
    }

    fn emit_binary(&mut self, kind: BinaryOperatorKind, left: &Expr, right: &Expr) -> Result<()> {
        self.push("(");
        self.emit(left)?;

        // The IS / IS NOT rewrite does not apply when the left side is a
        // LIKE predicate: `contains(a, 'x') eq null` keeps `= NULL`.
        let null_token = if is_predicate_call(left) {
            None
        } else if matches!(right.unwrap_convert(), Expr::Constant(SqlValue::Null)) {
            null_comparison_token(kind)
        } else {
            None
        };
        let token = match null_token {
            Some(token) => token,
            None => binary_token(kind)?,
        };

        self.push(" ");
        self.push(token);
        self.push(" ");
        self.emit(right)?;
        self.push(")");
        Ok(())
    }

    fn emit_unary(&mut self, kind: UnaryOperatorKind, operand: &Expr) -> Result<()> {
        let token = unary_token(kind)?;
        self.push(token);
        self.push(" ");
        self.emit(operand)
    }
}
