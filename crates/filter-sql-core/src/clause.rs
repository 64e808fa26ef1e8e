//! WHERE clause builder.
//!
//! # Example
//!
//! ```rust
//! use filter_sql_core::{Expr, ParameterSink, QueryOptions, SqlValue, WhereClause};
//!
//! let options = QueryOptions::new().with_filter(
//!     Expr::property("Price").gt(Expr::constant(10)),
//! );
//! let mut params = ParameterSink::default();
//! let sql = WhereClause::new("where", &mut params, &options).build().unwrap();
//!
//! assert_eq!(sql, "WHERE (Price > @p0)");
//! assert_eq!(params.values(), &[SqlValue::Int(10)]);
//! ```

use tracing::{debug, warn};

use crate::error::Result;
use crate::options::QueryOptions;
use crate::params::ParameterSink;
use crate::resolver::{ColumnResolver, DefaultColumnResolver};
use crate::translate::Translator;

/// Builds the filter clause of one statement.
///
/// The parameter sink is borrowed mutably for the builder's lifetime; other
/// clause builders of the same statement take it in turn afterwards so that
/// placeholder numbering continues where this clause stopped.
pub struct WhereClause<'a> {
    keyword: String,
    sink: &'a mut ParameterSink,
    options: &'a QueryOptions,
    resolver: Option<Box<dyn ColumnResolver + 'a>>,
}

impl<'a> WhereClause<'a> {
    /// Creates a clause builder introduced by `keyword` (e.g. `"where"`).
    pub fn new(
        keyword: impl Into<String>,
        sink: &'a mut ParameterSink,
        options: &'a QueryOptions,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            sink,
            options,
            resolver: None,
        }
    }

    /// Replaces the [`DefaultColumnResolver`].
    #[must_use]
    pub fn with_resolver(mut self, resolver: impl ColumnResolver + 'a) -> Self {
        self.resolver = Some(Box::new(resolver));
        self
    }

    /// Builds the clause text.
    ///
    /// Returns an empty string, appending nothing, when the options carry no
    /// filter. Otherwise returns the upper-cased keyword, a space and the
    /// translated filter. Every call appends the filter's values again, so
    /// call it once per sink.
    ///
    /// # Errors
    ///
    /// Propagates the first [`TranslateError`](crate::TranslateError) raised
    /// by the translator; the clause must then be discarded.
    pub fn build(&mut self) -> Result<String> {
        let Some(filter) = &self.options.filter else {
            debug!(keyword = %self.keyword, "no filter, omitting clause");
            return Ok(String::new());
        };

        let resolver: &dyn ColumnResolver = match &self.resolver {
            Some(resolver) => resolver.as_ref(),
            None => &DefaultColumnResolver,
        };
        let first_param = self.sink.len();
        let body = Translator::new(self.sink, resolver)
            .translate(filter)
            .inspect_err(|err| {
                warn!(keyword = %self.keyword, error = %err, "failed to translate filter");
            })?;

        let sql = format!("{} {body}", self.keyword.to_uppercase());
        debug!(
            sql = %sql,
            params = self.sink.len() - first_param,
            "built filter clause"
        );
        Ok(sql)
    }
}
