//! Parameter values and the shared parameter sink.
//!
//! Every non-null constant of a filter tree is extracted into a
//! [`ParameterSink`] and replaced by a positional placeholder in the
//! emitted SQL, so no literal ever reaches the statement text.

mod sink;
mod value;

pub use sink::{ParameterSink, PlaceholderStyle};
pub use value::{SqlValue, ToSqlValue};
