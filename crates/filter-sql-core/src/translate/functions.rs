//! Function-call mapping from filter functions to T-SQL.
//!
//! | filter function                     | emitted SQL                   |
//! |-------------------------------------|-------------------------------|
//! | `contains(a, b)`                    | `a LIKE ('%' + b + '%')`      |
//! | `startswith(a, b)`                  | `a LIKE (b + '%')`            |
//! | `endswith(a, b)`                    | `a LIKE ('%' + b)`            |
//! | `indexof(a, b)`                     | `CHARINDEX(b, a)`             |
//! | `trim(a)`                           | `LTRIM(RTRIM(a))`             |
//! | `hour/minute/second(a)`             | `DATEPART(<name>, a)`         |
//! | `date/time(a)`                      | `CAST(a AS <name>)`           |
//! | `totaloffsetminutes(a)`             | `DATEPART(TZoffset, a)`       |
//! | `totalseconds(a)`                   | `DATEDIFF(second, 0, a)`      |
//! | `length/tolower/toupper(a)`         | `LEN(a)`, `LOWER(a)`, `UPPER(a)` |
//! | `now()`                             | `GETUTCDATE()`                |
//! | `substring/concat/year/month/day/round/floor/ceiling(..)` | `NAME(arg0, arg1, ..)` |

use tracing::trace;

use super::Translator;
use crate::ast::Expr;
use crate::error::{Result, TranslateError};

/// Names of the functions that translate to a `LIKE` predicate.
pub const PREDICATE_FUNCTIONS: [&str; 3] = ["contains", "startswith", "endswith"];

/// Returns true if `node` is a call to `contains`, `startswith` or
/// `endswith`. Conversions around the call are not looked through.
#[must_use]
pub fn is_predicate_call(node: &Expr) -> bool {
    matches!(node, Expr::FunctionCall { name, .. } if PREDICATE_FUNCTIONS.contains(&name.as_str()))
}

/// How a supported function is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    /// `a LIKE (<'%' + >b< + '%'>)`.
    Like { leading: bool, trailing: bool },
    /// `CHARINDEX(b, a)`.
    IndexOf,
    /// `LTRIM(RTRIM(a))`.
    Trim,
    /// `DATEPART(<part>, a)`.
    DatePart(&'static str),
    /// `CAST(a AS <type>)`.
    Cast(&'static str),
    /// `DATEDIFF(second, 0, a)`.
    TotalSeconds,
    /// `<FUNC>(a)`.
    Unary(&'static str),
    /// `<FUNC>()`.
    Niladic(&'static str),
    /// Upper-cased name with every argument passed through.
    Passthrough,
}

impl Template {
    const fn arity(self) -> Option<usize> {
        match self {
            Self::Like { .. } | Self::IndexOf => Some(2),
            Self::Trim
            | Self::DatePart(_)
            | Self::Cast(_)
            | Self::TotalSeconds
            | Self::Unary(_) => Some(1),
            Self::Niladic(_) => Some(0),
            Self::Passthrough => None,
        }
    }
}

fn lookup(name: &str) -> Option<Template> {
    let template = match name {
        "contains" => Template::Like {
            leading: true,
            trailing: true,
        },
        "startswith" => Template::Like {
            leading: false,
            trailing: true,
        },
        "endswith" => Template::Like {
            leading: true,
            trailing: false,
        },
        "indexof" => Template::IndexOf,
        "trim" => Template::Trim,
        "hour" => Template::DatePart("hour"),
        "minute" => Template::DatePart("minute"),
        "second" => Template::DatePart("second"),
        "totaloffsetminutes" => Template::DatePart("TZoffset"),
        "date" => Template::Cast("date"),
        "time" => Template::Cast("time"),
        "totalseconds" => Template::TotalSeconds,
        "length" => Template::Unary("LEN"),
        "tolower" => Template::Unary("LOWER"),
        "toupper" => Template::Unary("UPPER"),
        "now" => Template::Niladic("GETUTCDATE"),
        "substring" | "concat" | "year" | "month" | "day" | "round" | "floor" | "ceiling" => {
            Template::Passthrough
        }
        _ => return None,
    };
    Some(template)
}

impl Translator<'_> {
    /// Emits a function call.
    ///
    /// The name and arity are checked before any argument is emitted, so a
    /// rejected call appends nothing to the sink.
    pub(super) fn emit_function(&mut self, name: &str, parameters: &[Expr]) -> Result<()> {
        let unsupported = || TranslateError::UnsupportedFunction {
            name: name.to_string(),
            arity: parameters.len(),
        };
        let template = lookup(name).ok_or_else(unsupported)?;
        if template.arity().is_some_and(|arity| arity != parameters.len()) {
            return Err(unsupported());
        }
        trace!(function = name, ?template, "emitting function call");

        match template {
            Template::Like { leading, trailing } => {
                self.emit(&parameters[0])?;
                self.push(" LIKE (");
                if leading {
                    self.push("'%' + ");
                }
                self.emit(&parameters[1])?;
                if trailing {
                    self.push(" + '%'");
                }
                self.push(")");
            }
            Template::IndexOf => {
                self.push("CHARINDEX(");
                self.emit(&parameters[1])?;
                self.push(", ");
                self.emit(&parameters[0])?;
                self.push(")");
            }
            Template::Trim => {
                self.push("LTRIM(RTRIM(");
                self.emit(&parameters[0])?;
                self.push("))");
            }
            Template::DatePart(part) => {
                self.push("DATEPART(");
                self.push(part);
                self.push(", ");
                self.emit(&parameters[0])?;
                self.push(")");
            }
            Template::Cast(target) => {
                self.push("CAST(");
                self.emit(&parameters[0])?;
                self.push(" AS ");
                self.push(target);
                self.push(")");
            }
            Template::TotalSeconds => {
                self.push("DATEDIFF(second, 0, ");
                self.emit(&parameters[0])?;
                self.push(")");
            }
            Template::Unary(function) => {
                self.push(function);
                self.push("(");
                self.emit(&parameters[0])?;
                self.push(")");
            }
            Template::Niladic(function) => {
                self.push(function);
                self.push("()");
            }
            Template::Passthrough => {
                self.push(&name.to_uppercase());
                self.push("(");
                for (i, parameter) in parameters.iter().enumerate() {
                    if i > 0 {
                        self.push(", ");
                    }
                    self.emit(parameter)?;
                }
                self.push(")");
            }
        }
        Ok(())
    }
}
