//! filter-sql CLI
//!
//! Reads parsed query options (JSON) and prints the WHERE clause together
//! with the parameters to bind.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use filter_sql_core::{ColumnMap, ParameterSink, PlaceholderStyle, QueryOptions, WhereClause};

/// Translate a parsed filter expression into a parameterized SQL clause.
#[derive(Parser)]
#[command(name = "filter-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Query options JSON file (stdin when omitted or `-`).
    input: Option<PathBuf>,

    /// Keyword introducing the clause.
    #[arg(short, long, default_value = "where")]
    keyword: String,

    /// Placeholder style for bound parameters.
    #[arg(
        short,
        long,
        value_enum,
        env = "FILTER_SQL_PLACEHOLDER",
        default_value_t = Placeholder::AtP
    )]
    placeholder: Placeholder,

    /// Map a property to a column (`Property=column` or `Entity/Property=column`).
    /// When given, unmapped properties are rejected.
    #[arg(short, long = "column", value_parser = parse_mapping)]
    columns: Vec<(String, String)>,

    /// Also print every parameter as an inline SQL literal.
    #[arg(long)]
    explain: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Placeholder {
    /// `@p0`, `@p1`, ...
    AtP,
    /// `?`
    Question,
    /// `$1`, `$2`, ...
    Dollar,
}

impl From<Placeholder> for PlaceholderStyle {
    fn from(placeholder: Placeholder) -> Self {
        match placeholder {
            Placeholder::AtP => Self::AtP,
            Placeholder::Question => Self::Question,
            Placeholder::Dollar => Self::Dollar,
        }
    }
}

fn parse_mapping(spec: &str) -> Result<(String, String), String> {
    match spec.split_once('=') {
        Some((property, column)) if !property.is_empty() && !column.is_empty() => {
            Ok((property.to_string(), column.to_string()))
        }
        _ => Err(format!("expected PROPERTY=COLUMN, got `{spec}`")),
    }
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Translates the query options in `raw` and returns the text to print:
/// the clause, the parameters as a JSON array and, with `--explain`, one
/// `-- placeholder = literal` line per parameter.
fn run(cli: &Cli, raw: &str) -> anyhow::Result<String> {
    let options: QueryOptions =
        serde_json::from_str(raw).context("input is not valid query options JSON")?;
    debug!(has_filter = options.filter.is_some(), "loaded query options");

    let style = PlaceholderStyle::from(cli.placeholder);
    let mut sink = ParameterSink::new(style);
    let sql = {
        let mut clause = WhereClause::new(cli.keyword.as_str(), &mut sink, &options);
        if !cli.columns.is_empty() {
            let columns: ColumnMap = cli.columns.iter().cloned().collect();
            debug!(mapped = columns.len(), "using explicit column map");
            clause = clause.with_resolver(columns);
        }
        clause.build().context("unsupported query expression")?
    };

    if sql.is_empty() {
        info!("No filter given, clause omitted.");
    }
    let params = sink.into_values();
    let mut output = format!("{sql}\n{}\n", serde_json::to_string(&params)?);

    if cli.explain {
        for (index, value) in params.iter().enumerate() {
            output.push_str(&format!(
                "-- {} = {}\n",
                style.render(index),
                value.to_sql_inline()
            ));
        }
    }
    Ok(output)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let raw = read_input(cli.input.as_ref())?;
    print!("{}", run(&cli, &raw)?);
    Ok(())
}
