use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use threatsearch_core::catalog::{BUILTIN_QUERIES, QueryCategory, QueryDefinition};
use threatsearch_core::datasource::DataSource;
use threatsearch_core::errors::Result;
use threatsearch_core::run::run_catalog;

#[derive(Parser)]
#[clap(name = "threatsearch")]
struct Arguments {
    /// Path to the ThreatSearch SQLite snapshot.
    #[clap(short, long, default_value = "data/BGCI_Plants_ThreatSearch.db")]
    db: PathBuf,
    /// Only run queries whose name contains this substring.
    #[clap(short, long)]
    filter: Option<String>,
    /// Only run queries in this category.
    #[clap(short, long)]
    category: Option<QueryCategory>,
    /// List catalog entries and exit.
    #[clap(long)]
    list: bool,
    /// Maximum rows to print per result.
    #[clap(long, default_value_t = 20)]
    max_rows: usize,
}

/// Simple binary for running the built-in catalog against a snapshot.
fn main() {
    let args = Arguments::parse();
    logutil::configure_global_logger(tracing::Level::WARN);

    if let Err(err) = inner(args) {
        println!("ERROR: {err}");
        std::process::exit(1);
    }
}

fn inner(args: Arguments) -> Result<()> {
    let mut stdout = BufWriter::new(io::stdout());

    let queries: Vec<QueryDefinition> = BUILTIN_QUERIES
        .iter()
        .filter(|q| {
            args.filter
                .as_deref()
                .is_none_or(|filter| q.name.contains(filter))
        })
        .filter(|q| args.category.is_none_or(|category| q.category == category))
        .copied()
        .collect();

    if args.list {
        for query in &queries {
            writeln!(stdout, "{:<30} {}", query.name, query.category)?;
        }
        stdout.flush()?;
        return Ok(());
    }

    let source = DataSource::open(&args.db)?;
    let outcomes = run_catalog(&source, &queries);

    let mut failures = 0;
    for outcome in &outcomes {
        writeln!(stdout, "-- {} ({})", outcome.name, outcome.category)?;
        match &outcome.result {
            Ok(result) => {
                let table = fmtutil::pretty_format_result(result, None, Some(args.max_rows));
                writeln!(stdout, "{table}")?;
                writeln!(
                    stdout,
                    "({} row{})",
                    result.num_rows(),
                    if result.num_rows() == 1 { "" } else { "s" }
                )?;
            }
            Err(err) => {
                failures += 1;
                writeln!(stdout, "error: {err}")?;
            }
        }
        writeln!(stdout)?;
        stdout.flush()?;
    }

    if failures > 0 {
        writeln!(stdout, "{failures} of {} queries failed", outcomes.len())?;
        stdout.flush()?;
    }

    Ok(())
}
