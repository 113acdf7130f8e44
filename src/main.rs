use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use tabcrunch::data::loader;
use tabcrunch::output;
use tabcrunch::query::aggregate::{self, AggregateOutcome};
use tabcrunch::query::filter;

#[derive(Parser, Debug)]
#[command(name = "tabcrunch")]
#[command(version)]
#[command(about = "Filter and aggregate tabular files (CSV, JSON, Parquet)")]
struct Args {
    /// Path to the data file
    #[arg(long, value_name = "PATH")]
    file: PathBuf,

    /// Filter condition, e.g. "price>500" or "brand=xiaomi"
    #[arg(long = "where", value_name = "CONDITION")]
    condition: Option<String>,

    /// Aggregation spec, e.g. "price=avg" (avg, min, max, sum, count)
    #[arg(long, value_name = "SPEC")]
    aggregate: Option<String>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let dataset = loader::load_file(&args.file)?;

    if dataset.is_empty() {
        output::notice("the input file has no rows");
        return Ok(());
    }

    let filtered = filter::apply(&dataset, args.condition.as_deref())?;

    match &args.aggregate {
        Some(spec) => match aggregate::aggregate(&filtered, spec)? {
            AggregateOutcome::Computed(result) => output::print_aggregate(&result),
            AggregateOutcome::NoRows => output::notice("no rows to aggregate"),
            AggregateOutcome::NoNumericData { column } => {
                output::notice(&format!("column '{column}' has no numeric data"))
            }
        },
        None => output::print_rows(&filtered),
    }

    Ok(())
}
