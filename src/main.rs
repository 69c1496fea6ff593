mod attributes;
mod classify;
mod cli;
mod error;
mod known_failures;
mod report;
mod results;
mod types;

use attributes::AttributeIndex;
use cli::{CliArgs, DetailedFormat, OutputFormat};
use error::ReportError;
use std::io;

fn main() {
    env_logger::init();

    let args = CliArgs::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), ReportError> {
    let mut results = results::load_results(&args.test_results)?;
    let registry = known_failures::load_registry(&args.known_failures)?;
    classify::classify_results(&mut results, &registry);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // The detailed breakdown renders before the primary format, matching
    // the order reports are pasted into review pages.
    if let Some(attr_path) = &args.detailed {
        let attributes = AttributeIndex::load(attr_path).inspect_err(|_| {
            eprintln!("Unable to open detailed results attribute file");
        })?;

        let table = report::build_detailed_table(&results, &attributes, &registry);
        match args.detailed_format {
            DetailedFormat::Console => report::detailed_report_console(&table, &mut out)?,
            DetailedFormat::Wiki => report::detailed_report_wiki(&table, &mut out)?,
        }
    }

    match args.format {
        OutputFormat::Summary => report::summary_report(&results, args.detailed.is_some(), &mut out)?,
        OutputFormat::Csv => report::csv_report(&results, &mut out)?,
    }

    Ok(())
}
