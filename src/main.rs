//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatlens::ChatlensError;
use chatlens::aggregate::{load_archives, merge};
use chatlens::cli::Args;
use chatlens::core::apply_filters;
use chatlens::parser::ArchiveParser;
use chatlens::report::{Report, SourceSummary};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    // Validate everything user-supplied before touching the archives.
    let filter_config = args.filter_config()?;

    let parser = ArchiveParser::with_config(args.archive_config());
    let loaded = load_archives(&parser, &args.inputs);
    let sources: Vec<SourceSummary> = loaded.iter().map(SourceSummary::from).collect();

    let merged = merge(loaded.into_iter().map(|l| l.into_archive()));
    let total = merged.messages.len();
    let messages = apply_filters(merged.messages, &filter_config);
    if filter_config.is_active() {
        info!(before = total, after = messages.len(), "applied filters");
    }

    let report = Report::build(
        sources,
        &merged.participants,
        &messages,
        &args.analysis_config(),
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
