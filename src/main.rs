use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use colsum::{config, Config};

/// Sums one column of delimited text, grouped by the remaining columns.
#[derive(Parser)]
struct Args {
    /// 1-based index of the column to sum.
    #[arg(long, default_value = "1")]
    column: NonZeroUsize,
    /// Text separating the columns, used for both input and output.
    #[arg(long, visible_alias = "separator", default_value = config::DEFAULT_SEPARATOR)]
    seperator: String,
    /// File to write the results into; standard output when empty.
    #[arg(long, default_value = "")]
    output: String,
    /// Input files; standard input is read when none are given.
    files: Vec<PathBuf>,
}

fn run(args: Args) -> Result<()> {
    let output = Some(PathBuf::from(args.output));
    let config = Config::new(args.files, args.column, args.seperator, output)
        .context("invalid arguments")?;
    colsum::run(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("Error: {:#}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
