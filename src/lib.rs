pub mod aggregator;
pub mod config;
pub mod error;
pub mod parser;
pub mod source;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::info;

pub use aggregator::{key_digest, Accumulator, Contribution, GroupRecord, Summary};
pub use config::Config;
pub use error::{ParseError, SumError};
pub use parser::{LineParser, ParsedLine};
pub use source::{resolve, Source};

/// Reads every configured input and returns the ordered summary.
pub fn aggregate(config: &Config) -> Result<Summary, SumError> {
    let parser = LineParser::new(config.column, &config.separator);
    let mut accumulator = Accumulator::new();
    for source in resolve(&config.inputs) {
        accumulator.process(source, &parser)?;
    }
    info!(
        "aggregated {} lines into {} groups ({} skipped)",
        accumulator.lines(),
        accumulator.len(),
        accumulator.skipped()
    );
    Ok(accumulator.into_summary())
}

/// Aggregates the inputs and writes the summary to the configured destination.
pub fn run(config: &Config) -> Result<(), SumError> {
    let summary = aggregate(config)?;

    let mut output: Box<dyn Write> = match &config.output {
        Some(path) => {
            let file = File::create(path).map_err(|source| SumError::OutputUnavailable {
                path: path.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };
    summary.write(&mut output, &config.separator)?;
    Ok(())
}
