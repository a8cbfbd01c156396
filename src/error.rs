use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Problems with a single input line. The line is reported and skipped.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no columns parsed")]
    NoColumns,
    #[error("not enough columns to meet requested column number {column} (line has {fields})")]
    ColumnOutOfRange { column: usize, fields: usize },
    #[error("failed to parse {field:?} as a number: {source}")]
    InvalidNumber {
        field: String,
        source: ParseFloatError,
    },
}

/// Errors raised while running an aggregation.
#[derive(Debug, Error)]
pub enum SumError {
    #[error("could not open file {}", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },
    #[error("failed reading {label}")]
    StreamRead { label: String, source: io::Error },
    #[error("could not open output file {}", path.display())]
    OutputUnavailable { path: PathBuf, source: io::Error },
    #[error("failed writing summary")]
    Write(#[from] io::Error),
    #[error("separator must not be empty")]
    InvalidSeparator,
}
