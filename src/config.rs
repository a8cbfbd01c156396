use std::num::NonZeroUsize;
use std::path::PathBuf;

use crate::error::SumError;

pub const DEFAULT_SEPARATOR: &str = ",";

/// Settings for one aggregation run.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<PathBuf>,
    /// 1-based index of the value column.
    pub column: NonZeroUsize,
    pub separator: String,
    /// `None` writes the summary to standard output.
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn new(
        inputs: Vec<PathBuf>,
        column: NonZeroUsize,
        separator: impl Into<String>,
        output: Option<PathBuf>,
    ) -> Result<Self, SumError> {
        let separator = separator.into();
        if separator.is_empty() {
            return Err(SumError::InvalidSeparator);
        }
        // an empty --output means stdout
        let output = output.filter(|path| !path.as_os_str().is_empty());
        Ok(Config {
            inputs,
            column,
            separator,
            output,
        })
    }
}
