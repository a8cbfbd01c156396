use std::fs::File;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::slice;

use log::{debug, warn};

use crate::error::SumError;

pub const STDIN_LABEL: &str = "stdin";

/// An opened input stream and the label its diagnostics are reported under.
pub struct Source {
    pub label: Rc<str>,
    pub reader: Box<dyn BufRead>,
}

impl Source {
    pub fn new(label: &str, reader: impl BufRead + 'static) -> Self {
        Source {
            label: Rc::from(label),
            reader: Box::new(reader),
        }
    }

    pub fn stdin() -> Self {
        Source::new(STDIN_LABEL, io::stdin().lock())
    }

    pub fn open(path: &Path) -> Result<Self, SumError> {
        let unavailable = |source| SumError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(unavailable)?;
        let metadata = file.metadata().map_err(unavailable)?;
        if metadata.is_dir() {
            return Err(unavailable(io::Error::new(
                io::ErrorKind::InvalidInput,
                "is a directory",
            )));
        }
        Ok(Source::new(
            &path.display().to_string(),
            io::BufReader::new(file),
        ))
    }
}

/// Yields the sources to read, opening each file only when it is reached.
///
/// With no paths this yields standard input once. Files that are missing or
/// cannot be opened are reported and skipped.
pub struct Sources<'a> {
    stdin: bool,
    paths: slice::Iter<'a, PathBuf>,
}

pub fn resolve(paths: &[PathBuf]) -> Sources<'_> {
    Sources {
        stdin: paths.is_empty(),
        paths: paths.iter(),
    }
}

impl Iterator for Sources<'_> {
    type Item = Source;

    fn next(&mut self) -> Option<Source> {
        if self.stdin {
            self.stdin = false;
            debug!("reading from {}", STDIN_LABEL);
            return Some(Source::stdin());
        }

        for path in self.paths.by_ref() {
            if !path.exists() {
                warn!("{} could not be found... skipping", path.display());
                continue;
            }
            match Source::open(path) {
                Ok(source) => {
                    debug!("opened {}", source.label);
                    return Some(source);
                }
                Err(SumError::SourceUnavailable { path, source }) => {
                    warn!("could not open file {}: {}... skipping", path.display(), source);
                    continue;
                }
                Err(err) => {
                    warn!("{}... skipping", err);
                    continue;
                }
            }
        }
        None
    }
}
