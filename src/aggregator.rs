use std::collections::HashMap;
use std::hash::BuildHasherDefault;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use log::{debug, warn};
use xxhash_rust::xxh3::{xxh3_128, Xxh3};

use crate::error::SumError;
use crate::parser::LineParser;
use crate::source::Source;

type GroupKey = Vec<String>;
type Groups = HashMap<GroupKey, GroupRecord, BuildHasherDefault<Xxh3>>;

/// One line's addition to a group.
#[derive(PartialEq, Debug, Clone)]
pub struct Contribution {
    pub source: Rc<str>,
    pub value: f64,
}

#[derive(PartialEq, Debug, Clone)]
pub struct GroupRecord {
    columns: Vec<String>,
    total: f64,
    contributions: Vec<Contribution>,
}

impl GroupRecord {
    fn new(columns: Vec<String>) -> Self {
        GroupRecord {
            columns,
            total: 0.0,
            contributions: Vec::new(),
        }
    }

    fn add(&mut self, value: f64, source: Rc<str>) {
        self.total += value;
        self.contributions.push(Contribution { source, value });
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    fn write(&self, output: &mut dyn Write, separator: &str) -> io::Result<()> {
        write!(output, "{}", self.total)?;
        if !self.contributions.is_empty() {
            for column in &self.columns {
                write!(output, "{}{}", separator, column)?;
            }
        }
        output.write_all(b"\n")
    }
}

/// Hex encoded 128-bit digest identifying a group key.
///
/// Columns are length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
pub fn key_digest(columns: &[String]) -> String {
    let mut buf = Vec::new();
    for column in columns {
        buf.extend_from_slice(&(column.len() as u64).to_le_bytes());
        buf.extend_from_slice(column.as_bytes());
    }
    format!("{:032x}", xxh3_128(&buf))
}

/// Running group-by-sum state for one run.
pub struct Accumulator {
    groups: Groups,
    lines: usize,
    skipped: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator {
            groups: Groups::default(),
            lines: 0,
            skipped: 0,
        }
    }

    /// Drains `source` line by line into the accumulator.
    ///
    /// Unparseable lines are reported and skipped, invalid UTF-8 is replaced
    /// with U+FFFD. A read error aborts.
    pub fn process(
        &mut self,
        source: Source,
        parser: &LineParser,
    ) -> Result<&mut Self, SumError> {
        let Source { label, reader } = source;
        let mut line_no = 0;
        for line in reader.split(b'\n') {
            let line = line.map_err(|source| SumError::StreamRead {
                label: label.to_string(),
                source,
            })?;
            let line = String::from_utf8_lossy(&line);
            line_no += 1;
            self.lines += 1;
            match parser.parse(&line) {
                Ok(parsed) => self.add(parsed.columns, parsed.value, &label),
                Err(err) => {
                    self.skipped += 1;
                    warn!("{} on line {} in file {}", err, line_no, label);
                }
            }
        }
        debug!("read {} lines from {}", line_no, label);

        Ok(self)
    }

    pub fn add(&mut self, columns: Vec<String>, value: f64, source: &Rc<str>) {
        let group = self.groups.entry(columns).or_insert_with_key(|columns| {
            debug!("new group {} {:?}", key_digest(columns), columns);
            GroupRecord::new(columns.clone())
        });
        group.add(value, Rc::clone(source));
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, columns: &[String]) -> Option<&GroupRecord> {
        self.groups.get(columns)
    }

    /// Consumes the accumulator into groups ordered by their columns.
    pub fn into_summary(self) -> Summary {
        let mut groups: Vec<_> = self.groups.into_values().collect();
        // full column order; ties on the first column stay reproducible
        groups.sort_unstable_by(|a, b| a.columns.cmp(&b.columns));
        Summary { groups }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Groups in output order.
pub struct Summary {
    groups: Vec<GroupRecord>,
}

impl Summary {
    pub fn write(&self, output: &mut dyn Write, separator: &str) -> io::Result<()> {
        for group in &self.groups {
            group.write(output, separator)?;
        }
        output.flush()
    }
}
