use std::num::NonZeroUsize;

use crate::error::ParseError;

/// A successfully parsed line: the grouping columns and the value to add.
#[derive(Debug, PartialEq)]
pub struct ParsedLine {
    pub columns: Vec<String>,
    pub value: f64,
}

/// Splits lines on a literal separator and pulls out the value column.
#[derive(Debug, Clone)]
pub struct LineParser {
    column: NonZeroUsize,
    separator: String,
}

impl LineParser {
    /// `separator` must be non-empty; `Config::new` enforces this.
    pub fn new(column: NonZeroUsize, separator: &str) -> Self {
        LineParser {
            column,
            separator: separator.to_owned(),
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn parse(&self, line: &str) -> Result<ParsedLine, ParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::NoColumns);
        }

        let fields: Vec<&str> = line.split(self.separator.as_str()).collect();
        let index = self.column.get() - 1;
        if index >= fields.len() {
            return Err(ParseError::ColumnOutOfRange {
                column: self.column.get(),
                fields: fields.len(),
            });
        }

        let value: f64 = fields[index]
            .parse()
            .map_err(|source| ParseError::InvalidNumber {
                field: fields[index].to_owned(),
                source,
            })?;

        let columns = fields
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, field)| field.to_string())
            .collect();

        Ok(ParsedLine { columns, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(column: usize, separator: &str) -> LineParser {
        LineParser::new(NonZeroUsize::new(column).unwrap(), separator)
    }

    #[test]
    fn test_parse_middle_column() {
        let parsed = parser(2, ",").parse("a,1,10").unwrap();
        assert_eq!(parsed.columns, vec!["a", "10"]);
        assert_eq!(parsed.value, 1.0);
    }

    #[test]
    fn test_parse_custom_separator() {
        let piped = parser(2, "|").parse("x|5|y").unwrap();
        let commas = parser(2, ",").parse("x,5,y").unwrap();
        assert_eq!(piped, commas);
        assert_eq!(piped.columns, vec!["x", "y"]);
        assert_eq!(piped.value, 5.0);
    }

    #[test]
    fn test_parse_multi_char_separator() {
        let parsed = parser(1, "::").parse("2.5::north::east").unwrap();
        assert_eq!(parsed.columns, vec!["north", "east"]);
        assert_eq!(parsed.value, 2.5);
    }

    #[test]
    fn test_parse_trims_line() {
        let parsed = parser(1, ",").parse("  -3.25,b \r\n").unwrap();
        assert_eq!(parsed.columns, vec!["b"]);
        assert_eq!(parsed.value, -3.25);
    }

    #[test]
    fn test_only_value_column() {
        let parsed = parser(1, ",").parse("42").unwrap();
        assert!(parsed.columns.is_empty());
        assert_eq!(parsed.value, 42.0);
    }

    #[test]
    fn test_blank_line() {
        assert!(matches!(
            parser(1, ",").parse("   "),
            Err(ParseError::NoColumns)
        ));
    }

    #[test]
    fn test_column_out_of_range() {
        match parser(4, ",").parse("a,1,10") {
            Err(ParseError::ColumnOutOfRange { column, fields }) => {
                assert_eq!(column, 4);
                assert_eq!(fields, 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_number() {
        match parser(2, ",").parse("a,ten,10") {
            Err(ParseError::InvalidNumber { field, .. }) => assert_eq!(field, "ten"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
