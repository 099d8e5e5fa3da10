//! Minimal delimited-text reader for edge lists
//!
//! The first non-empty line is the header. Fields are trimmed. A field may
//! be wrapped in double quotes, in which case the delimiter is literal
//! inside it and `""` stands for one quote. Quoted fields cannot span
//! lines.

use crate::error::{PipenetError, Result};

/// A data row with its 1-based line number in the source text
#[derive(Debug, Clone, PartialEq)]
pub struct CsvRow {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Parsed header plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

/// Parse delimited text into a header and rows
pub fn parse_records(content: &str, delimiter: char) -> Result<CsvTable> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_line, header) = lines.next().ok_or(PipenetError::EmptyInput)?;
    let headers = split_fields(header, delimiter)
        .map_err(|reason| PipenetError::malformed_row(header_line, reason))?;

    let mut rows = Vec::new();
    for (line, text) in lines {
        let fields =
            split_fields(text, delimiter).map_err(|reason| PipenetError::malformed_row(line, reason))?;
        rows.push(CsvRow { line, fields });
    }

    Ok(CsvTable { headers, rows })
}

/// Split one line into trimmed fields
fn split_fields(line: &str, delimiter: char) -> std::result::Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;
    let mut was_quoted = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else if c == '"' && current.trim().is_empty() && !was_quoted {
            current.clear();
            in_quotes = true;
            was_quoted = true;
        } else if c == delimiter {
            fields.push(finish_field(&current, was_quoted));
            current.clear();
            was_quoted = false;
        } else {
            current.push(c);
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }
    fields.push(finish_field(&current, was_quoted));
    Ok(fields)
}

fn finish_field(raw: &str, quoted: bool) -> String {
    if quoted {
        // Keep inner whitespace of quoted fields; only drop what follows the
        // closing quote
        raw.trim_end().to_string()
    } else {
        raw.trim().to_string()
    }
}
