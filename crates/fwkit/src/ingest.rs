//! CSV ingestion for exported policy files.
//!
//! The reader is deliberately lenient: quoted fields may contain
//! delimiters, doubled quotes and line breaks, short rows pad out to the
//! header width, and a UTF-8 BOM is ignored. Only two things are hard
//! errors: a file without a `.csv` extension and a file with no header
//! row at all. A data row wider than the header errors with its line
//! number, since column alignment can no longer be trusted.

use crate::error::{FwkitError, Result};
use crate::table::{Row, Table};
use std::path::Path;

/// Read an exported policy CSV into a table.
pub fn read_policy_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(FwkitError::NotCsv(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut records = parse_records(&content).into_iter();

    let (_, header) = records
        .next()
        .ok_or_else(|| FwkitError::EmptyTable(path.to_path_buf()))?;

    let mut rows = Vec::new();
    for (line, fields) in records {
        if fields.len() > header.len() {
            return Err(FwkitError::Csv {
                line,
                message: format!(
                    "row has {} fields but the header has {}",
                    fields.len(),
                    header.len()
                ),
            });
        }

        let mut row = Row::new();
        for (i, column) in header.iter().enumerate() {
            row.set(column, fields.get(i).map(String::as_str).unwrap_or(""));
        }
        rows.push(row);
    }

    log::info!(
        "parsed {} rules ({} columns) from {}",
        rows.len(),
        header.len(),
        path.display()
    );

    Ok(Table::new(rows))
}

/// Quote a field for CSV output when it contains a delimiter, quote or
/// line break.
pub fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split CSV content into records of fields, tagged with the line number
/// each record starts on. Blank lines are dropped.
fn parse_records(content: &str) -> Vec<(usize, Vec<String>)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut field_started = false;
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut record_line = 1usize;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // A doubled quote is an escaped literal quote.
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if !field_started => {
                in_quotes = true;
                field_started = true;
            }
            '"' => field.push('"'),
            ',' if !in_quotes => {
                record.push(std::mem::take(&mut field));
                field_started = false;
            }
            '\r' if !in_quotes => {}
            '\n' if !in_quotes => {
                line += 1;
                record.push(std::mem::take(&mut field));
                field_started = false;
                flush_record(&mut records, &mut record, record_line);
                record_line = line;
            }
            '\n' => {
                line += 1;
                field.push('\n');
            }
            _ => {
                field.push(c);
                field_started = true;
            }
        }
    }

    if field_started || !field.is_empty() || !record.is_empty() {
        record.push(field);
        flush_record(&mut records, &mut record, record_line);
    }

    records
}

fn flush_record(records: &mut Vec<(usize, Vec<String>)>, record: &mut Vec<String>, line: usize) {
    let fields = std::mem::take(record);
    // A single empty field means the source line had no content at all.
    if fields.len() == 1 && fields[0].is_empty() {
        return;
    }
    records.push((line, fields));
}
