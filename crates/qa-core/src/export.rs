//! Delimited-text export of the record set.
//!
//! One header row with the persisted column names, then one row per record in
//! the order given. Quoting follows RFC 4180. An absent value is written as an
//! empty unquoted field and a present empty string as `""`, so `parse_csv`
//! can tell "no answer" apart from "an empty answer".

use chrono::{DateTime, Utc};

use crate::entities::QaRecord;
use crate::errors::CoreError;
use crate::timestamp::{format_timestamp, parse_timestamp};

/// Column names, in persisted order.
pub const CSV_COLUMNS: [&str; 5] = ["id", "question", "answer", "asked_at", "answered_at"];

/// Serialize records to CSV text.
#[must_use]
pub fn to_csv(records: &[QaRecord]) -> String {
    let mut out = CSV_COLUMNS.join(",");
    out.push('\n');
    for record in records {
        let fields = [
            Some(record.id.to_string()),
            Some(record.question.clone()),
            record.answer.clone(),
            Some(format_timestamp(record.asked_at)),
            record.answered_at.map(format_timestamp),
        ];
        let row = fields
            .iter()
            .map(|field| field.as_deref().map_or_else(String::new, escape_field))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&row);
        out.push('\n');
    }
    out
}

/// Parse CSV text produced by [`to_csv`] back into records.
///
/// # Errors
///
/// Returns `CoreError::Validation` on a missing or unexpected header, a row
/// with the wrong number of fields, an unterminated quote, or an unparseable
/// id or timestamp.
pub fn parse_csv(input: &str) -> Result<Vec<QaRecord>, CoreError> {
    let mut rows = split_records(input)?.into_iter();

    let header = rows
        .next()
        .ok_or_else(|| CoreError::Validation("missing CSV header".into()))?;
    let names = header.iter().map(|f| f.text.as_str()).collect::<Vec<_>>();
    if names != CSV_COLUMNS {
        return Err(CoreError::Validation(format!(
            "unexpected CSV header: {}",
            names.join(",")
        )));
    }

    rows.enumerate()
        .map(|(index, row)| parse_row(index + 2, row))
        .collect()
}

/// File name for an export taken at `now`, e.g. `qa_history_20260209_143000.csv`.
#[must_use]
pub fn export_file_name(now: DateTime<Utc>) -> String {
    now.format("qa_history_%Y%m%d_%H%M%S.csv").to_string()
}

fn escape_field(value: &str) -> String {
    let needs_quotes =
        value.is_empty() || value.contains([',', '"', '\n', '\r']);
    if needs_quotes {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[derive(Debug, Default)]
struct Field {
    text: String,
    quoted: bool,
}

impl Field {
    /// `None` for an empty unquoted field, the text otherwise.
    fn into_optional(self) -> Option<String> {
        if self.text.is_empty() && !self.quoted {
            None
        } else {
            Some(self.text)
        }
    }
}

fn parse_row(line: usize, row: Vec<Field>) -> Result<QaRecord, CoreError> {
    let [id, question, answer, asked_at, answered_at]: [Field; 5] =
        row.try_into().map_err(|row: Vec<Field>| {
            CoreError::Validation(format!(
                "CSV row {line}: expected {} fields, found {}",
                CSV_COLUMNS.len(),
                row.len()
            ))
        })?;

    let id = id
        .text
        .parse::<i64>()
        .map_err(|e| CoreError::Validation(format!("CSV row {line}: invalid id '{}': {e}", id.text)))?;

    Ok(QaRecord {
        id,
        question: question.text,
        answer: answer.into_optional(),
        asked_at: parse_timestamp(&asked_at.text)?,
        answered_at: answered_at
            .into_optional()
            .map(|s| parse_timestamp(&s))
            .transpose()?,
    })
}

fn split_records(input: &str) -> Result<Vec<Vec<Field>>, CoreError> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = Field::default();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.text.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.text.push(ch);
            }
            continue;
        }

        match ch {
            '"' if field.text.is_empty() && !field.quoted => {
                in_quotes = true;
                field.quoted = true;
            }
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                push_record(&mut records, std::mem::take(&mut record));
            }
            _ => field.text.push(ch),
        }
    }

    if in_quotes {
        return Err(CoreError::Validation("unterminated quoted CSV field".into()));
    }
    if !record.is_empty() || !field.text.is_empty() || field.quoted {
        record.push(field);
        push_record(&mut records, record);
    }
    Ok(records)
}

// Blank lines carry a single empty unquoted field.
fn push_record(records: &mut Vec<Vec<Field>>, record: Vec<Field>) {
    let blank = record.len() == 1 && record[0].text.is_empty() && !record[0].quoted;
    if !blank {
        records.push(record);
    }
}
