use chrono::{DateTime, Utc};
use qa_core::entities::{QaRecord, RecordStats};
use qa_core::responses::{ExportResponse, MutationResponse};
use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

/// Placeholder for absent values in table cells.
const ABSENT: &str = "-";

/// Types that know their own table layout.
///
/// Column order is fixed per type rather than derived from serde keys.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl Tabular for QaRecord {
    fn headers() -> &'static [&'static str] {
        &["id", "question", "answer", "asked_at", "answered_at"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            single_line(&self.question),
            self.answer.as_deref().map_or_else(|| ABSENT.into(), single_line),
            display_time(self.asked_at),
            self.answered_at.map_or_else(|| ABSENT.into(), display_time),
        ]
    }
}

impl Tabular for RecordStats {
    fn headers() -> &'static [&'static str] {
        &["total", "answered", "unanswered", "latest_asked_at"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.total.to_string(),
            self.answered.to_string(),
            self.unanswered.to_string(),
            self.latest_asked_at.map_or_else(|| ABSENT.into(), display_time),
        ]
    }
}

impl Tabular for MutationResponse {
    fn headers() -> &'static [&'static str] {
        &["id", "outcome"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.outcome.as_str().to_string()]
    }
}

impl Tabular for ExportResponse {
    fn headers() -> &'static [&'static str] {
        &["path", "rows"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.path.clone(), self.rows.to_string()]
    }
}

/// Render a list of values in the requested format.
pub fn render_list<T: Serialize + Tabular>(
    values: &[T],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
        OutputFormat::Raw => Ok(serde_json::to_string(values)?),
        OutputFormat::Table if values.is_empty() => Ok(String::from("(no questions yet)")),
        OutputFormat::Table => {
            let rows = values.iter().map(Tabular::cells).collect::<Vec<_>>();
            Ok(table::render_table(T::headers(), &rows, term_width()))
        }
    }
}

/// Render a single value in the requested format.
pub fn render<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => Ok(table::render_table(
            T::headers(),
            &[value.cells()],
            term_width(),
        )),
    }
}

/// Print a single value in the requested format.
pub fn output<T: Serialize + Tabular>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Print a list of values in the requested format.
pub fn output_list<T: Serialize + Tabular>(
    values: &[T],
    format: OutputFormat,
) -> anyhow::Result<()> {
    println!("{}", render_list(values, format)?);
    Ok(())
}

fn term_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

fn display_time(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
