//! CSV export of the visible task collection.

use crate::task::services::TaskRecord;
use chrono::NaiveDate;
use mockable::Clock;

/// Fixed export header row.
pub const CSV_HEADER: &str = "Title,Description,Status,Priority,Assignee,Start Date,End Date,Tags";

/// UTF-8 byte-order mark prepended so spreadsheet tools detect the encoding.
const BOM: &str = "\u{feff}";

/// Renders `records` as a CSV document, one row per task in the given
/// order, preceded by a BOM and the fixed header. Rows are joined with
/// newlines; the document carries no trailing newline. Every data field
/// is double-quoted, with embedded quotes doubled.
#[must_use]
pub fn export_csv(records: &[TaskRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    lines.extend(records.iter().map(render_row));
    format!("{BOM}{}", lines.join("\n"))
}

/// Returns the download file name, stamped with the current UTC date.
#[must_use]
pub fn export_file_name(clock: &dyn Clock) -> String {
    format!("tasks_{}.csv", clock.utc().date_naive().format("%Y-%m-%d"))
}

fn render_row(record: &TaskRecord) -> String {
    let task = &record.task;
    let fields = [
        quoted(task.title()),
        quoted(task.description()),
        quoted(task.status().label()),
        quoted(task.priority().label()),
        quoted(&record.assignee.name),
        quoted(&date_field(task.start_date())),
        quoted(&date_field(task.end_date())),
        quoted(&task.tags().join(", ")),
    ];
    fields.join(",")
}

fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Wraps a field in double quotes, doubling any embedded quotes.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
