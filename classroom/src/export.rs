//! CSV export of evaluation results.

use std::borrow::Cow;

use crate::result::StudentResult;

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

pub const EVALUATION_CSV_FILENAME: &str = "evaluation_results.csv";
pub const EVALUATION_CSV_MIME: &str = "text/csv";

const HEADER: [&str; 6] = ["Student Name", "File Name", "Total Marks", "Scored Marks", "Percentage", "Weak Topics"];

/// Render results as CSV: a header line plus exactly one line per result,
/// joined by `\n` with no trailing newline.
#[must_use]
pub fn evaluation_csv(results: &[StudentResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(HEADER.join(","));
    for result in results {
        let weak_topics = result.weak_topics.join("; ");
        let row = [
            escape(&result.student_name),
            escape(&result.file_name),
            Cow::Owned(result.total_marks.to_string()),
            Cow::Owned(result.scored_marks.to_string()),
            Cow::Owned(format!("{}%", result.percentage)),
            escape(&weak_topics),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Line breaks become spaces so each record stays on one line; fields with a
/// comma or quote are then quoted per RFC 4180.
fn escape(field: &str) -> Cow<'_, str> {
    let field = if field.contains(['\n', '\r']) {
        Cow::Owned(field.replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(field)
    };
    if field.contains([',', '"']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        field
    }
}
