// ABOUTME: Serializes a filtered lead subset as spreadsheet-compatible CSV.
// ABOUTME: Header row from the record field order, JSON-encoded fields, newline-joined rows.

use std::fmt::Write;

use serde_json::Value;

use crate::lead::Lead;

/// Render leads as a CSV document.
///
/// The header row lists the record fields in API order. Every field is
/// JSON-encoded: strings are quoted with JSON escaping (so embedded commas,
/// quotes, and newlines stay inside one cell), numbers are bare, and a missing
/// value becomes the quoted empty string. Rows are joined with `\n` and the
/// document carries no trailing newline. Empty input yields an empty string.
pub fn export_csv<'a, I>(leads: I) -> String
where
    I: IntoIterator<Item = &'a Lead>,
{
    let mut rows = leads.into_iter().peekable();
    if rows.peek().is_none() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&Lead::FIELDS.join(","));

    for lead in rows {
        out.push('\n');
        let mut first = true;
        for field in Lead::FIELDS {
            if !first {
                out.push(',');
            }
            first = false;
            write!(out, "{}", encode_field(&lead.field(field))).unwrap();
        }
    }

    out
}

/// Encode one cell. Nulls become `""`; everything else is the value's compact
/// JSON form, except that whole-number floats drop their `.0` suffix.
fn encode_field(value: &Value) -> String {
    match value {
        Value::Null => "\"\"".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 9e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
