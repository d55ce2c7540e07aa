//! CSV rendering
//!
//! RFC 4180 style quoting with headers taken from the first row. Column
//! order relies on the executor preserving select-list order in each row
//! object.

use serde_json::Value;

/// Render a row set as a CSV document. An empty row set renders as an
/// empty string; rows missing a header's key render an empty field.
pub fn rows_to_csv(rows: &[Value]) -> String {
    let Some(first) = rows.first().and_then(Value::as_object) else {
        return String::new();
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let fields: Vec<String> = headers
            .iter()
            .map(|header| escape(&render(row.get(header).unwrap_or(&Value::Null))))
            .collect();
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
