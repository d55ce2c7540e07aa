//! Chart suggestion
//!
//! A shape heuristic over the first row, nothing more. The suggestion is
//! advisory; callers are free to ignore it.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static LEADING_DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}").unwrap());

/// Suggest a chart type for a row set.
///
/// Two-column results map to "line" (date plus number) or "bar" (label plus
/// number); a lone row with up to three columns is a "kpi"; everything else
/// including single-column results renders best as a "table".
pub fn suggest_chart(rows: &[Value]) -> &'static str {
    let Some(first) = rows.first().and_then(Value::as_object) else {
        return "table";
    };
    let columns: Vec<&Value> = first.values().collect();
    if columns.len() == 1 {
        return "table";
    }

    if columns.len() == 2 {
        let first_is_date = columns[0].as_str().is_some_and(|s| LEADING_DATE_RE.is_match(s));
        let second_is_numeric = is_numeric(columns[1]);
        if first_is_date && second_is_numeric {
            return "line";
        }
        if columns[0].is_string() && second_is_numeric {
            return "bar";
        }
    }

    if rows.len() == 1 && columns.len() <= 3 {
        return "kpi";
    }
    "table"
}

/// Numbers count, as do strings the database rendered from numeric columns.
fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(text) => text.parse::<f64>().is_ok(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_result_is_a_table() {
        assert_eq!(suggest_chart(&[]), "table");
    }

    #[test]
    fn test_single_column_is_a_table_even_with_one_row() {
        let rows = vec![json!({"total": 42})];
        assert_eq!(suggest_chart(&rows), "table");
    }

    #[test]
    fn test_date_and_number_is_a_line() {
        let rows = vec![json!({"date": "2024-01-01", "total": 5})];
        assert_eq!(suggest_chart(&rows), "line");
    }

    #[test]
    fn test_timestamp_strings_count_as_dates() {
        let rows = vec![
            json!({"dia": "2025-11-06T00:00:00Z", "mensagens": "312"}),
            json!({"dia": "2025-11-07T00:00:00Z", "mensagens": "287"}),
        ];
        assert_eq!(suggest_chart(&rows), "line");
    }

    #[test]
    fn test_label_and_number_is_a_bar() {
        let rows = vec![json!({"categoria": "x", "total": 5})];
        assert_eq!(suggest_chart(&rows), "bar");
    }

    #[test]
    fn test_single_row_of_aggregates_is_a_kpi() {
        let rows = vec![json!({"avg_csat": 4.2, "total_reviews": 128})];
        assert_eq!(suggest_chart(&rows), "kpi");
    }

    #[test]
    fn test_null_second_column_is_not_numeric() {
        let rows = vec![
            json!({"categoria": "x", "total": null}),
            json!({"categoria": "y", "total": null}),
        ];
        assert_eq!(suggest_chart(&rows), "table");
    }

    #[test]
    fn test_wide_or_tall_results_fall_back_to_table() {
        let tall = vec![
            json!({"a": 1, "b": 2, "c": 3}),
            json!({"a": 4, "b": 5, "c": 6}),
        ];
        assert_eq!(suggest_chart(&tall), "table");
        let wide = vec![json!({"a": 1, "b": 2, "c": 3, "d": 4})];
        assert_eq!(suggest_chart(&wide), "table");
    }
}
