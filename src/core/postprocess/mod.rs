//! Result shaping
//!
//! Everything that happens to result rows between the database and the
//! wire: row caps, phone masking and the advisory chart suggestion.

pub mod chart;
pub mod csv;
pub mod mask;

pub use chart::suggest_chart;
pub use csv::rows_to_csv;
pub use mask::{mask_phone, mask_rows};

use serde_json::Value;

/// Row cap for the chat endpoint.
pub const CHAT_ROW_CAP: usize = 1_000;

/// Row cap for direct query execution.
pub const QUERY_ROW_CAP: usize = 5_000;

/// Row cap for CSV export. Results above this are rejected outright since
/// a silently partial file would be misleading.
pub const EXPORT_ROW_CAP: usize = 10_000;

/// A row set after bounding and masking.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRows {
    pub rows: Vec<Value>,
    /// Row count before any truncation.
    pub row_count_total: usize,
    pub truncated: bool,
}

/// Bound a row set to `max_rows` and mask sensitive columns in what remains.
pub fn process(mut rows: Vec<Value>, max_rows: usize) -> ProcessedRows {
    let row_count_total = rows.len();
    let truncated = row_count_total > max_rows;
    if truncated {
        rows.truncate(max_rows);
    }
    mask::mask_rows(&mut rows);
    ProcessedRows {
        rows,
        row_count_total,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_small_result_is_passed_through() {
        let rows = vec![json!({"total": 1}), json!({"total": 2})];
        let processed = process(rows.clone(), 5);
        assert_eq!(processed.rows, rows);
        assert_eq!(processed.row_count_total, 2);
        assert!(!processed.truncated);
    }

    #[test]
    fn test_overflowing_result_is_truncated_with_full_count() {
        let rows: Vec<Value> = (0..7).map(|i| json!({"n": i})).collect();
        let processed = process(rows, 3);
        assert_eq!(processed.rows.len(), 3);
        assert_eq!(processed.rows[2], json!({"n": 2}));
        assert_eq!(processed.row_count_total, 7);
        assert!(processed.truncated);
    }

    #[test]
    fn test_surviving_rows_are_masked() {
        let rows = vec![
            json!({"phone": "5511987654321"}),
            json!({"phone": "5511912340000"}),
        ];
        let processed = process(rows, 1);
        assert_eq!(processed.rows, vec![json!({"phone": "+55 11 9****-4321"})]);
        assert_eq!(processed.row_count_total, 2);
        assert!(processed.truncated);
    }
}
