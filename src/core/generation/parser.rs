//! Model reply parsing
//!
//! A reply can arrive three ways: a JSON object carrying a `sql` key, a
//! fenced ```sql block with prose around it, or plain prose. The first two
//! yield an executable query; plain prose is a conversational answer,
//! which is a legitimate outcome and not an error. The strategies run in
//! that order and the parser itself never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::types::GeneratedQuery;

const MAX_EXPLANATION_CHARS: usize = 500;

/// Greedy on purpose: spans the first `{` to the last `}` so a JSON object
/// wrapped in prose is still caught whole.
static JSON_OBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"(?s)\{.*"sql".*\}"#).unwrap());

static SQL_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```sql\n?(.*?)```").unwrap());

static ANY_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Recover a structured query from raw reply text.
pub fn parse_model_reply(raw: &str) -> GeneratedQuery {
    if let Some(query) = parse_json_object(raw) {
        return query;
    }
    if let Some(query) = parse_fenced_block(raw) {
        return query;
    }
    GeneratedQuery {
        sql: String::new(),
        explanation: truncate_chars(raw.trim(), MAX_EXPLANATION_CHARS),
        params: Vec::new(),
    }
}

fn parse_json_object(raw: &str) -> Option<GeneratedQuery> {
    let candidate = JSON_OBJECT_RE.find(raw)?;
    // Unparseable candidates fall through to the fence strategy.
    let value: Value = serde_json::from_str(candidate.as_str()).ok()?;
    Some(GeneratedQuery {
        sql: value["sql"].as_str().unwrap_or_default().to_string(),
        explanation: value["explanation"].as_str().unwrap_or_default().to_string(),
        params: value["params"].as_array().cloned().unwrap_or_default(),
    })
}

fn parse_fenced_block(raw: &str) -> Option<GeneratedQuery> {
    let captures = SQL_FENCE_RE.captures(raw)?;
    let sql = captures.get(1)?.as_str().trim().to_string();
    let explanation = ANY_FENCE_RE.replace_all(raw, "");
    Some(GeneratedQuery {
        sql,
        explanation: truncate_chars(explanation.trim(), MAX_EXPLANATION_CHARS),
        params: Vec::new(),
    })
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
