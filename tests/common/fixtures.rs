//! Reply fixtures
//!
//! Builders for the reply shapes the generation providers return, so
//! tests read as intent rather than escaped string literals. The SQL and
//! explanation are interpolated verbatim and must not contain double
//! quotes.

/// A well-formed JSON reply carrying SQL and an explanation.
pub fn sql_reply(sql: &str, explanation: &str) -> String {
    format!(r#"{{"sql": "{sql}", "explanation": "{explanation}"}}"#)
}

/// The same reply wrapped in a markdown code fence, the way chat models
/// often return JSON despite instructions not to.
pub fn fenced_sql_reply(sql: &str, explanation: &str) -> String {
    format!("```json\n{}\n```", sql_reply(sql, explanation))
}
