//! Statement validation
//!
//! The checks here are pattern matching, not a SQL parser. Adversarial
//! input using comments or vendor syntax could in principle hide a keyword
//! from a regex; the database role this gateway connects with is expected
//! to be read-only, so validation is one layer rather than the whole
//! defense. The checks run in a fixed order and stop at the first failure
//! so callers always see the most specific refusal.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::allow_list::is_allowed_table;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static STRING_LITERAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'[^']*'").unwrap());

/// A semicolon followed by anything that is not whitespace means a second
/// statement. A single trailing semicolon is fine.
static MULTI_STATEMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r";\s*\S").unwrap());

static LEADING_CTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*WITH\b").unwrap());

static SYSTEM_FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(pg_read_file|pg_sleep|pg_terminate_backend|lo_import|lo_export|dblink|pg_\w+)\s*\(",
    )
    .unwrap()
});

static WRITE_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(INSERT|UPDATE|DELETE|DROP|ALTER|CREATE|TRUNCATE|GRANT|REVOKE|EXECUTE|COPY)\b",
    )
    .unwrap()
});

static LEADING_SELECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*SELECT\b").unwrap());

/// Captures the identifier immediately after a table-introducing keyword,
/// optionally schema-qualified, optionally quoted. Aliases are not
/// captured; only the base identifier is checked.
static TABLE_REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:FROM|JOIN|INTO|UPDATE|TABLE)\s+("?\w+"?(?:\."?\w+"?)?)"#).unwrap()
});

/// Why a statement was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty query")]
    Empty,
    #[error("multiple statements not allowed")]
    MultipleStatements,
    #[error("CTEs not allowed")]
    CteNotAllowed,
    #[error("system functions not allowed")]
    SystemFunction,
    #[error("only SELECT queries allowed")]
    WriteKeyword,
    #[error("query must start with SELECT")]
    NotSelect,
    #[error("table not allowed: {0}")]
    TableNotAllowed(String),
}

/// Validate one statement against the read-only policy.
///
/// String literals are stripped before the multi-statement, system-function
/// and write-keyword scans so that literal text can neither trigger nor
/// mask a refusal. Table references are extracted from the unstripped text
/// because identifiers never live inside literals.
pub fn validate_sql(sql: &str) -> Result<(), ValidationError> {
    let normalized = normalize(sql);
    if normalized.is_empty() {
        return Err(ValidationError::Empty);
    }

    let stripped = strip_string_literals(&normalized);
    if MULTI_STATEMENT_RE.is_match(&stripped) {
        return Err(ValidationError::MultipleStatements);
    }

    // The table scanner below does not descend into CTE bodies reliably.
    if LEADING_CTE_RE.is_match(&normalized) {
        return Err(ValidationError::CteNotAllowed);
    }

    if SYSTEM_FUNCTION_RE.is_match(&stripped) {
        return Err(ValidationError::SystemFunction);
    }

    if WRITE_KEYWORD_RE.is_match(&stripped) {
        return Err(ValidationError::WriteKeyword);
    }

    if !LEADING_SELECT_RE.is_match(&normalized) {
        return Err(ValidationError::NotSelect);
    }

    for reference in extract_table_references(&normalized) {
        // public.users refers to the table, not the schema.
        let table = reference.rsplit('.').next().unwrap_or(&reference);
        if !is_allowed_table(table) {
            return Err(ValidationError::TableNotAllowed(table.to_string()));
        }
    }

    Ok(())
}

fn normalize(sql: &str) -> String {
    WHITESPACE_RE.replace_all(sql.trim(), " ").into_owned()
}

fn strip_string_literals(sql: &str) -> String {
    STRING_LITERAL_RE.replace_all(sql, "").into_owned()
}

fn extract_table_references(normalized: &str) -> Vec<String> {
    TABLE_REFERENCE_RE
        .captures_iter(normalized)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
