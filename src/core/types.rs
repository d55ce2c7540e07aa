//! Shared domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Role of one turn in the running conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One prior exchange, carried along verbatim as provider context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant<S: Into<String>>(content: S) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Structured output recovered from a raw model reply
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedQuery {
    pub sql: String,
    pub explanation: String,
    pub params: Vec<Value>,
}

impl GeneratedQuery {
    /// A reply with no SQL is a conversational answer, not a query.
    pub fn is_conversational(&self) -> bool {
        self.sql.trim().is_empty()
    }
}
