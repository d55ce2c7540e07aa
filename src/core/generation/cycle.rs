//! Generation-validation cycle
//!
//! Drives the orchestrator against the validator: generate, validate, and
//! on refusal re-prompt once with the refusal quoted so the model can
//! correct itself. The loop is bounded and every exit is explicit.

use tracing::warn;

use super::orchestrator::GenerationOrchestrator;
use crate::core::types::{ChatTurn, GeneratedQuery};
use crate::core::validator::{ValidationError, validate_sql};
use crate::utils::error::Result;

/// Generation attempts per request, counting the first one.
pub const MAX_ATTEMPTS: u32 = 2;

/// Where one pass through the cycle ended up
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// Valid SQL, ready to execute
    Valid(GeneratedQuery),
    /// The model answered in prose; there is nothing to execute
    Conversational(GeneratedQuery),
    /// Every attempt produced SQL the validator refused
    ExhaustedInvalid {
        query: GeneratedQuery,
        error: ValidationError,
    },
}

/// Run generation until the SQL validates, the model declines to produce
/// a query, or the attempt budget runs out.
pub async fn run_cycle(
    orchestrator: &GenerationOrchestrator,
    message: &str,
    history: &[ChatTurn],
) -> Result<CycleOutcome> {
    let mut prompt = message.to_string();
    let mut attempt = 1;

    loop {
        let query = orchestrator.generate(&prompt, history).await?;

        if query.is_conversational() {
            return Ok(CycleOutcome::Conversational(query));
        }

        match validate_sql(&query.sql) {
            Ok(()) => return Ok(CycleOutcome::Valid(query)),
            Err(error) => {
                if attempt >= MAX_ATTEMPTS {
                    return Ok(CycleOutcome::ExhaustedInvalid { query, error });
                }
                warn!(
                    "generation attempt {} rejected ({}), retrying with feedback",
                    attempt, error
                );
                prompt = retry_prompt(message, &error);
                attempt += 1;
            }
        }
    }
}

/// The retry prompt keeps the original question and quotes the refusal so
/// the model knows exactly what to avoid.
fn retry_prompt(message: &str, error: &ValidationError) -> String {
    format!(
        "{message}\n\nNOTE: the previous query was rejected by the validator: \"{error}\". \
         Generate a new query that avoids CTEs, DML statements, and tables outside the allow-list."
    )
}
