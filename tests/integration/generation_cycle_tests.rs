//! Generation cycle integration tests
//!
//! Runs the full generate-validate loop with scripted providers: reply
//! parsing, provider fallback, validator feedback, and the outcomes the
//! chat endpoint acts on.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nlq_gateway::core::generation::MAX_ATTEMPTS;
    use nlq_gateway::core::generation::providers::{ProviderError, SqlGenerator};
    use nlq_gateway::core::schema_context::SCHEMA_CONTEXT;
    use nlq_gateway::{
        ChatTurn, CycleOutcome, GatewayError, GenerationOrchestrator, TurnRole, ValidationError,
        run_cycle,
    };

    use crate::common::{ScriptedGenerator, fenced_sql_reply, sql_reply};

    fn orchestrator_for(providers: Vec<Arc<dyn SqlGenerator>>) -> GenerationOrchestrator {
        GenerationOrchestrator::new(providers, SCHEMA_CONTEXT.to_string())
    }

    // ==================== Reply Handling ====================

    /// A reply fenced in markdown still comes back as an executable query.
    #[tokio::test]
    async fn test_fenced_reply_round_trip() {
        let provider = ScriptedGenerator::replies(
            "openai",
            &[&fenced_sql_reply(
                "SELECT COUNT(*) FROM users",
                "Counts registered users.",
            )],
        );
        let orchestrator = orchestrator_for(vec![provider.clone()]);

        let outcome = run_cycle(&orchestrator, "how many users?", &[])
            .await
            .unwrap();
        match outcome {
            CycleOutcome::Valid(query) => {
                assert_eq!(query.sql, "SELECT COUNT(*) FROM users");
                assert_eq!(query.explanation, "Counts registered users.");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    /// A prose reply ends the cycle as a conversational answer after a
    /// single attempt.
    #[tokio::test]
    async fn test_prose_reply_is_conversational() {
        let provider = ScriptedGenerator::replies(
            "openai",
            &["The available tables only cover WhatsApp usage; there is no billing data."],
        );
        let orchestrator = orchestrator_for(vec![provider.clone()]);

        let outcome = run_cycle(&orchestrator, "show me the invoices", &[])
            .await
            .unwrap();
        match outcome {
            CycleOutcome::Conversational(query) => {
                assert!(query.sql.is_empty());
                assert!(query.explanation.contains("no billing data"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(provider.prompts().await.len(), 1);
    }

    // ==================== Provider Fallback ====================

    /// The second provider answers when the first is down, within a single
    /// cycle attempt.
    #[tokio::test]
    async fn test_fallback_covers_a_failing_primary() {
        let primary = ScriptedGenerator::script(
            "openai",
            vec![Err(ProviderError::timeout("openai", "request timed out"))],
        );
        let secondary = ScriptedGenerator::replies(
            "anthropic",
            &[&sql_reply("SELECT COUNT(*) FROM users", "count")],
        );
        let orchestrator = orchestrator_for(vec![primary.clone(), secondary.clone()]);

        let outcome = run_cycle(&orchestrator, "how many users?", &[])
            .await
            .unwrap();
        assert!(matches!(outcome, CycleOutcome::Valid(_)));
        assert_eq!(primary.prompts().await.len(), 1);
        assert_eq!(secondary.prompts().await.len(), 1);
    }

    /// When every provider fails the caller gets one error naming each
    /// attempt, not an outcome.
    #[tokio::test]
    async fn test_total_outage_names_every_provider() {
        let primary = ScriptedGenerator::script(
            "openai",
            vec![Err(ProviderError::timeout("openai", "request timed out"))],
        );
        let secondary = ScriptedGenerator::script(
            "anthropic",
            vec![Err(ProviderError::network("anthropic", "connection refused"))],
        );
        let orchestrator = orchestrator_for(vec![primary, secondary]);

        let error = run_cycle(&orchestrator, "how many users?", &[])
            .await
            .unwrap_err();
        match error {
            GatewayError::ProvidersUnavailable(message) => {
                assert!(message.contains("openai"));
                assert!(message.contains("timed out"));
                assert!(message.contains("anthropic"));
                assert!(message.contains("connection refused"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // ==================== Validator Feedback ====================

    /// A refused first draft triggers exactly one retry whose prompt keeps
    /// the question and quotes the refusal.
    #[tokio::test]
    async fn test_retry_prompt_quotes_the_refusal() {
        let provider = ScriptedGenerator::replies(
            "openai",
            &[
                &sql_reply("SELECT * FROM payments", "first draft"),
                &sql_reply("SELECT * FROM users", "second draft"),
            ],
        );
        let orchestrator = orchestrator_for(vec![provider.clone()]);

        let outcome = run_cycle(&orchestrator, "list signups", &[]).await.unwrap();
        assert!(matches!(outcome, CycleOutcome::Valid(_)));

        let prompts = provider.prompts().await;
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0], "list signups");
        assert!(prompts[1].starts_with("list signups"));
        assert!(prompts[1].contains("table not allowed: payments"));
    }

    /// Two refusals exhaust the attempt budget; the outcome carries the
    /// last draft and its refusal for the 422 body.
    #[tokio::test]
    async fn test_exhaustion_reports_the_last_draft() {
        let provider = ScriptedGenerator::replies(
            "openai",
            &[
                &sql_reply("DELETE FROM users", "first draft"),
                &sql_reply("SELECT * FROM ledger", "second draft"),
            ],
        );
        let orchestrator = orchestrator_for(vec![provider.clone()]);

        let outcome = run_cycle(&orchestrator, "clean up old users", &[])
            .await
            .unwrap();
        match outcome {
            CycleOutcome::ExhaustedInvalid { query, error } => {
                assert_eq!(query.sql, "SELECT * FROM ledger");
                assert_eq!(query.explanation, "second draft");
                assert_eq!(error, ValidationError::TableNotAllowed("ledger".to_string()));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(provider.prompts().await.len(), MAX_ATTEMPTS as usize);
    }

    // ==================== Prompt Plumbing ====================

    /// Every provider call carries the schema context as its system prompt.
    #[tokio::test]
    async fn test_schema_context_reaches_the_provider() {
        let provider = ScriptedGenerator::replies(
            "openai",
            &[&sql_reply("SELECT COUNT(*) FROM users", "count")],
        );
        let orchestrator = orchestrator_for(vec![provider.clone()]);

        run_cycle(&orchestrator, "how many users?", &[])
            .await
            .unwrap();

        let system_prompts = provider.system_prompts().await;
        assert_eq!(system_prompts.len(), 1);
        assert!(system_prompts[0].contains("poc_medbrain_wpp"));
    }

    /// Conversation history flows through to the provider untouched.
    #[tokio::test]
    async fn test_history_reaches_the_provider() {
        let provider = ScriptedGenerator::replies(
            "openai",
            &[&sql_reply("SELECT COUNT(*) FROM users", "count")],
        );
        let orchestrator = orchestrator_for(vec![provider.clone()]);
        let history = vec![
            ChatTurn::user("how many messages in January?"),
            ChatTurn::assistant("1204 messages."),
        ];

        run_cycle(&orchestrator, "and in February?", &history)
            .await
            .unwrap();

        let histories = provider.histories().await;
        assert_eq!(histories.len(), 1);
        assert_eq!(histories[0].len(), 2);
        assert_eq!(histories[0][0].role, TurnRole::User);
        assert_eq!(histories[0][0].content, "how many messages in January?");
        assert_eq!(histories[0][1].role, TurnRole::Assistant);
    }
}
