//! SQL validation policy integration tests
//!
//! Drives the validator through the crate root exports the way the chat
//! and query endpoints do, checking the policy as a whole: statement
//! shape, write refusal, the table allow-list, and the exact refusal
//! messages clients end up seeing in error bodies.

#[cfg(test)]
mod tests {
    use nlq_gateway::core::validator::{ALLOWED_TABLES, is_allowed_table};
    use nlq_gateway::{ValidationError, validate_sql};

    // ==================== Statement Shape ====================

    /// Representative analyst queries over the production tables all pass.
    #[test]
    fn test_representative_analyst_queries_pass() {
        let queries = [
            "SELECT COUNT(*) FROM users",
            "SELECT created_at::date AS day, COUNT(*) AS messages \
             FROM poc_medbrain_wpp GROUP BY 1 ORDER BY 1",
            "SELECT AVG(nota) FROM vw_estatisticas_avaliacoes \
             WHERE created_at BETWEEN $1 AND $2",
            "SELECT r.referrer_phone, COUNT(d.id) AS indicados \
             FROM referral_referrers r \
             JOIN referral_referred d ON d.referrer_id = r.id GROUP BY 1",
        ];
        for sql in queries {
            assert_eq!(validate_sql(sql), Ok(()), "refused: {sql}");
        }
    }

    /// Every table on the allow-list is reachable through a plain SELECT,
    /// including the quoted mixed-case entry.
    #[test]
    fn test_every_allowed_table_is_queryable() {
        for table in ALLOWED_TABLES {
            let sql = format!("SELECT * FROM {table} LIMIT 1");
            assert_eq!(validate_sql(&sql), Ok(()), "refused: {sql}");
        }
    }

    /// The allow-list distinguishes quoted from unquoted identifiers.
    #[test]
    fn test_allow_list_quoting_rules() {
        assert!(is_allowed_table("users"));
        assert!(is_allowed_table("VW_FEEDBACKS_TEXTUAIS"));
        assert!(is_allowed_table("\"Dica_personalizada\""));
        assert!(!is_allowed_table("Dica_personalizada"));
        assert!(!is_allowed_table("\"users\""));
    }

    // ==================== Refusals Clients See ====================

    /// Each policy rule refuses with one fixed message, and that message
    /// is exactly what the API puts in its error body.
    #[test]
    fn test_refusal_messages_are_stable() {
        let cases = [
            ("", "empty query"),
            ("SELECT 1; SELECT 2", "multiple statements not allowed"),
            ("WITH t AS (SELECT 1) SELECT * FROM t", "CTEs not allowed"),
            ("SELECT pg_sleep(5)", "system functions not allowed"),
            ("DELETE FROM users", "only SELECT queries allowed"),
            ("EXPLAIN SELECT * FROM users", "query must start with SELECT"),
            ("SELECT * FROM payments", "table not allowed: payments"),
        ];
        for (sql, message) in cases {
            let error = validate_sql(sql).unwrap_err();
            assert_eq!(error.to_string(), message, "for: {sql}");
        }
    }

    /// Write keywords are refused wherever they appear, not only in
    /// statement position.
    #[test]
    fn test_write_keywords_refused_in_any_position() {
        for sql in [
            "INSERT INTO users (id) VALUES (1)",
            "UPDATE users SET phone = NULL",
            "TRUNCATE TABLE poc_medbrain_wpp",
            "GRANT SELECT ON users TO analyst",
            "SELECT * FROM users WHERE id = (DELETE FROM users RETURNING id)",
            "COPY users TO '/tmp/out.csv'",
        ] {
            assert_eq!(
                validate_sql(sql),
                Err(ValidationError::WriteKeyword),
                "allowed: {sql}"
            );
        }
    }

    /// Keywords buried inside identifiers do not trip the keyword scans.
    #[test]
    fn test_keywords_inside_identifiers_are_tolerated() {
        assert_eq!(validate_sql("SELECT deleted_at FROM users"), Ok(()));
        assert_eq!(validate_sql("SELECT last_update FROM medway_vs"), Ok(()));
    }

    // ==================== String Literal Handling ====================

    /// Literal text cannot smuggle a write keyword into the scan.
    #[test]
    fn test_literals_cannot_trigger_refusal() {
        assert_eq!(
            validate_sql("SELECT * FROM users WHERE status = 'DELETE; DROP'"),
            Ok(())
        );
    }

    /// Literal text cannot hide a second statement from the scan either.
    #[test]
    fn test_literals_cannot_mask_refusal() {
        assert_eq!(
            validate_sql("SELECT * FROM users WHERE a = 'x'; DELETE FROM users WHERE b = 'y'"),
            Err(ValidationError::MultipleStatements)
        );
    }

    // ==================== Table Extraction ====================

    /// Schema qualifiers resolve to the base table before lookup.
    #[test]
    fn test_schema_qualified_references_resolve() {
        assert_eq!(validate_sql("SELECT * FROM public.survey_responses"), Ok(()));
        assert_eq!(
            validate_sql("SELECT * FROM information_schema.tables"),
            Err(ValidationError::TableNotAllowed("tables".to_string()))
        );
    }

    /// Every table named anywhere in the statement is checked, joins and
    /// subqueries included.
    #[test]
    fn test_all_references_are_checked() {
        assert_eq!(
            validate_sql(
                "SELECT u.phone FROM users u WHERE u.id IN (SELECT user_id FROM billing_events)"
            ),
            Err(ValidationError::TableNotAllowed("billing_events".to_string()))
        );
        assert_eq!(
            validate_sql("SELECT * FROM users u JOIN db_medbrain_referred r ON r.user_id = u.id"),
            Ok(())
        );
    }
}
