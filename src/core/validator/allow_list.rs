//! Table allow-list
//!
//! The fixed set of tables and views a validated query may reference.
//! Entries that carry double quotes are case-sensitive and must appear
//! quoted in queries; all other entries match case-insensitively.

/// Tables and views queries may reference.
pub const ALLOWED_TABLES: &[&str] = &[
    "poc_medbrain_wpp",
    "users",
    "survey_responses",
    "referral_referrers",
    "referral_referred",
    "medway_vs",
    "indice_focos",
    // Mixed-case name, only valid when quoted.
    "\"Dica_personalizada\"",
    "vw_estatisticas_avaliacoes",
    "vw_feedbacks_textuais",
    "vw_pesquisas_completas",
    "db_medbrain_pct_nao_alunos_3_entradas",
    "db_medbrain_referred",
    "db_medbrain_referrers",
    "db_medbrain_wpp_formatted",
    "db_medbrain_wpp_formatted2",
    "db_medbrain_wpp_formatted3",
    "poc_medbrain_first_session",
    "poc_medbrain_last_session",
];

/// Check one extracted identifier against the allow-list.
///
/// Quoted identifiers must equal an entry exactly, quote characters
/// included. Unquoted identifiers compare case-insensitively against the
/// unquoted entries only, so a quoted allow-list entry can never be
/// reached by an unquoted reference.
pub fn is_allowed_table(identifier: &str) -> bool {
    if identifier.starts_with('"') {
        ALLOWED_TABLES.contains(&identifier)
    } else {
        ALLOWED_TABLES
            .iter()
            .any(|entry| !entry.starts_with('"') && entry.eq_ignore_ascii_case(identifier))
    }
}
