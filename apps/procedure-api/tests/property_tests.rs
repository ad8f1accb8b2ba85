//! Property-based tests for procedure-api
//!
//! Tests the API naming conventions and payload invariants using proptest.

use proptest::prelude::*;

// ============================================================
// Document Name Convention
// ============================================================

/// Generated documents are named `{team_id}_procedure_document.docx`
fn document_name(team_id: i32) -> String {
    format!("{}_procedure_document.docx", team_id)
}

/// Names that must never reach the storage layer
fn unsafe_filename() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("../escape.docx".to_string()),
        Just("a/b.docx".to_string()),
        Just("a\\b.docx".to_string()),
        Just("".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Document Name Tests
    // ============================================================

    #[test]
    fn document_names_follow_the_convention(team_id in 1i32..100_000) {
        let name = document_name(team_id);
        prop_assert!(name.starts_with(&team_id.to_string()));
        prop_assert!(name.ends_with("_procedure_document.docx"));
    }

    #[test]
    fn document_names_contain_no_path_separators(team_id in 1i32..100_000) {
        let name = document_name(team_id);
        prop_assert!(!name.contains('/'));
        prop_assert!(!name.contains('\\'));
        prop_assert!(!name.contains(".."));
    }

    #[test]
    fn same_team_always_maps_to_the_same_name(team_id in 1i32..100_000) {
        // The upsert-per-team model depends on name stability.
        prop_assert_eq!(document_name(team_id), document_name(team_id));
    }

    #[test]
    fn unsafe_filenames_carry_a_rejected_marker(name in unsafe_filename()) {
        let rejected =
            name.is_empty() || name.contains('/') || name.contains('\\') || name.contains("..");
        prop_assert!(rejected);
    }

    // ============================================================
    // Transcript Shape Tests
    // ============================================================

    #[test]
    fn transcript_pairs_are_line_delimited(
        question in "[A-Za-z &/]{1,60}",
        answer in "[A-Za-z0-9 ,.]{1,120}"
    ) {
        let pair = format!("Q: {}\nA: {}\n\n", question, answer);
        prop_assert!(pair.starts_with("Q: "));
        prop_assert!(pair.contains("\nA: "));
        prop_assert!(pair.ends_with("\n\n"));
    }

    // ============================================================
    // Heading Style Tests
    // ============================================================

    #[test]
    fn heading_styles_encode_their_level(level in 1usize..9) {
        let style = format!("Heading{}", level);
        let parsed: usize = style.strip_prefix("Heading").unwrap().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }

    // ============================================================
    // Content Classification Prefix Tests
    // ============================================================

    #[test]
    fn bullet_prefix_is_exactly_two_chars(text in "[A-Za-z0-9 ]{1,80}") {
        let line = format!("- {}", text);
        prop_assert_eq!(&line[2..], text.as_str());
    }

    #[test]
    fn only_the_first_two_ordinals_are_numbered(ordinal in 1u32..20) {
        // The builder's deliberately narrow heuristic: "1." and "2." only.
        let line = format!("{}. step", ordinal);
        let numbered = line.starts_with("1.") || line.starts_with("2.");
        prop_assert_eq!(numbered, ordinal == 1 || ordinal == 2);
    }

    // ============================================================
    // HTTP Status Tests
    // ============================================================

    #[test]
    fn api_status_codes_are_valid(
        status in prop_oneof![
            Just(200u16), // OK
            Just(400u16), // Bad Request
            Just(404u16), // Not Found
            Just(502u16), // Bad Gateway (completion service)
            Just(500u16), // Internal Server Error
        ]
    ) {
        prop_assert!(status >= 100 && status < 600);
    }
}

// ============================================================
// Unit Tests (non-property)
// ============================================================

#[cfg(test)]
mod unit_tests {
    #[test]
    fn test_docx_mime_type() {
        const DOCX_MIME: &str =
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
        assert!(DOCX_MIME.starts_with("application/vnd.openxmlformats"));
    }

    #[test]
    fn test_submission_status_value() {
        let status = "generated";
        assert!(status.chars().all(|c| c.is_ascii_lowercase()));
    }
}
