//! Integration tests for the corpus verifier.

use lingo::{verify_corpus, TranslationCorpus, VerifyFinding, VerifyOptions};
use serde_json::json;

fn corpus(value: serde_json::Value) -> TranslationCorpus {
    serde_json::from_value(value).unwrap()
}

// =========================================================================
// Completeness
// =========================================================================

#[test]
fn reports_exactly_one_gap_for_one_missing_key() {
    let corpus = corpus(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": {
                "ADD": { "value": "add" },
                "HELLO": { "value": "hello" }
            }},
            { "codes": ["fr"], "dictionary": {
                "HELLO": { "value": "bonjour" }
            }}
        ]
    }));

    let findings = verify_corpus(&corpus, &VerifyOptions::default());
    assert_eq!(
        findings,
        vec![VerifyFinding::CompletenessGap {
            code: "ADD".to_string(),
            present_in: "en".to_string(),
            missing_from: "fr".to_string(),
        }]
    );
}

#[test]
fn gaps_are_reported_in_both_directions() {
    let corpus = corpus(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": { "ONLY_EN": { "value": "a" } } },
            { "codes": ["fr"], "dictionary": { "ONLY_FR": { "value": "b" } } }
        ]
    }));

    let findings = verify_corpus(&corpus, &VerifyOptions::default());
    assert_eq!(findings.len(), 2);
    assert!(findings.contains(&VerifyFinding::CompletenessGap {
        code: "ONLY_EN".to_string(),
        present_in: "en".to_string(),
        missing_from: "fr".to_string(),
    }));
    assert!(findings.contains(&VerifyFinding::CompletenessGap {
        code: "ONLY_FR".to_string(),
        present_in: "fr".to_string(),
        missing_from: "en".to_string(),
    }));
}

#[test]
fn complete_corpus_yields_no_findings() {
    let corpus = corpus(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": { "HELLO": { "value": "hello" } } },
            { "codes": ["fr"], "dictionary": { "HELLO": { "value": "bonjour" } } }
        ]
    }));
    assert!(verify_corpus(&corpus, &VerifyOptions::default()).is_empty());
}

// =========================================================================
// Default language existence
// =========================================================================

#[test]
fn unknown_default_language_is_reported() {
    let corpus = corpus(json!({
        "defaultLanguage": "de",
        "languages": [
            { "codes": ["en"], "dictionary": {} }
        ]
    }));

    let findings = verify_corpus(&corpus, &VerifyOptions::default());
    assert_eq!(
        findings,
        vec![VerifyFinding::DefaultLanguageUnknown {
            language: "de".to_string(),
        }]
    );
    assert!(!findings[0].is_warning());
}

#[test]
fn default_language_may_be_an_alias() {
    let corpus = corpus(json!({
        "defaultLanguage": "en-US",
        "languages": [
            { "codes": ["en", "en-US"], "dictionary": {} }
        ]
    }));
    assert!(verify_corpus(&corpus, &VerifyOptions::default()).is_empty());
}

// =========================================================================
// Redundancy
// =========================================================================

#[test]
fn identical_entries_are_reported_symmetrically() {
    let corpus = corpus(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": {
                "CLOSE": { "value": "close" },
                "DISMISS": { "value": "close" },
                "OPEN": { "value": "open" }
            }}
        ]
    }));

    let findings = verify_corpus(&corpus, &VerifyOptions::default());
    // The pairwise scan reports the pair in both directions.
    assert_eq!(
        findings,
        vec![
            VerifyFinding::Redundant {
                code: "CLOSE".to_string(),
                other: "DISMISS".to_string(),
                language: "en".to_string(),
            },
            VerifyFinding::Redundant {
                code: "DISMISS".to_string(),
                other: "CLOSE".to_string(),
                language: "en".to_string(),
            },
        ]
    );
    assert!(findings[0].is_warning());
}

#[test]
fn entries_with_different_variants_are_not_redundant() {
    let corpus = corpus(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": {
                "ONE": { "value": "same", "short": "s" },
                "TWO": { "value": "same" }
            }}
        ]
    }));
    assert!(verify_corpus(&corpus, &VerifyOptions::default()).is_empty());
}

#[test]
fn redundancy_scan_can_be_disabled() {
    let corpus = corpus(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": {
                "CLOSE": { "value": "close" },
                "DISMISS": { "value": "close" }
            }}
        ]
    }));

    let options = VerifyOptions::builder().redundant_check(false).build();
    assert!(verify_corpus(&corpus, &options).is_empty());
}

// =========================================================================
// Severity and aggregation
// =========================================================================

#[test]
fn verifier_collects_all_findings_without_aborting() {
    let corpus = corpus(json!({
        "defaultLanguage": "de",
        "languages": [
            { "codes": ["en"], "dictionary": {
                "A": { "value": "x" },
                "B": { "value": "x" }
            }},
            { "codes": ["fr"], "dictionary": {} }
        ]
    }));

    let findings = verify_corpus(&corpus, &VerifyOptions::default());
    let errors = findings.iter().filter(|f| !f.is_warning()).count();
    let warnings = findings.iter().filter(|f| f.is_warning()).count();
    // Unknown default, two gaps (A and B missing from fr), two redundancy
    // directions.
    assert_eq!(errors, 3);
    assert_eq!(warnings, 2);
}
