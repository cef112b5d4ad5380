//! Integration tests for language resolution and dictionary fallback.

use lingo::resolver::{lookup_entry, resolve_language_code};
use lingo::{LanguageCodeSet, TranslationCorpus};
use serde_json::json;

fn corpus() -> TranslationCorpus {
    serde_json::from_value(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en", "en-US"], "dictionary": {
                "HELLO": { "value": "hello" },
                "ADD": { "value": "add" }
            }},
            { "codes": ["fr"], "dictionary": {
                "HELLO": { "value": "bonjour" }
            }}
        ]
    }))
    .unwrap()
}

fn codes() -> LanguageCodeSet {
    LanguageCodeSet::from_codes(["en", "en-US", "fr"])
}

// =========================================================================
// resolve_language_code precedence
// =========================================================================

#[test]
fn requested_registered_language_wins() {
    let resolved = resolve_language_code(Some("fr"), Some(&corpus()), Some(&codes()), "en");
    assert_eq!(resolved.as_deref(), Some("fr"));
}

#[test]
fn unregistered_request_falls_back_to_active() {
    let resolved = resolve_language_code(Some("de"), Some(&corpus()), Some(&codes()), "fr");
    assert_eq!(resolved.as_deref(), Some("fr"));
}

#[test]
fn unregistered_active_falls_back_to_default() {
    let resolved = resolve_language_code(Some("de"), Some(&corpus()), Some(&codes()), "xx");
    assert_eq!(resolved.as_deref(), Some("en"));
}

#[test]
fn no_request_uses_active() {
    let resolved = resolve_language_code(None, Some(&corpus()), Some(&codes()), "fr");
    assert_eq!(resolved.as_deref(), Some("fr"));
}

#[test]
fn absent_corpus_and_codes_resolves_to_none() {
    assert_eq!(resolve_language_code(Some("fr"), None, None, "en"), None);
}

#[test]
fn absent_codes_still_uses_corpus_default() {
    let resolved = resolve_language_code(Some("fr"), Some(&corpus()), None, "en");
    assert_eq!(resolved.as_deref(), Some("en"));
}

#[test]
fn alias_codes_are_registered() {
    let resolved = resolve_language_code(Some("en-US"), Some(&corpus()), Some(&codes()), "fr");
    assert_eq!(resolved.as_deref(), Some("en-US"));
}

// =========================================================================
// lookup_entry fallback tiers
// =========================================================================

#[test]
fn explicit_language_tier_wins() {
    let corpus = corpus();
    let entry = lookup_entry("HELLO", Some("fr"), &corpus, "en").unwrap();
    assert_eq!(entry.template("value"), Some("bonjour"));
}

#[test]
fn falls_back_to_active_language_dictionary() {
    let corpus = corpus();
    // "ADD" is absent from the French dictionary but present in English.
    let entry = lookup_entry("ADD", Some("fr"), &corpus, "en").unwrap();
    assert_eq!(entry.template("value"), Some("add"));
}

#[test]
fn falls_back_to_default_language_dictionary() {
    let corpus = corpus();
    let entry = lookup_entry("ADD", Some("fr"), &corpus, "xx").unwrap();
    assert_eq!(entry.template("value"), Some("add"));
}

#[test]
fn active_language_changes_lookup_result() {
    let corpus = corpus();
    let en = lookup_entry("HELLO", None, &corpus, "en").unwrap();
    assert_eq!(en.template("value"), Some("hello"));
    let fr = lookup_entry("HELLO", None, &corpus, "fr").unwrap();
    assert_eq!(fr.template("value"), Some("bonjour"));
}

#[test]
fn lookup_by_alias_code() {
    let corpus = corpus();
    let entry = lookup_entry("HELLO", Some("en-US"), &corpus, "fr").unwrap();
    assert_eq!(entry.template("value"), Some("hello"));
}

#[test]
fn unknown_code_in_all_tiers_is_none() {
    let corpus = corpus();
    assert!(lookup_entry("MISSING", Some("fr"), &corpus, "en").is_none());
}
