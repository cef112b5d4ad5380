//! Integration tests for the live text handle lifecycle.

use lingo::{values, LanguageCodeSet, Localizer, TextOptions, Transform, TranslationCorpus};
use serde_json::json;

fn corpus() -> TranslationCorpus {
    serde_json::from_value(json!({
        "defaultLanguage": "en",
        "languages": [
            { "codes": ["en"], "dictionary": {
                "BYE": { "value": "goodbye" },
                "GREET": { "value": "hello ${name}" }
            }},
            { "codes": ["fr"], "dictionary": {
                "BYE": { "value": "au revoir" },
                "GREET": { "value": "bonjour ${name}" }
            }}
        ]
    }))
    .unwrap()
}

fn localizer() -> Localizer {
    let mut localizer = Localizer::new();
    localizer.init(corpus(), LanguageCodeSet::from_codes(["en", "fr"]));
    localizer
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn resolves_immediately_on_creation() {
    let localizer = localizer();
    let text = localizer.live_text("BYE", TextOptions::default());
    assert_eq!(text.current_text(), "goodbye");
    assert_eq!(text.text_code(), "BYE");
    assert!(text.is_live());
}

#[test]
fn carries_options_through_updates() {
    let mut localizer = localizer();
    let options = TextOptions::builder()
        .insert_values(values! { "name" => "Ada" })
        .transform(Transform::Capitalize)
        .build();
    let text = localizer.live_text("GREET", options);
    assert_eq!(text.current_text(), "Hello ada");

    localizer.set_language("fr");
    assert_eq!(text.current_text(), "Bonjour ada");
}

// =========================================================================
// Language tracking
// =========================================================================

#[test]
fn updates_once_per_language_change() {
    let mut localizer = localizer();
    let text = localizer.live_text("BYE", TextOptions::default());

    localizer.set_language("fr");
    assert_eq!(text.current_text(), "au revoir");

    localizer.set_language("en");
    assert_eq!(text.current_text(), "goodbye");
}

#[test]
fn pinned_handle_never_updates() {
    let mut localizer = localizer();
    let options = TextOptions::builder().language("fr").build();
    let text = localizer.live_text("BYE", options);
    assert_eq!(text.current_text(), "au revoir");
    assert!(!text.is_live());
    assert_eq!(localizer.observer_count(), 0);

    localizer.set_language("fr");
    localizer.set_language("en");
    assert_eq!(text.current_text(), "au revoir");
}

#[test]
fn display_reads_current_text() {
    let mut localizer = localizer();
    let text = localizer.live_text("BYE", TextOptions::default());
    assert_eq!(format!("{text}"), "goodbye");
    localizer.set_language("fr");
    assert_eq!(format!("{text}"), "au revoir");
}

// =========================================================================
// Disposal
// =========================================================================

#[test]
fn dispose_freezes_rendering() {
    let mut localizer = localizer();
    let mut text = localizer.live_text("BYE", TextOptions::default());

    localizer.set_language("fr");
    text.dispose();
    assert!(!text.is_live());

    localizer.set_language("en");
    assert_eq!(text.current_text(), "au revoir");
}

#[test]
fn dispose_is_idempotent() {
    let localizer = localizer();
    let mut text = localizer.live_text("BYE", TextOptions::default());
    text.dispose();
    text.dispose();
    assert_eq!(localizer.observer_count(), 0);
}

#[test]
fn dropping_handle_releases_subscription() {
    let localizer = localizer();
    {
        let _text = localizer.live_text("BYE", TextOptions::default());
        assert_eq!(localizer.observer_count(), 1);
    }
    assert_eq!(localizer.observer_count(), 0);
}

#[test]
fn multiple_handles_track_independently() {
    let mut localizer = localizer();
    let bye = localizer.live_text("BYE", TextOptions::default());
    let mut greet = localizer.live_text("GREET", TextOptions::default());
    assert_eq!(localizer.observer_count(), 2);

    greet.dispose();
    localizer.set_language("fr");
    assert_eq!(bye.current_text(), "au revoir");
    assert_eq!(greet.current_text(), "hello ${name}");
}
