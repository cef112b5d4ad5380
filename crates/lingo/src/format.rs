//! Pure case-transform helpers.
//!
//! The capitalize family follows root-locale casing; `uppercase` and
//! `lowercase` are locale-aware through ICU4X case mapping, with the resolved
//! language code as the locale hint (Turkish dotted/dotless i, etc.).

use icu_casemap::CaseMapper;
use icu_locale_core::{LanguageIdentifier, langid};
use unicode_segmentation::UnicodeSegmentation;

use crate::types::Transform;

/// Apply a transform to already-interpolated text.
pub fn apply(transform: Transform, text: &str, lang: &str) -> String {
    match transform {
        Transform::Capitalize => capitalize(text),
        Transform::CapitalizeWord => capitalize_word(text),
        Transform::CapitalizeSentence => capitalize_sentence(text),
        Transform::Uppercase => uppercase(text, lang),
        Transform::Lowercase => lowercase(text, lang),
    }
}

/// Uppercase the first grapheme, lowercase the remainder.
///
/// ```
/// assert_eq!(lingo::format::capitalize("héLLO"), "Héllo");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str().to_lowercase()),
        None => String::new(),
    }
}

/// Lowercase the string, then capitalize each space-separated word.
///
/// Splitting preserves empty tokens, so runs of spaces survive unchanged.
///
/// ```
/// assert_eq!(lingo::format::capitalize_word("the QUICK fox"), "The Quick Fox");
/// ```
pub fn capitalize_word(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(" ")
}

/// Lowercase the string, then capitalize each `". "`-separated sentence.
///
/// ```
/// assert_eq!(
///     lingo::format::capitalize_sentence("hi there. BYE now"),
///     "Hi there. Bye now"
/// );
/// ```
pub fn capitalize_sentence(s: &str) -> String {
    s.to_lowercase()
        .split(". ")
        .map(capitalize)
        .collect::<Vec<String>>()
        .join(". ")
}

/// Locale-aware full uppercase.
pub fn uppercase(s: &str, lang: &str) -> String {
    CaseMapper::new().uppercase_to_string(s, &langid_for(lang)).into_owned()
}

/// Locale-aware full lowercase.
pub fn lowercase(s: &str, lang: &str) -> String {
    CaseMapper::new().lowercase_to_string(s, &langid_for(lang)).into_owned()
}

/// Parse a language code into an ICU language identifier.
///
/// Unparseable codes fall back to the root locale, which applies
/// language-neutral casing rules.
fn langid_for(lang: &str) -> LanguageIdentifier {
    lang.parse().unwrap_or(langid!("und"))
}
