//! The translation corpus and language-code membership table.
//!
//! Both structures are produced by external loaders (JSON files, bundles) and
//! handed to the resolver once. They deserialize directly from the loader
//! output shape: `{ languages: [{ codes, dictionary }], defaultLanguage }`
//! for the corpus and a flat `{ code: code }` object for the code set.

use std::collections::HashMap;

use serde::Deserialize;

/// An immutable set of translations covering every supported language.
///
/// Each [`LanguageEntry`] carries a list of alias codes (the first being
/// canonical) and a dictionary from text code to [`TextEntry`]. The corpus
/// names a default language used as the last fallback tier.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationCorpus {
    /// Per-language dictionaries, in load order.
    pub languages: Vec<LanguageEntry>,

    /// Last-resort language for lookups; should match one entry's codes.
    #[serde(rename = "defaultLanguage")]
    pub default_language: String,
}

impl TranslationCorpus {
    /// Find the language entry whose alias list contains `code`.
    pub fn entry_for(&self, code: &str) -> Option<&LanguageEntry> {
        self.languages.iter().find(|entry| entry.has_code(code))
    }

    /// Dictionary of the language registered under `code`.
    pub fn dictionary_for(&self, code: &str) -> Option<&HashMap<String, TextEntry>> {
        self.entry_for(code).map(|entry| &entry.dictionary)
    }

    /// Dictionary of the corpus default language.
    pub fn default_dictionary(&self) -> Option<&HashMap<String, TextEntry>> {
        self.dictionary_for(&self.default_language)
    }
}

/// One language's dictionary plus its alias codes.
///
/// Alias code lists are assumed disjoint across entries; this is a corpus
/// authoring contract, not checked at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    /// Alias codes for this language (e.g. `["en", "en-US"]`). The first
    /// alias is the canonical code used in diagnostics.
    pub codes: Vec<String>,

    /// Text code to entry mapping.
    pub dictionary: HashMap<String, TextEntry>,
}

impl LanguageEntry {
    /// True if `code` is one of this entry's aliases.
    pub fn has_code(&self, code: &str) -> bool {
        self.codes.iter().any(|alias| alias == code)
    }

    /// The canonical (first) alias, or `""` for an empty alias list.
    pub fn canonical_code(&self) -> &str {
        self.codes.first().map(String::as_str).unwrap_or("")
    }
}

/// A single text code's templates, keyed by variant (e.g. "value", "plural").
///
/// The variant key set may differ per language; lookups request one variant
/// with `"value"` as the conventional default. Deep equality between entries
/// drives the verifier's redundancy check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TextEntry(HashMap<String, String>);

impl TextEntry {
    /// Template string for a variant key.
    pub fn template(&self, variant: &str) -> Option<&str> {
        self.0.get(variant).map(String::as_str)
    }

    /// Sorted list of the variant keys present on this entry.
    pub fn variant_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TextEntry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TextEntry(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Membership table of every known language code.
///
/// The flat union of all alias codes across the corpus, used only to validate
/// a requested language code during resolution. Deserializes from the
/// original `{ code: code }` loader output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct LanguageCodeSet(HashMap<String, String>);

impl LanguageCodeSet {
    /// Build a code set from a list of codes.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LanguageCodeSet(
            codes
                .into_iter()
                .map(|code| {
                    let code = code.into();
                    (code.clone(), code)
                })
                .collect(),
        )
    }

    /// True if `code` is a registered language code.
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Number of registered codes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no codes are registered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
