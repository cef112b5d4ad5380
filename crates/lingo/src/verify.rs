//! Static corpus diagnostics: completeness and redundancy.
//!
//! The verifier walks the whole corpus and collects findings; it never aborts
//! on a single finding. Output order is deterministic: corpus language order
//! with text codes sorted within each language.

use bon::Builder;
use thiserror::Error;

use crate::types::{LanguageEntry, TranslationCorpus};

/// Options for a verifier run.
#[derive(Debug, Clone, Copy, Builder)]
pub struct VerifyOptions {
    /// Also scan each language for text codes with identical entries.
    #[builder(default = true)]
    pub redundant_check: bool,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        VerifyOptions::builder().build()
    }
}

/// A single verifier finding. Findings are collected, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyFinding {
    /// The corpus default language does not match any entry's alias codes.
    #[error("default language '{language}' does not match any language entry")]
    DefaultLanguageUnknown { language: String },

    /// A text code exists in one language but not in another.
    #[error("key '{code}' is present in '{present_in}' and not in '{missing_from}'")]
    CompletenessGap {
        code: String,
        present_in: String,
        missing_from: String,
    },

    /// Two distinct text codes in one language carry identical entries.
    ///
    /// The pairwise scan reports both directions, so each redundant pair
    /// yields two findings.
    #[error("text code '{code}' is redundant with text code '{other}' in language '{language}'")]
    Redundant {
        code: String,
        other: String,
        language: String,
    },
}

impl VerifyFinding {
    /// Redundancy findings are warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, VerifyFinding::Redundant { .. })
    }
}

/// Verify a corpus for completeness and (optionally) redundancy.
///
/// Checks, in order:
/// 1. the default language matches some entry's codes;
/// 2. every text code present in one language is present in every other
///    (O(L^2 * K) over L languages and K average dictionary size);
/// 3. with `redundant_check`, no two text codes within a language share a
///    deep-equal entry (O(K^2) per language).
pub fn verify_corpus(corpus: &TranslationCorpus, options: &VerifyOptions) -> Vec<VerifyFinding> {
    let mut findings = Vec::new();

    if corpus.entry_for(&corpus.default_language).is_none() {
        findings.push(VerifyFinding::DefaultLanguageUnknown {
            language: corpus.default_language.clone(),
        });
    }

    for (index, language) in corpus.languages.iter().enumerate() {
        let codes = sorted_codes(language);
        for (other_index, other) in corpus.languages.iter().enumerate() {
            if other_index == index {
                continue;
            }
            for code in &codes {
                if !other.dictionary.contains_key(*code) {
                    findings.push(VerifyFinding::CompletenessGap {
                        code: (*code).clone(),
                        present_in: language.canonical_code().to_string(),
                        missing_from: other.canonical_code().to_string(),
                    });
                }
            }
        }
    }

    if options.redundant_check {
        for language in &corpus.languages {
            let codes = sorted_codes(language);
            for code in &codes {
                for other in &codes {
                    if code == other {
                        continue;
                    }
                    if language.dictionary.get(*code) == language.dictionary.get(*other) {
                        findings.push(VerifyFinding::Redundant {
                            code: (*code).clone(),
                            other: (*other).clone(),
                            language: language.canonical_code().to_string(),
                        });
                    }
                }
            }
        }
    }

    findings
}

/// Sorted text codes of one language's dictionary.
fn sorted_codes(language: &LanguageEntry) -> Vec<&String> {
    let mut codes: Vec<&String> = language.dictionary.keys().collect();
    codes.sort();
    codes
}
