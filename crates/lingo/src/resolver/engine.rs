//! Language and dictionary fallback resolution.

use crate::format;
use crate::resolver::error::{ResolveError, compute_suggestions};
use crate::template;
use crate::types::{LanguageCodeSet, TextEntry, TextOptions, TranslationCorpus};

/// Pick the best language code for a resolution.
///
/// Precedence, first match wins:
/// 1. `requested`, if it is a registered code;
/// 2. the active language, if it is a registered code;
/// 3. the corpus default language.
///
/// Returns `None` only when the corpus is absent entirely, signalling that
/// resolution is unavailable.
pub fn resolve_language_code(
    requested: Option<&str>,
    corpus: Option<&TranslationCorpus>,
    codes: Option<&LanguageCodeSet>,
    active: &str,
) -> Option<String> {
    if let (Some(requested), Some(codes)) = (requested, codes) {
        if codes.contains(requested) {
            return Some(requested.to_string());
        }
    }
    if let Some(codes) = codes {
        if codes.contains(active) {
            return Some(active.to_string());
        }
    }
    corpus.map(|corpus| corpus.default_language.clone())
}

/// Look up a text code through the three-tier dictionary fallback.
///
/// Tiers, first hit wins: the dictionary registered under `language` (when
/// given), then the active language's, then the default language's.
pub fn lookup_entry<'a>(
    text_code: &str,
    language: Option<&str>,
    corpus: &'a TranslationCorpus,
    active: &str,
) -> Option<&'a TextEntry> {
    if let Some(language) = language {
        if let Some(entry) = corpus
            .dictionary_for(language)
            .and_then(|dictionary| dictionary.get(text_code))
        {
            return Some(entry);
        }
    }
    if let Some(entry) = corpus
        .dictionary_for(active)
        .and_then(|dictionary| dictionary.get(text_code))
    {
        return Some(entry);
    }
    corpus
        .default_dictionary()
        .and_then(|dictionary| dictionary.get(text_code))
}

/// Resolve a text code to its final rendering.
///
/// The full pipeline: language resolution, entry lookup, variant selection,
/// placeholder interpolation, case transform. Never fails toward the caller;
/// a missing text code or variant degrades to the text code itself, and an
/// interpolation failure keeps the raw template text. Every failure is pushed
/// into `diagnostics`.
pub fn render(
    text_code: &str,
    options: &TextOptions,
    corpus: &TranslationCorpus,
    codes: &LanguageCodeSet,
    active: &str,
    diagnostics: &mut Vec<ResolveError>,
) -> String {
    let language =
        resolve_language_code(options.language.as_deref(), Some(corpus), Some(codes), active)
            .unwrap_or_else(|| corpus.default_language.clone());

    let Some(entry) = lookup_entry(text_code, Some(&language), corpus, active) else {
        diagnostics.push(ResolveError::MissingText {
            code: text_code.to_string(),
            language,
            suggestions: missing_text_suggestions(text_code, corpus, active),
        });
        return text_code.to_string();
    };

    let Some(template_text) = entry.template(&options.variant) else {
        diagnostics.push(ResolveError::MissingVariant {
            code: text_code.to_string(),
            variant: options.variant.clone(),
            language,
            available: entry.variant_keys(),
        });
        return text_code.to_string();
    };

    let mut text = template_text.to_string();
    if let Some(values) = &options.insert_values {
        match template::interpolate(template_text, values) {
            Ok(rendered) => text = rendered,
            Err(e) => diagnostics.push(ResolveError::Interpolation {
                code: text_code.to_string(),
                message: e.to_string(),
            }),
        }
    }

    if let Some(transform) = options.transform {
        text = format::apply(transform, &text, &language);
    }

    text
}

/// Candidate text codes for a missing-text diagnostic, drawn from the active
/// language's dictionary (or the default dictionary as a fallback).
fn missing_text_suggestions(
    text_code: &str,
    corpus: &TranslationCorpus,
    active: &str,
) -> Vec<String> {
    let mut candidates: Vec<String> = corpus
        .dictionary_for(active)
        .or_else(|| corpus.default_dictionary())
        .map(|dictionary| dictionary.keys().cloned().collect())
        .unwrap_or_default();
    candidates.sort();
    compute_suggestions(text_code, &candidates)
}
