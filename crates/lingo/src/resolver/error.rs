//! Resolution failure taxonomy.
//!
//! Resolution never raises toward the caller: every failure here degrades to
//! a fallback rendering and is surfaced through a diagnostics sink instead.

use thiserror::Error;

/// A non-fatal failure recorded while resolving a text code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No fallback dictionary contains the requested text code. The
    /// resolution degrades to the text code itself.
    #[error(
        "text code '{code}' not found in language '{language}'{}",
        suggestion_suffix(suggestions)
    )]
    MissingText {
        code: String,
        language: String,
        suggestions: Vec<String>,
    },

    /// The entry exists but lacks the requested variant key. The resolution
    /// degrades to the text code itself.
    #[error(
        "variant '{variant}' not found in text code '{code}' in language '{language}', \
         available: {}",
        available.join(", ")
    )]
    MissingVariant {
        code: String,
        variant: String,
        language: String,
        available: Vec<String>,
    },

    /// Placeholder substitution failed; the raw template text is kept.
    #[error("template error in text code '{code}': {message}")]
    Interpolation { code: String, message: String },

    /// Resolution attempted before a corpus and code set were supplied.
    #[error("translations are not initialized: supply a corpus and language code set first")]
    Uninitialized,
}

/// Render the "did you mean" suffix for missing-text diagnostics.
fn suggestion_suffix(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names of 3 characters or fewer
/// - distance <= 2 for longer names
/// - limited to 3 suggestions, sorted by distance
///
/// # Example
///
/// ```
/// let available = vec!["HELLO".to_string(), "HELP".to_string(), "BYE".to_string()];
/// let suggestions = lingo::compute_suggestions("HELO", &available);
/// assert_eq!(suggestions[0], "HELLO");
/// ```
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = strsim::levenshtein(name, candidate);
            if dist > 0 && dist <= max_distance {
                Some((dist, candidate.clone()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
