//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Verification summary for a single language.
pub struct LanguageSummary {
    /// Canonical language code (e.g. "en", "fr").
    pub language: String,
    /// Number of text codes in this language's dictionary.
    pub keys: usize,
    /// Number of text codes missing from this language.
    pub gaps: usize,
}

/// Format verification summaries as an ASCII table.
pub fn format_summary_table(summaries: &[LanguageSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Keys", "Missing"]);

    for summary in summaries {
        table.add_row(vec![
            summary.language.clone(),
            summary.keys.to_string(),
            summary.gaps.to_string(),
        ]);
    }

    table
}
