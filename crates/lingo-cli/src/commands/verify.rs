//! Implementation of the `lingo verify` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use lingo::{TranslationCorpus, VerifyFinding, VerifyOptions};
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::table::{format_summary_table, LanguageSummary};

/// Arguments for the verify command.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    /// Corpus JSON file to verify.
    #[arg(required = true)]
    pub corpus: PathBuf,

    /// Skip the intra-language redundancy scan.
    #[arg(long)]
    pub no_redundant: bool,

    /// Output findings as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for a single finding.
#[derive(Debug, Serialize)]
struct FindingJson {
    severity: &'static str,
    message: String,
}

/// Run the verify command.
pub fn run_verify(args: VerifyArgs) -> Result<i32> {
    let content = read_to_string(&args.corpus)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read corpus {:?}: {}", args.corpus, e))?;

    let corpus: TranslationCorpus = serde_json::from_str(&content)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to parse corpus {:?}: {}", args.corpus, e))?;

    let options = VerifyOptions::builder()
        .redundant_check(!args.no_redundant)
        .build();
    let findings = lingo::verify_corpus(&corpus, &options);

    if args.json {
        let json_data: Vec<FindingJson> = findings
            .iter()
            .map(|finding| FindingJson {
                severity: if finding.is_warning() {
                    "warning"
                } else {
                    "error"
                },
                message: finding.to_string(),
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json_data).into_diagnostic()?
        );
    } else {
        for finding in &findings {
            if finding.is_warning() {
                println!("{} {}", "warning:".yellow().bold(), finding);
            } else {
                println!("{} {}", "error:".red().bold(), finding);
            }
        }

        let summaries: Vec<LanguageSummary> = corpus
            .languages
            .iter()
            .map(|entry| LanguageSummary {
                language: entry.canonical_code().to_string(),
                keys: entry.dictionary.len(),
                gaps: findings
                    .iter()
                    .filter(|finding| {
                        matches!(
                            finding,
                            VerifyFinding::CompletenessGap { missing_from, .. }
                                if missing_from == entry.canonical_code()
                        )
                    })
                    .count(),
            })
            .collect();
        println!("{}", format_summary_table(&summaries));

        if findings.is_empty() {
            println!("{}", "corpus verified: no findings".green());
        } else {
            println!("{} finding(s)", findings.len());
        }
    }

    Ok(if findings.is_empty() { exitcode::OK } else { 1 })
}
