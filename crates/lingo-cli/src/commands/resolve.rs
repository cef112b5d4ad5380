//! Implementation of the `lingo resolve` command.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use lingo::{LanguageCodeSet, Localizer, TextOptions, Transform, TranslationCorpus, Value};
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::OwoColorize;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Text code to resolve.
    #[arg(required = true)]
    pub text_code: String,

    /// Corpus JSON file.
    #[arg(long)]
    pub corpus: PathBuf,

    /// Language to resolve in. Defaults to the corpus default language.
    #[arg(long)]
    pub language: Option<String>,

    /// Variant key to select.
    #[arg(long, default_value = "value")]
    pub variant: String,

    /// Case transform to apply (capitalize, capitalizeWord, capitalizeSentence,
    /// uppercase, lowercase).
    #[arg(long)]
    pub transform: Option<String>,

    /// Insert values as comma-separated key=value pairs.
    #[arg(long, value_delimiter = ',')]
    pub values: Vec<String>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs) -> Result<i32> {
    let content = read_to_string(&args.corpus)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read corpus {:?}: {}", args.corpus, e))?;

    let corpus: TranslationCorpus = serde_json::from_str(&content)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to parse corpus {:?}: {}", args.corpus, e))?;

    let codes = LanguageCodeSet::from_codes(
        corpus
            .languages
            .iter()
            .flat_map(|entry| entry.codes.iter().cloned()),
    );

    let transform = args
        .transform
        .as_deref()
        .map(Transform::from_str)
        .transpose()
        .map_err(|e| miette!("{e}"))?;

    let insert_values = if args.values.is_empty() {
        None
    } else {
        Some(parse_values(&args.values)?)
    };

    let options = TextOptions::builder()
        .variant(args.variant.clone())
        .maybe_transform(transform)
        .maybe_language(args.language.clone())
        .maybe_insert_values(insert_values)
        .build();

    let mut localizer = Localizer::with_language(corpus.default_language.clone());
    localizer.init(corpus, codes);

    let (text, diagnostics) = localizer.resolve_text_with_diagnostics(&args.text_code, &options);
    for diagnostic in &diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }
    println!("{text}");

    Ok(exitcode::OK)
}

/// Parse `key=value` pairs into an insert-value map.
fn parse_values(pairs: &[String]) -> Result<HashMap<String, Value>> {
    let mut values = HashMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(miette!("invalid value '{pair}', expected key=value"));
        };
        values.insert(key.to_string(), Value::from(value));
    }
    Ok(values)
}
