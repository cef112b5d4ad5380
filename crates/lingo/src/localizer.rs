//! The translation service: corpus, active language, and notification.

use std::sync::{Arc, Mutex};

use bon::Builder;
use tracing::{error, warn};

use crate::live::LiveText;
use crate::observe::{LanguageObserver, ObserverList, Subscription};
use crate::resolver::{self, ResolveError};
use crate::types::{LanguageCodeSet, TextOptions, TranslationCorpus};
use crate::verify::{VerifyFinding, VerifyOptions, verify_corpus};

/// Owner of the translation corpus and the active-language state.
///
/// A single `Localizer` instance is shared by everything that renders text,
/// so every live handle observes the same active language. The corpus and the
/// language-code set are supplied once via [`Localizer::init`]; resolution
/// before that degrades to returning the text code, with a diagnostic.
///
/// Resolution-time failures never propagate to callers: [`Localizer::resolve_text`]
/// always returns a displayable string and reports failures through the
/// logging channel.
///
/// # Example
///
/// ```
/// use lingo::{LanguageCodeSet, Localizer, TextOptions, TranslationCorpus};
///
/// let corpus: TranslationCorpus = serde_json::from_value(serde_json::json!({
///     "defaultLanguage": "en",
///     "languages": [
///         { "codes": ["en"], "dictionary": { "BYE": { "value": "goodbye" } } }
///     ]
/// })).unwrap();
///
/// let mut localizer = Localizer::new();
/// localizer.init(corpus, LanguageCodeSet::from_codes(["en"]));
/// assert_eq!(localizer.resolve_text("BYE", &TextOptions::default()), "goodbye");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Localizer {
    /// Active language code. Any non-empty string is accepted; it does not
    /// have to be a registered code.
    #[builder(default = "en".to_string())]
    language: String,

    #[builder(skip)]
    corpus: Option<TranslationCorpus>,

    #[builder(skip)]
    codes: Option<LanguageCodeSet>,

    /// Observer registry shared with subscription tokens.
    #[builder(skip)]
    observers: Arc<Mutex<ObserverList>>,
}

impl Default for Localizer {
    fn default() -> Self {
        Localizer::builder().build()
    }
}

impl Localizer {
    /// Create a localizer with the default active language (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a localizer with the specified active language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Localizer::builder().language(language.into()).build()
    }

    // =========================================================================
    // Corpus Management
    // =========================================================================

    /// Supply the corpus and the language-code set.
    ///
    /// External loaders produce both structures; the localizer treats them as
    /// read-only from here on.
    pub fn init(&mut self, corpus: TranslationCorpus, codes: LanguageCodeSet) {
        self.corpus = Some(corpus);
        self.codes = Some(codes);
    }

    /// True once a corpus and code set have been supplied.
    pub fn is_initialized(&self) -> bool {
        self.corpus.is_some() && self.codes.is_some()
    }

    /// The loaded corpus, if any.
    pub fn corpus(&self) -> Option<&TranslationCorpus> {
        self.corpus.as_ref()
    }

    /// The loaded language-code set, if any.
    pub fn language_codes(&self) -> Option<&LanguageCodeSet> {
        self.codes.as_ref()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the active language and synchronously notify every observer, in
    /// registration order.
    ///
    /// The registry is snapshotted before the fan-out, so an observer
    /// registered during the pass is not invoked until the next change.
    /// The fan-out completes before this method returns.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
        let snapshot = self
            .observers
            .lock()
            .expect("observer registry lock poisoned")
            .snapshot();
        let this: &Localizer = self;
        for callback in snapshot {
            let mut callback = callback.lock().expect("observer callback lock poisoned");
            (&mut *callback)(this, &this.language);
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Register an observer invoked on every language change.
    ///
    /// The observer receives this localizer and the new language code. The
    /// returned token removes exactly this observer when released or dropped;
    /// registering the same logic twice yields two invocations per change.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&Localizer, &str) + Send + 'static,
    {
        let callback: Arc<Mutex<LanguageObserver>> = Arc::new(Mutex::new(observer));
        let id = self
            .observers
            .lock()
            .expect("observer registry lock poisoned")
            .insert(callback);
        Subscription::new(Arc::downgrade(&self.observers), id)
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers
            .lock()
            .expect("observer registry lock poisoned")
            .len()
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Eagerly resolve a text code to a displayable string.
    ///
    /// Never fails: missing codes and variants degrade to the text code
    /// itself, interpolation failures keep the raw template. Each failure is
    /// logged at error level.
    pub fn resolve_text(&self, text_code: &str, options: &TextOptions) -> String {
        let (text, diagnostics) = self.resolve_text_with_diagnostics(text_code, options);
        for diagnostic in &diagnostics {
            error!(target: "lingo", "{diagnostic}");
        }
        text
    }

    /// Like [`Localizer::resolve_text`], returning the diagnostics instead of
    /// logging them.
    pub fn resolve_text_with_diagnostics(
        &self,
        text_code: &str,
        options: &TextOptions,
    ) -> (String, Vec<ResolveError>) {
        let (Some(corpus), Some(codes)) = (&self.corpus, &self.codes) else {
            return (text_code.to_string(), vec![ResolveError::Uninitialized]);
        };
        let mut diagnostics = Vec::new();
        let text = resolver::render(
            text_code,
            options,
            corpus,
            codes,
            &self.language,
            &mut diagnostics,
        );
        (text, diagnostics)
    }

    /// Create a [`LiveText`] handle that re-resolves on language change.
    ///
    /// A handle built with `options.language` set is pinned to that language
    /// and never updates.
    pub fn live_text(&self, text_code: impl Into<String>, options: TextOptions) -> LiveText {
        LiveText::new(self, text_code.into(), options)
    }

    // =========================================================================
    // Verification
    // =========================================================================

    /// Run the corpus verifier, logging every finding.
    ///
    /// Completeness gaps log at error level and redundancy findings at warn
    /// level. Returns the findings; empty (with an error log) when no corpus
    /// is loaded.
    pub fn verify(&self, options: &VerifyOptions) -> Vec<VerifyFinding> {
        let Some(corpus) = &self.corpus else {
            error!(target: "lingo", "cannot verify: no corpus loaded");
            return Vec::new();
        };
        let findings = verify_corpus(corpus, options);
        for finding in &findings {
            if finding.is_warning() {
                warn!(target: "lingo", "{finding}");
            } else {
                error!(target: "lingo", "{finding}");
            }
        }
        findings
    }
}
