//! Process-wide localizer storage.
//!
//! Provides thread-safe access to a shared [`Localizer`] instance for
//! applications that want module-level init/lookup calls instead of threading
//! a service handle everywhere. Live handles created here observe language
//! changes made through [`set_language`].
//!
//! Observers run while the global lock is held and receive the localizer as
//! their first argument; they must use that reference rather than calling
//! back into these module-level helpers.

use std::sync::{LazyLock, RwLock};

use crate::live::LiveText;
use crate::localizer::Localizer;
use crate::types::{LanguageCodeSet, TextOptions, TranslationCorpus};
use crate::verify::{VerifyFinding, VerifyOptions};

static GLOBAL_LOCALIZER: LazyLock<RwLock<Localizer>> =
    LazyLock::new(|| RwLock::new(Localizer::new()));

/// Provides read access to the global localizer.
pub fn with_localizer<T>(f: impl FnOnce(&Localizer) -> T) -> T {
    let guard = GLOBAL_LOCALIZER.read().expect("global localizer lock poisoned");
    f(&guard)
}

/// Provides write access to the global localizer.
pub fn with_localizer_mut<T>(f: impl FnOnce(&mut Localizer) -> T) -> T {
    let mut guard = GLOBAL_LOCALIZER.write().expect("global localizer lock poisoned");
    f(&mut guard)
}

/// Supplies the corpus and language-code set to the global localizer.
pub fn init(corpus: TranslationCorpus, codes: LanguageCodeSet) {
    with_localizer_mut(|localizer| localizer.init(corpus, codes));
}

/// Sets the active language of the global localizer, notifying observers.
pub fn set_language(language: impl Into<String>) {
    with_localizer_mut(|localizer| localizer.set_language(language));
}

/// Returns the active language of the global localizer.
pub fn language() -> String {
    with_localizer(|localizer| localizer.language().to_owned())
}

/// Resolves a text code against the global localizer.
pub fn resolve_text(text_code: &str, options: &TextOptions) -> String {
    with_localizer(|localizer| localizer.resolve_text(text_code, options))
}

/// Creates a live text handle tracking the global localizer's language.
pub fn live_text(text_code: impl Into<String>, options: TextOptions) -> LiveText {
    with_localizer(|localizer| localizer.live_text(text_code, options))
}

/// Runs the corpus verifier against the global localizer's corpus.
pub fn verify(options: &VerifyOptions) -> Vec<VerifyFinding> {
    with_localizer(|localizer| localizer.verify(options))
}
