//! Lingo resolves opaque text codes into user-displayable strings.
//!
//! A [`TranslationCorpus`] maps text codes to per-language entries. Resolution
//! walks a three-tier fallback chain (explicit language, active language,
//! corpus default), selects a variant key, interpolates `${key}` placeholders,
//! and applies an optional case transform. Resolution never fails toward the
//! caller: missing codes degrade to the code itself and failures are surfaced
//! through diagnostics.
//!
//! The [`Localizer`] service owns the corpus, the active language, and the
//! observer registry driving [`LiveText`] handles that re-resolve whenever
//! the active language changes. [`verify_corpus`] checks a corpus for
//! cross-language completeness gaps and intra-language redundancy.
//!
//! # Example
//!
//! ```
//! use lingo::{LanguageCodeSet, Localizer, TextOptions, TranslationCorpus, values};
//!
//! let corpus: TranslationCorpus = serde_json::from_value(serde_json::json!({
//!     "defaultLanguage": "en",
//!     "languages": [
//!         { "codes": ["en"], "dictionary": {
//!             "GREET": { "value": "hello ${name}" }
//!         }},
//!         { "codes": ["fr"], "dictionary": {
//!             "GREET": { "value": "bonjour ${name}" }
//!         }}
//!     ]
//! })).unwrap();
//!
//! let mut localizer = Localizer::new();
//! localizer.init(corpus, LanguageCodeSet::from_codes(["en", "fr"]));
//!
//! let options = TextOptions::builder()
//!     .insert_values(values! { "name" => "Ada" })
//!     .build();
//! assert_eq!(localizer.resolve_text("GREET", &options), "hello Ada");
//!
//! localizer.set_language("fr");
//! assert_eq!(localizer.resolve_text("GREET", &options), "bonjour Ada");
//! ```

pub mod format;
pub mod global;
pub mod live;
pub mod localizer;
pub mod observe;
pub mod resolver;
pub mod template;
pub mod types;
pub mod verify;

pub use live::LiveText;
pub use localizer::Localizer;
pub use observe::{Subscription, SubscriptionId};
pub use resolver::{ResolveError, compute_suggestions};
pub use template::{Template, TemplateError, interpolate};
pub use types::{
    LanguageCodeSet, LanguageEntry, TextEntry, TextOptions, Transform, TranslationCorpus, Value,
};
pub use verify::{VerifyFinding, VerifyOptions, verify_corpus};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly.
///
/// # Example
///
/// ```
/// use lingo::{Value, values};
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
