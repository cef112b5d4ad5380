//! Core data types: the translation corpus, resolution options, and values.

mod corpus;
mod options;
mod value;

pub use corpus::{LanguageCodeSet, LanguageEntry, TextEntry, TranslationCorpus};
pub use options::{ParseTransformError, TextOptions, Transform};
pub use value::Value;
