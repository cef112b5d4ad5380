//! Options controlling a single text resolution.

use std::collections::HashMap;
use std::str::FromStr;

use bon::Builder;
use serde::Deserialize;
use thiserror::Error;

use super::Value;

/// The closed set of case transforms applied after interpolation.
///
/// Serialized names use the corpus convention (`capitalizeWord` etc.), so the
/// enum round-trips through config files and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Transform {
    /// Uppercase the first character, lowercase the remainder.
    Capitalize,
    /// Capitalize each space-separated word.
    CapitalizeWord,
    /// Capitalize each `". "`-separated sentence.
    CapitalizeSentence,
    /// Locale-aware full uppercase.
    Uppercase,
    /// Locale-aware full lowercase.
    Lowercase,
}

impl Transform {
    /// The serialized name of this transform.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Capitalize => "capitalize",
            Transform::CapitalizeWord => "capitalizeWord",
            Transform::CapitalizeSentence => "capitalizeSentence",
            Transform::Uppercase => "uppercase",
            Transform::Lowercase => "lowercase",
        }
    }
}

/// Error parsing a transform name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown transform '{0}', expected one of: \
     capitalize, capitalizeWord, capitalizeSentence, uppercase, lowercase"
)]
pub struct ParseTransformError(pub String);

impl FromStr for Transform {
    type Err = ParseTransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capitalize" => Ok(Transform::Capitalize),
            "capitalizeWord" => Ok(Transform::CapitalizeWord),
            "capitalizeSentence" => Ok(Transform::CapitalizeSentence),
            "uppercase" => Ok(Transform::Uppercase),
            "lowercase" => Ok(Transform::Lowercase),
            other => Err(ParseTransformError(other.to_string())),
        }
    }
}

/// Options for resolving one text code.
///
/// # Example
///
/// ```
/// use lingo::{TextOptions, Transform, values};
///
/// let options = TextOptions::builder()
///     .variant("plural")
///     .transform(Transform::Capitalize)
///     .insert_values(values! { "count" => 2 })
///     .build();
///
/// assert_eq!(options.variant, "plural");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct TextOptions {
    /// Variant key selected from the resolved entry.
    #[builder(default = "value".to_string())]
    pub variant: String,

    /// Case transform applied to the final text.
    pub transform: Option<Transform>,

    /// Pins resolution to a fixed language instead of the active one.
    pub language: Option<String>,

    /// Named values substituted into `${key}` placeholders.
    pub insert_values: Option<HashMap<String, Value>>,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions::builder().build()
    }
}
