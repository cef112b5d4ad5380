//! `${key}` placeholder templates, parsed with winnow.
//!
//! Templates are flat: literal text interleaved with named placeholders.
//! Substitution matches the original template-engine defaults — missing keys
//! render as the empty string, surrounding whitespace inside `${ ... }` is
//! ignored, and a template without placeholders passes through unchanged.
//! An unterminated `${` is a parse error; callers report it and keep the raw
//! template text rather than failing the resolution.

use std::collections::HashMap;

use thiserror::Error;
use winnow::combinator::{alt, cut_err, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::types::Value;

/// Error for a template whose placeholder syntax cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid template at offset {offset}: {message}")]
pub struct TemplateError {
    /// Byte offset of the failing position.
    pub offset: usize,
    /// Human-readable description.
    pub message: String,
}

/// A parsed template: literal runs interleaved with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

/// One parsed template segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text copied through unchanged.
    Literal(String),
    /// A named `${key}` placeholder.
    Placeholder(String),
}

impl Template {
    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitute values into the template.
    ///
    /// Placeholders with no matching key render as the empty string.
    pub fn render(&self, values: &HashMap<String, Value>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(key) => {
                    if let Some(value) = values.get(key) {
                        out.push_str(&value.to_string());
                    }
                }
            }
        }
        out
    }
}

/// Parse a template string into segments.
pub fn parse_template(input: &str) -> Result<Template, TemplateError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(parsed) if remaining.is_empty() => Ok(parsed),
        Ok(_) => Err(TemplateError {
            offset: input.len() - remaining.len(),
            message: "unexpected trailing input".to_string(),
        }),
        Err(_) => Err(TemplateError {
            offset: input.len() - remaining.len(),
            message: "unterminated '${' placeholder".to_string(),
        }),
    }
}

/// Parse and substitute in one step.
///
/// # Example
///
/// ```
/// use lingo::{interpolate, values};
///
/// let out = interpolate("Hello ${name}", &values! { "name" => "Ada" }).unwrap();
/// assert_eq!(out, "Hello Ada");
///
/// let out = interpolate("Hello ${name}", &lingo::values! {}).unwrap();
/// assert_eq!(out, "Hello ");
/// ```
pub fn interpolate(
    template: &str,
    values: &HashMap<String, Value>,
) -> Result<String, TemplateError> {
    // Fast path: nothing that could open a placeholder.
    if !template.contains("${") {
        return Ok(template.to_string());
    }
    Ok(parse_template(template)?.render(values))
}

/// Parse a full template into merged segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            Segment::Placeholder(_) => result.push(segment),
        }
    }
    result
}

/// Parse a single segment: a placeholder, or one literal character.
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse `${ key }`. Once `${` is seen the closing brace is mandatory.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    preceded("${", cut_err(terminated(take_while(0.., |c| c != '}'), '}')))
        .map(|key: &str| Segment::Placeholder(key.trim().to_string()))
        .parse_next(input)
}

/// Parse a single literal character. A lone `$` or `}` is literal text.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
