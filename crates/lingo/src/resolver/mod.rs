//! The resolution engine: language fallback plus the rendering pipeline.
//!
//! Functions here are pure over borrowed corpus state; the stateful entry
//! points live on [`crate::Localizer`].

mod engine;
mod error;

pub use engine::{lookup_entry, render, resolve_language_code};
pub use error::{ResolveError, compute_suggestions};
