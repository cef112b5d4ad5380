//! Live text handles that re-resolve when the active language changes.

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::sync::{Arc, Mutex};

use crate::localizer::Localizer;
use crate::observe::Subscription;
use crate::types::TextOptions;

/// Shared state between a handle and its observer callback.
pub(crate) struct LiveTextInner {
    pub(crate) text_code: String,
    pub(crate) options: TextOptions,
    pub(crate) current: Mutex<String>,
}

/// A resolved text that tracks the active language.
///
/// While live, the handle holds a subscription on the owning [`Localizer`]
/// and overwrites its cached rendering on every language change. A handle
/// created with a language override is pinned: it resolves once and never
/// subscribes. Read the current rendering with [`LiveText::current_text`] at
/// each read site; `Display` delegates to it.
///
/// Disposal is explicit via [`LiveText::dispose`] and implicit on drop; both
/// release the subscription, after which the cached rendering stays frozen.
pub struct LiveText {
    inner: Arc<LiveTextInner>,
    subscription: Option<Subscription>,
}

impl LiveText {
    /// Resolve once and, unless pinned to a fixed language, subscribe for
    /// re-resolution on language change.
    pub(crate) fn new(localizer: &Localizer, text_code: String, options: TextOptions) -> Self {
        let current = localizer.resolve_text(&text_code, &options);
        let inner = Arc::new(LiveTextInner {
            text_code,
            options,
            current: Mutex::new(current),
        });

        let subscription = if inner.options.language.is_none() {
            let weak = Arc::downgrade(&inner);
            Some(localizer.subscribe(move |localizer, _language| {
                if let Some(inner) = weak.upgrade() {
                    let text = localizer.resolve_text(&inner.text_code, &inner.options);
                    *inner.current.lock().expect("live text lock poisoned") = text;
                }
            }))
        } else {
            None
        };

        LiveText {
            inner,
            subscription,
        }
    }

    /// The latest rendering.
    pub fn current_text(&self) -> String {
        self.inner
            .current
            .lock()
            .expect("live text lock poisoned")
            .clone()
    }

    /// The text code this handle resolves.
    pub fn text_code(&self) -> &str {
        &self.inner.text_code
    }

    /// True while the handle still follows language changes.
    ///
    /// Pinned and disposed handles both return false.
    pub fn is_live(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stop following language changes and release the subscription.
    ///
    /// Idempotent; the cached rendering remains readable afterwards.
    pub fn dispose(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }
    }
}

impl Display for LiveText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.current_text())
    }
}

impl Debug for LiveText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("LiveText")
            .field("text_code", &self.inner.text_code)
            .field("current", &self.current_text())
            .field("live", &self.is_live())
            .finish()
    }
}
