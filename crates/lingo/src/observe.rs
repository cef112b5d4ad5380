//! Observer registry for active-language change notification.
//!
//! Observers are invoked synchronously, in registration order, every time the
//! active language changes. Notification snapshots the registry first, so an
//! observer registered during a pass is not invoked until the next one.
//! Registering the same logic twice yields two entries that both fire.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, Mutex, Weak};

use crate::localizer::Localizer;

/// Callback invoked with the service and the newly active language code.
pub type LanguageObserver = dyn FnMut(&Localizer, &str) + Send;

/// Identity of one registered observer. Removal is by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of registered observers.
#[derive(Default)]
pub(crate) struct ObserverList {
    next_id: u64,
    entries: Vec<(SubscriptionId, Arc<Mutex<LanguageObserver>>)>,
}

impl ObserverList {
    /// Append an observer, returning its id.
    pub(crate) fn insert(&mut self, callback: Arc<Mutex<LanguageObserver>>) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, callback));
        id
    }

    /// Remove an observer by id. No-op if not present.
    pub(crate) fn remove(&mut self, id: SubscriptionId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Snapshot of the registered callbacks, in registration order.
    pub(crate) fn snapshot(&self) -> Vec<Arc<Mutex<LanguageObserver>>> {
        self.entries
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect()
    }

    /// Number of registered observers.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Capability returned by [`Localizer::subscribe`].
///
/// Releasing the token removes exactly the observer it was issued for.
/// Dropping the token has the same effect, so observation is scoped to the
/// token's lifetime; [`Subscription::release`] is idempotent.
pub struct Subscription {
    registry: Weak<Mutex<ObserverList>>,
    id: Option<SubscriptionId>,
}

impl Subscription {
    pub(crate) fn new(registry: Weak<Mutex<ObserverList>>, id: SubscriptionId) -> Self {
        Subscription {
            registry,
            id: Some(id),
        }
    }

    /// Remove the observer from the registry. Calling twice is a no-op.
    pub fn release(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(registry) = self.registry.upgrade() {
            registry
                .lock()
                .expect("observer registry lock poisoned")
                .remove(id);
        }
    }

    /// The observer's id while the subscription is still held.
    pub fn id(&self) -> Option<SubscriptionId> {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl Debug for Subscription {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
