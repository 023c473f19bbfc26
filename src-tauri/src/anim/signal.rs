//! Observable cell with settle-only notification
//!
//! Writes through `set` are silent. Subscribers hear about the value only
//! when the owner calls `settle`, and only if it differs from what they
//! were last told. Transient values set and reverted between two settles
//! are never observed.

use std::fmt;

pub type SubscriptionId = usize;

type Listener<T> = Box<dyn FnMut(&T) + Send>;

pub struct Signal<T> {
    value: T,
    published: T,
    listeners: Vec<(SubscriptionId, Listener<T>)>,
    next_id: SubscriptionId,
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            published: value.clone(),
            value,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Update the value without notifying anyone
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Publish the current value if it changed since the last publish.
    /// Returns whether listeners were called.
    pub fn settle(&mut self) -> bool {
        if self.value == self.published {
            return false;
        }
        self.published = self.value.clone();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.value);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + Send + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &self.value)
            .field("published", &self.published)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
