//! Activity notifications shared by the header and any page that reports
//! activity.
//!
//! DESIGN
//! ======
//! One `NotificationHub` is created by the app root and handed out through
//! Leptos context. Consumers subscribe for unread-count changes and must
//! unsubscribe when they unmount; there is no module-global instance.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::MessageId;

/// One activity entry shown in the notifications popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub read: bool,
}

/// Handle returned by [`NotificationHub::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(usize) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    items: Vec<Notification>,
    next_id: u64,
    next_subscription: u64,
    announced_through: Option<MessageId>,
    listeners: BTreeMap<SubscriptionId, Listener>,
}

impl HubInner {
    fn unread(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    fn push(&mut self, title: String, body: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification { id, title, body, read: false });
        id
    }
}

/// Observable notification store with explicit subscribe/unsubscribe.
#[derive(Clone, Default)]
pub struct NotificationHub {
    inner: Arc<Mutex<HubInner>>,
}

impl std::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationHub").field("unread", &self.unread_count()).finish()
    }
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register `listener`; it is called right away with the current unread
    /// count and again after every change until unsubscribed.
    pub fn subscribe(&self, listener: impl Fn(usize) + Send + Sync + 'static) -> SubscriptionId {
        let listener: Listener = Arc::new(listener);
        let (id, unread) = {
            let mut inner = self.lock();
            let id = SubscriptionId(inner.next_subscription);
            inner.next_subscription += 1;
            inner.listeners.insert(id, listener.clone());
            (id, inner.unread())
        };
        listener(unread);
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().listeners.remove(&id).is_some()
    }

    /// Add an unread notification and return its id.
    pub fn publish(&self, title: impl Into<String>, body: impl Into<String>) -> u64 {
        let id = self.lock().push(title.into(), body.into());
        self.notify();
        id
    }

    /// Newest message id already covered by an activity notification.
    pub fn announced_through(&self) -> Option<MessageId> {
        self.lock().announced_through
    }

    /// Publish activity covering messages up to `through`, unless a previous
    /// announcement already reached that id. Returns the notification id.
    pub fn publish_activity(
        &self,
        through: MessageId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Option<u64> {
        let id = {
            let mut inner = self.lock();
            if inner.announced_through.is_some_and(|mark| mark >= through) {
                return None;
            }
            inner.announced_through = Some(through);
            inner.push(title.into(), body.into())
        };
        self.notify();
        Some(id)
    }

    pub fn mark_all_read(&self) {
        let changed = {
            let mut inner = self.lock();
            let mut changed = false;
            for item in inner.items.iter_mut().filter(|n| !n.read) {
                item.read = true;
                changed = true;
            }
            changed
        };
        if changed {
            self.notify();
        }
    }

    pub fn unread_count(&self) -> usize {
        self.lock().unread()
    }

    /// Newest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        let mut items = self.lock().items.clone();
        items.reverse();
        items
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }

    // Listeners run outside the lock so they may call back into the hub.
    fn notify(&self) {
        let (listeners, unread) = {
            let inner = self.lock();
            (inner.listeners.values().cloned().collect::<Vec<_>>(), inner.unread())
        };
        for listener in listeners {
            listener(unread);
        }
    }
}
