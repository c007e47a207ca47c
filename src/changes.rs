//! Library change notifications with explicit listener lifetime
//!
//! Listeners are held by strong reference until explicitly unsubscribed;
//! there is no weak-reference cleanup. Each subscription returns a handle
//! that must be passed back to remove the listener deterministically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// A change observed in the photo library
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryChange {
    /// The set of collections changed
    CollectionsChanged,
    /// Assets within one collection changed
    AssetsChanged { collection_id: String },
}

/// Callback invoked for every published change
pub type ChangeListener = Box<dyn Fn(&LibraryChange) + Send + Sync>;

/// Opaque registration handle returned by [`ChangeFeed::subscribe`]
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerHandle {
    id: u64,
}

/// Registry of library change listeners
pub struct ChangeFeed {
    listeners: Mutex<Vec<(u64, ChangeListener)>>,
    next_id: AtomicU64,
}

impl ChangeFeed {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Registers a listener and returns its handle
    pub fn subscribe(&self, listener: ChangeListener) -> ListenerHandle {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, listener));
            log::debug!("Change listener {} subscribed", id);
        }
        ListenerHandle { id }
    }

    /// Removes a listener; returns whether it was still registered
    ///
    /// Consumes the handle, so a listener cannot be removed twice.
    pub fn unsubscribe(&self, handle: ListenerHandle) -> bool {
        if let Ok(mut listeners) = self.listeners.lock() {
            let before = listeners.len();
            listeners.retain(|(id, _)| *id != handle.id);
            let removed = listeners.len() < before;
            if removed {
                log::debug!("Change listener {} unsubscribed", handle.id);
            }
            removed
        } else {
            false
        }
    }

    /// Invokes all currently registered listeners
    pub fn notify(&self, change: &LibraryChange) {
        if let Ok(listeners) = self.listeners.lock() {
            log::debug!("Notifying {} listeners of {:?}", listeners.len(), change);
            for (_, listener) in listeners.iter() {
                listener(change);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    #[test]
    fn test_subscribed_listener_receives_changes() {
        let feed = ChangeFeed::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);

        let _handle = feed.subscribe(Box::new(move |change| {
            assert_eq!(*change, LibraryChange::CollectionsChanged);
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        feed.notify(&LibraryChange::CollectionsChanged);
        feed.notify(&LibraryChange::CollectionsChanged);

        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unsubscribed_listener_stops_receiving() {
        let feed = ChangeFeed::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);

        let handle = feed.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        feed.notify(&LibraryChange::CollectionsChanged);
        assert!(feed.unsubscribe(handle));

        feed.notify(&LibraryChange::CollectionsChanged);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert_eq!(feed.listener_count(), 0);
    }

    #[test]
    fn test_listeners_are_independent() {
        let feed = ChangeFeed::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let first_counter = Arc::clone(&first);
        let handle = feed.subscribe(Box::new(move |_| {
            first_counter.fetch_add(1, Ordering::SeqCst);
        }));

        let second_counter = Arc::clone(&second);
        let _keep = feed.subscribe(Box::new(move |_| {
            second_counter.fetch_add(1, Ordering::SeqCst);
        }));

        feed.notify(&LibraryChange::AssetsChanged {
            collection_id: "roll".to_string(),
        });
        feed.unsubscribe(handle);
        feed.notify(&LibraryChange::AssetsChanged {
            collection_id: "roll".to_string(),
        });

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }
}
