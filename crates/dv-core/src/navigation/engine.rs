//! In-memory history

use parking_lot::RwLock;
use std::sync::{Arc, Weak};

use super::{History, Location, LocationState, NavigationSubscriber};

/// History entries stored internally
#[derive(Debug, Clone)]
struct HistoryState {
    entries: Vec<Location>,
}

/// In-memory history that notifies subscribers of every change
pub struct HistoryEngine {
    state: Arc<RwLock<HistoryState>>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl HistoryEngine {
    /// Create a history positioned at the root path
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(HistoryState {
                entries: vec![Location::root()],
            })),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Copy of all entries, oldest first
    pub fn entries(&self) -> Vec<Location> {
        self.state.read().entries.clone()
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of navigation change
    ///
    /// Subscribers are called without the list locked, so they may
    /// navigate or subscribe themselves.
    fn notify_subscribers(&self) {
        let location = self.location();

        let live: Vec<Arc<dyn NavigationSubscriber>> = {
            let mut subscribers = self.subscribers.write();

            // Remove any dead weak references
            subscribers.retain(|weak| weak.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };

        for subscriber in live {
            subscriber.on_location_change(&location);
        }
    }
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl History for HistoryEngine {
    fn push(&self, path: &str, state: Option<LocationState>) {
        tracing::debug!("history push {}", path);
        self.state.write().entries.push(Location::new(path, state));
        self.notify_subscribers();
    }

    fn replace(&self, path: &str, state: Option<LocationState>) {
        tracing::debug!("history replace {}", path);
        {
            let mut history = self.state.write();
            let location = Location::new(path, state);
            match history.entries.last_mut() {
                Some(last) => *last = location,
                None => history.entries.push(location),
            }
        }
        self.notify_subscribers();
    }

    fn location(&self) -> Location {
        self.state
            .read()
            .entries
            .last()
            .cloned()
            .unwrap_or_else(Location::root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl NavigationSubscriber for Recorder {
        fn on_location_change(&self, location: &Location) {
            self.seen.lock().push(location.pathname.clone());
        }
    }

    #[test]
    fn test_subscribers_follow_changes() {
        let history = HistoryEngine::new();
        let recorder = Arc::new(Recorder { seen: Mutex::new(Vec::new()) });
        history.add_subscriber(recorder.clone());

        history.push("/abc", None);
        history.replace("/def", Some(LocationState::IsSaving));

        assert_eq!(*recorder.seen.lock(), vec!["/abc", "/def"]);
        assert_eq!(history.location().visualization_id(), Some("def"));

        drop(recorder);
        history.push("/", None);
        assert_eq!(history.location().visualization_id(), None);
    }
}
