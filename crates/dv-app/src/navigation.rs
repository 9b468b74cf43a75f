//! Navigation trail of one command run

use parking_lot::Mutex;

use dv_core::navigation::{Location, NavigationSubscriber};

/// Records every location the session navigates to
#[derive(Default)]
pub struct NavigationLog {
    visited: Mutex<Vec<Location>>,
}

impl NavigationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locations in the order they were reached
    pub fn visited(&self) -> Vec<Location> {
        self.visited.lock().clone()
    }

    pub fn last(&self) -> Option<Location> {
        self.visited.lock().last().cloned()
    }
}

impl NavigationSubscriber for NavigationLog {
    fn on_location_change(&self, location: &Location) {
        match location.state {
            Some(state) => tracing::info!("Navigated to {} ({:?})", location.pathname, state),
            None => tracing::info!("Navigated to {}", location.pathname),
        }
        self.visited.lock().push(location.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::navigation::{History, LocationState};
    use dv_core::HistoryEngine;
    use std::sync::Arc;

    #[test]
    fn test_records_pushes_and_replaces() {
        let history = HistoryEngine::new();
        let log = Arc::new(NavigationLog::new());
        history.add_subscriber(log.clone());

        history.push("/abc", None);
        history.replace("/abc", Some(LocationState::IsOpening));

        let visited = log.visited();
        assert_eq!(visited.len(), 2);
        assert_eq!(visited[1].state, Some(LocationState::IsOpening));
        assert_eq!(log.last().map(|l| l.pathname), Some("/abc".to_string()));
    }
}
