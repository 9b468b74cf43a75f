//! Application state and the store holding it

use parking_lot::RwLock;
use std::sync::Arc;

use dv_core::events::events::StateChanged;
use dv_core::events::EventBus;
use dv_core::{Settings, User, Visualization};

use crate::action::Action;
use crate::reducers::{
    self, loader::LoaderState, metadata::Metadata, snackbar::SnackbarMessage, ui::UiState,
};
use crate::selectors::{self, VisualizationState};

/// Normalized snapshot of the editor
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Last saved visualization, `None` until one is loaded or saved
    pub visualization: Option<Arc<Visualization>>,

    /// Working copy, `None` while nothing has been built
    pub current: Option<Arc<Visualization>>,

    pub ui: UiState,
    pub metadata: Metadata,
    pub settings: Settings,
    pub user: User,
    pub loader: LoaderState,
    pub snackbar: Option<SnackbarMessage>,
}

impl AppState {
    pub fn visualization_state(&self) -> VisualizationState {
        selectors::visualization_state(self.visualization.as_deref(), self.current.as_deref())
    }

    /// Whether the working copy differs from the saved one
    pub fn is_dirty(&self) -> bool {
        self.visualization_state() == VisualizationState::Dirty
    }
}

/// Single-writer store
///
/// Actions are applied synchronously under one write lock, so a batch
/// passed to [`Store::dispatch_all`] is observed by readers either
/// entirely or not at all. Subscribers are told about the change after
/// the lock is released.
pub struct Store {
    state: RwLock<AppState>,
    events: Arc<EventBus>,
}

impl Store {
    /// Create a store with default state
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state: RwLock::new(state),
            events: Arc::new(EventBus::new()),
        }
    }

    /// Event bus on which [`StateChanged`] and action outcomes are published
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    /// Run a closure against the current state
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let state = self.state.read();
        f(&*state)
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn dispatch(&self, action: Action) {
        self.dispatch_all([action]);
    }

    /// Apply several actions as one transition
    pub fn dispatch_all<I>(&self, actions: I)
    where
        I: IntoIterator<Item = Action>,
    {
        let mut applied = Vec::new();
        {
            let mut state = self.state.write();
            for action in actions {
                tracing::debug!("dispatch {}", action.name());
                reducers::reduce(&mut state, &action);
                applied.push(action.name());
            }
        }

        if !applied.is_empty() {
            self.events.publish(StateChanged { actions: applied });
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::VisualizationType;
    use parking_lot::Mutex;

    #[test]
    fn test_batch_publishes_one_change() {
        let store = Store::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        store.events().subscribe_fn(move |event: &StateChanged| {
            sink.lock().push(event.actions.clone());
        });

        let vis = Arc::new(Visualization::new(VisualizationType::Pie));
        store.dispatch_all([
            Action::SetVisualization(vis.clone()),
            Action::SetCurrent(vis),
        ]);

        assert_eq!(*seen.lock(), vec![vec!["SET_VISUALIZATION", "SET_CURRENT"]]);
        assert_eq!(store.read(AppState::visualization_state), VisualizationState::Saved);
    }

    #[test]
    fn test_subscriber_can_dispatch() {
        let store = Arc::new(Store::new());
        store.dispatch(Action::ReceivedSnackbarMessage(SnackbarMessage::success("Saved")));

        let weak = Arc::downgrade(&store);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.events().subscribe_fn(move |event: &StateChanged| {
            sink.lock().extend(event.actions.iter().copied());
            if event.actions.contains(&"SET_LOADING") {
                if let Some(store) = weak.upgrade() {
                    store.dispatch(Action::ClearSnackbar);
                }
            }
        });

        store.dispatch(Action::SetLoading(true));

        let state = store.snapshot();
        assert!(state.loader.is_loading);
        assert!(state.snackbar.is_none());
        assert_eq!(*seen.lock(), vec!["SET_LOADING", "CLEAR_SNACKBAR"]);
    }
}
