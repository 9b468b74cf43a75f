//! Navigation between the "new", "open by id" and "just saved" views

mod engine;
mod location;
mod subscriber;

pub use engine::HistoryEngine;
pub use location::{Location, LocationState};
pub use subscriber::NavigationSubscriber;

/// Path of the empty "new visualization" view
pub const ROOT_PATH: &str = "/";

/// Path of the view showing a stored visualization
pub fn visualization_path(id: &str) -> String {
    format!("/{id}")
}

/// Browser-style history the actions navigate through
pub trait History: Send + Sync {
    /// Add a new entry
    fn push(&self, path: &str, state: Option<LocationState>);

    /// Overwrite the current entry
    fn replace(&self, path: &str, state: Option<LocationState>);

    /// The current entry
    fn location(&self) -> Location;
}

/// Open a stored visualization, reloading it when it is already shown
pub fn open_visualization(history: &dyn History, id: &str) {
    let path = visualization_path(id);
    if history.location().pathname == path {
        history.replace(&path, Some(LocationState::IsOpening));
    } else {
        history.push(&path, None);
    }
}

/// Start a new visualization, resetting the view when already on it
pub fn new_visualization(history: &dyn History) {
    if history.location().pathname == ROOT_PATH {
        history.replace(ROOT_PATH, Some(LocationState::IsResetting));
    } else {
        history.push(ROOT_PATH, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_pushes_then_replaces() {
        let history = HistoryEngine::new();

        open_visualization(&history, "v1");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location().pathname, "/v1");

        open_visualization(&history, "v1");
        assert_eq!(history.len(), 2);
        assert_eq!(history.location().state, Some(LocationState::IsOpening));
    }

    #[test]
    fn test_new_resets_root() {
        let history = HistoryEngine::new();

        new_visualization(&history);
        assert_eq!(history.len(), 1);
        assert_eq!(history.location().state, Some(LocationState::IsResetting));

        open_visualization(&history, "v9");
        new_visualization(&history);
        assert_eq!(history.len(), 3);
        assert_eq!(history.location(), Location::root());
    }
}
