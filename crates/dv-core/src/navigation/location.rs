use serde::{Deserialize, Serialize};

use super::ROOT_PATH;

/// Why a navigation happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationState {
    /// Reached after a successful save
    IsSaving,
    /// Re-opening the visualization that is already shown
    IsOpening,
    /// Starting over on the "new" view
    IsResetting,
}

/// A history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    pub state: Option<LocationState>,
}

impl Location {
    pub fn new(pathname: impl Into<String>, state: Option<LocationState>) -> Self {
        Self {
            pathname: pathname.into(),
            state,
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_PATH, None)
    }

    /// Visualization id encoded in the path, if any
    pub fn visualization_id(&self) -> Option<&str> {
        self.pathname
            .strip_prefix('/')
            .filter(|id| !id.is_empty())
    }
}
