//! Client-side state store for the visualization editor
//!
//! The store keeps a single normalized snapshot: the last-saved
//! visualization, the working copy being edited, the UI selection, the
//! metadata cache, the user, and transient loader/snackbar state.
//! [`EditingSession`] drives multi-step transitions (load, save, rename,
//! delete, clear) against the backend and the navigation history.

pub mod action;
pub mod reducers;
pub mod selectors;
pub mod session;
pub mod state;

pub use action::Action;
pub use reducers::loader::LoaderState;
pub use reducers::metadata::{Metadata, MetadataItem};
pub use reducers::snackbar::{SnackbarMessage, SnackbarVariant};
pub use reducers::ui::{UiLayout, UiState};
pub use selectors::{SeriesSetupItem, VisualizationState};
pub use session::{EditingSession, SaveDetails};
pub use state::{AppState, Store};
