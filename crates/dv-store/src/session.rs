//! Multi-step transitions against the backend and the history
//!
//! Every operation catches backend failures at its own boundary, publishes
//! them into the store, and also hands a typed result back to the caller.

use chrono::Local;
use std::sync::Arc;

use dv_core::events::events::{
    LoadFailed, VisualizationDeleted, VisualizationLoaded, VisualizationSaved,
};
use dv_core::layout::{adapt_visualization_axes, convert_ou_levels_to_uids, OrgUnitLevel};
use dv_core::navigation::{self, History, LocationState};
use dv_core::{
    validate_layout, ApiError, LoadError, ValidationError, Visualization, VisualizationApi,
};

use crate::action::Action;
use crate::reducers::snackbar::SnackbarMessage;
use crate::selectors;
use crate::state::Store;

/// Name and description entered in the save or rename dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveDetails {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SaveDetails {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self { name, description }
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Editing session over one store
pub struct EditingSession {
    store: Arc<Store>,
    api: Arc<dyn VisualizationApi>,
    history: Arc<dyn History>,
}

impl EditingSession {
    pub fn new(store: Arc<Store>, api: Arc<dyn VisualizationApi>, history: Arc<dyn History>) -> Self {
        Self { store, api, history }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    pub fn history(&self) -> &Arc<dyn History> {
        &self.history
    }

    /// Fetch a visualization and publish it as both saved and working copy
    ///
    /// On failure the store is fully reset and the mapped error is shown.
    pub async fn load(
        &self,
        id: &str,
        ou_levels: &[OrgUnitLevel],
    ) -> Result<Arc<Visualization>, LoadError> {
        tracing::info!("Loading visualization {}", id);

        let mut visualization = match self.api.fetch_visualization(id).await {
            Ok(visualization) => visualization,
            Err(api_error) => {
                let error = LoadError::from(&api_error);
                tracing::error!("Failed to load visualization {}: {}", id, api_error);
                self.clear(Some(error.clone()));
                self.store.events().publish(LoadFailed { error: error.clone() });
                return Err(error);
            }
        };

        self.store.dispatch(Action::SetPluginLoading(true));

        convert_ou_levels_to_uids(ou_levels, &mut visualization);
        adapt_visualization_axes(&mut visualization);

        self.record_view(visualization.id.clone().unwrap_or_else(|| id.to_string()));

        let visualization = Arc::new(visualization);
        self.store.dispatch_all([
            Action::SetVisualization(visualization.clone()),
            Action::SetCurrent(visualization.clone()),
            Action::SetUiFromVisualization(visualization.clone()),
            Action::ClearLoadError,
        ]);

        self.store.events().publish(VisualizationLoaded {
            id: id.to_string(),
            vis_type: visualization.vis_type,
        });

        Ok(visualization)
    }

    /// Record a view event without waiting for it
    fn record_view(&self, id: String) {
        let api = self.api.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = api.post_data_statistics(&id).await {
                        tracing::warn!("Failed to record view of {}: {}", id, e);
                    }
                });
            }
            Err(_) => tracing::warn!("No runtime to record view of {}", id),
        }
    }

    /// Reset to a pristine "new visualization" state
    pub fn clear(&self, error: Option<LoadError>) {
        let settings = self.store.read(|state| state.settings.clone());

        let loader = match error {
            Some(error) => Action::SetLoadError(error),
            None => Action::ClearLoadError,
        };

        self.store.dispatch_all([
            loader,
            Action::ClearVisualization,
            Action::ClearCurrent,
            Action::ClearUi(settings),
        ]);
    }

    /// Change name and description of both the saved and the working copy
    ///
    /// A working copy equal to the saved one stays equal, so a rename alone
    /// never makes the visualization dirty.
    pub fn rename(&self, details: &SaveDetails) {
        let (visualization, current) = self
            .store
            .read(|state| (state.visualization.clone(), state.current.clone()));

        let unchanged = matches!(
            selectors::visualization_state(visualization.as_deref(), current.as_deref()),
            selectors::VisualizationState::Saved
        );

        let apply = |source: &Arc<Visualization>| {
            let mut updated = Visualization::clone(source);
            if let Some(name) = details.name() {
                updated.name = Some(name.to_string());
            }
            if let Some(description) = details.description() {
                updated.description = Some(description.to_string());
            }
            Arc::new(updated)
        };

        let updated_visualization = visualization.as_ref().map(apply);
        let updated_current = if unchanged {
            updated_visualization.clone()
        } else {
            current.as_ref().map(apply)
        };

        let mut actions = Vec::new();
        if let Some(visualization) = updated_visualization {
            actions.push(Action::SetVisualization(visualization));
        }
        if let Some(current) = updated_current {
            actions.push(Action::SetCurrent(current));
        }
        actions.push(Action::ReceivedSnackbarMessage(SnackbarMessage::success(
            "Rename successful",
        )));

        self.store.dispatch_all(actions);
    }

    /// Persist the working copy, as a new object when `as_copy` is set
    ///
    /// On success navigates to the stored object and returns its uid.
    pub async fn save(&self, details: &SaveDetails, as_copy: bool) -> Result<String, LoadError> {
        self.store.dispatch(Action::SetPluginLoading(true));

        let Some(current) = self.store.read(|state| state.current.clone()) else {
            tracing::error!("Nothing to save");
            return Err(self.fail_save());
        };

        let mut visualization = current.to_persistable();
        if as_copy {
            visualization = visualization.prepare_for_save_as();
        }

        let name = details
            .name()
            .map(str::to_string)
            .or_else(|| visualization.name.clone().filter(|n| !n.is_empty()))
            .unwrap_or_else(|| {
                Visualization::untitled_name(visualization.vis_type, Local::now().date_naive())
            });
        visualization.name = Some(name);

        if let Some(description) = details.description() {
            visualization.description = Some(description.to_string());
        }

        let response = match self.api.save_visualization(&visualization).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Failed to save visualization: {}", e);
                return Err(self.fail_save());
            }
        };

        let Some(uid) = response.saved_uid() else {
            tracing::error!("Save not acknowledged, status {}", response.status);
            return Err(self.fail_save());
        };

        let path = navigation::visualization_path(uid);
        if as_copy {
            self.history.push(&path, Some(LocationState::IsSaving));
        } else {
            self.history.replace(&path, Some(LocationState::IsSaving));
        }

        tracing::info!("Saved visualization {}", uid);
        self.store.events().publish(VisualizationSaved {
            uid: uid.to_string(),
            as_copy,
        });

        Ok(uid.to_string())
    }

    // Save failures carry no field-level detail from the backend yet
    fn fail_save(&self) -> LoadError {
        let error = LoadError::GenericServer;
        self.store.dispatch_all([
            Action::SetPluginLoading(false),
            Action::SetLoadError(error.clone()),
        ]);
        self.store.events().publish(LoadFailed { error: error.clone() });
        error
    }

    /// Delete the working copy's object and return to the "new" view
    ///
    /// A working copy that was never saved has nothing to delete; it is
    /// refused with a warning and the store is left as is.
    pub async fn delete(&self) -> Result<(), ApiError> {
        let (id, name) = self.store.read(|state| {
            let id = state.current.as_ref().and_then(|c| c.id.clone());
            (id, selectors::current_name(state).map(str::to_string))
        });

        let Some(id) = id else {
            let error = ApiError::not_found("This visualization has not been saved yet");
            tracing::warn!("Refusing to delete an unsaved visualization");
            self.store.dispatch(Action::ReceivedSnackbarMessage(
                SnackbarMessage::for_delete_error(&error),
            ));
            return Err(error);
        };

        if let Err(e) = self.api.delete_visualization(&id).await {
            tracing::error!("Failed to delete visualization {}: {}", id, e);
            self.store.dispatch(Action::ReceivedSnackbarMessage(
                SnackbarMessage::for_delete_error(&e),
            ));
            return Err(e);
        }

        let name = name.unwrap_or_else(|| id.clone());
        self.store.dispatch(Action::ReceivedSnackbarMessage(SnackbarMessage::success(
            format!("\"{name}\" successfully deleted."),
        )));
        self.history.push(navigation::ROOT_PATH, None);

        self.store.events().publish(VisualizationDeleted { id, name });

        Ok(())
    }

    /// Build a new working copy from the UI selection
    ///
    /// The layout is validated first; an invalid layout leaves the store
    /// untouched.
    pub fn update_current(&self) -> Result<Arc<Visualization>, ValidationError> {
        let candidate = self.store.read(|state| {
            let base = state.current.as_deref().or(state.visualization.as_deref());
            state.ui.to_visualization(base, &state.metadata)
        });

        validate_layout(&candidate.layout())?;

        let current = Arc::new(candidate);
        self.store.dispatch(Action::SetCurrent(current.clone()));
        Ok(current)
    }

    /// Navigate to a stored visualization
    pub fn open(&self, id: &str) {
        navigation::open_visualization(self.history.as_ref(), id);
    }

    /// Navigate to the "new visualization" view
    pub fn start_new(&self) {
        navigation::new_visualization(self.history.as_ref());
    }
}
