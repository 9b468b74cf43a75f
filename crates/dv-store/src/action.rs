//! Actions understood by the reducers

use std::sync::Arc;

use dv_core::model::{ChartOptions, Visualization, VisualizationType};
use dv_core::user::ExternalUser;
use dv_core::{LoadError, Settings};

use crate::reducers::metadata::Metadata;
use crate::reducers::snackbar::SnackbarMessage;
use crate::reducers::ui::UiLayout;

/// A synchronous state transition
#[derive(Debug, Clone)]
pub enum Action {
    // visualization
    SetVisualization(Arc<Visualization>),
    ClearVisualization,

    // current
    SetCurrent(Arc<Visualization>),
    ClearCurrent,

    // ui
    SetUiFromVisualization(Arc<Visualization>),
    ClearUi(Settings),
    SetUiType(VisualizationType),
    SetUiLayout(UiLayout),
    SetUiItems { dimension: String, items: Vec<String> },
    SetUiYearlySeries(Vec<String>),
    SetUiOptions(ChartOptions),

    // metadata
    AddMetadata(Metadata),

    // settings and user
    ReceivedSettings(Settings),
    ReceivedUser(ExternalUser),

    // loader
    SetLoading(bool),
    SetPluginLoading(bool),
    SetLoadError(LoadError),
    ClearLoadError,

    // snackbar
    ReceivedSnackbarMessage(SnackbarMessage),
    ClearSnackbar,
}

impl Action {
    /// Stable name used in logs and change events
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetVisualization(_) => "SET_VISUALIZATION",
            Action::ClearVisualization => "CLEAR_VISUALIZATION",
            Action::SetCurrent(_) => "SET_CURRENT",
            Action::ClearCurrent => "CLEAR_CURRENT",
            Action::SetUiFromVisualization(_) => "SET_UI_FROM_VISUALIZATION",
            Action::ClearUi(_) => "CLEAR_UI",
            Action::SetUiType(_) => "SET_UI_TYPE",
            Action::SetUiLayout(_) => "SET_UI_LAYOUT",
            Action::SetUiItems { .. } => "SET_UI_ITEMS",
            Action::SetUiYearlySeries(_) => "SET_UI_YEARLY_SERIES",
            Action::SetUiOptions(_) => "SET_UI_OPTIONS",
            Action::AddMetadata(_) => "ADD_METADATA",
            Action::ReceivedSettings(_) => "RECEIVED_SETTINGS",
            Action::ReceivedUser(_) => "RECEIVED_USER",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetPluginLoading(_) => "SET_PLUGIN_LOADING",
            Action::SetLoadError(_) => "SET_LOAD_ERROR",
            Action::ClearLoadError => "CLEAR_LOAD_ERROR",
            Action::ReceivedSnackbarMessage(_) => "RECEIVED_SNACKBAR_MESSAGE",
            Action::ClearSnackbar => "CLEAR_SNACKBAR",
        }
    }
}
