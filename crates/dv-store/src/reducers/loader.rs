//! Loading flags and the error shown instead of a visualization

use dv_core::LoadError;

use crate::action::Action;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderState {
    pub is_loading: bool,

    /// Set while the chart plugin renders a freshly loaded or saved object
    pub is_plugin_loading: bool,

    pub load_error: Option<LoadError>,
}

pub fn reduce(state: &mut LoaderState, action: &Action) {
    match action {
        Action::SetLoading(loading) => state.is_loading = *loading,
        Action::SetPluginLoading(loading) => state.is_plugin_loading = *loading,
        Action::SetLoadError(error) => {
            state.load_error = Some(error.clone());
            state.is_loading = false;
        }
        Action::ClearLoadError => state.load_error = None,
        _ => {}
    }
}
