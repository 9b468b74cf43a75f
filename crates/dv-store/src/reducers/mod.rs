//! Reducers, one per slice of [`AppState`](crate::state::AppState)

pub mod current;
pub mod loader;
pub mod metadata;
pub mod settings;
pub mod snackbar;
pub mod ui;
pub mod user;
pub mod visualization;

use crate::action::Action;
use crate::state::AppState;

/// Apply an action to every slice
pub fn reduce(state: &mut AppState, action: &Action) {
    visualization::reduce(&mut state.visualization, action);
    current::reduce(&mut state.current, action);
    ui::reduce(&mut state.ui, action);
    metadata::reduce(&mut state.metadata, action);
    settings::reduce(&mut state.settings, action);
    user::reduce(&mut state.user, action);
    loader::reduce(&mut state.loader, action);
    snackbar::reduce(&mut state.snackbar, action);
}
