//! Values derived from the state on demand

use serde::Serialize;

use dv_core::Visualization;

use crate::state::AppState;

/// Where the working copy stands relative to the saved visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualizationState {
    /// Nothing has been built yet
    Empty,
    /// Built but never saved
    Unsaved,
    /// Working copy matches the saved visualization
    Saved,
    /// Working copy has unsaved edits
    Dirty,
}

impl VisualizationState {
    /// Whether "Save" (as opposed to "Save as") should be offered
    pub fn can_save(&self) -> bool {
        matches!(self, VisualizationState::Unsaved | VisualizationState::Dirty)
    }
}

/// Compare the working copy with the saved visualization by content
pub fn visualization_state(
    visualization: Option<&Visualization>,
    current: Option<&Visualization>,
) -> VisualizationState {
    match (visualization, current) {
        (_, None) => VisualizationState::Empty,
        (None, Some(_)) => VisualizationState::Unsaved,
        (Some(saved), Some(current)) => {
            if std::ptr::eq(saved, current) || saved == current {
                VisualizationState::Saved
            } else {
                VisualizationState::Dirty
            }
        }
    }
}

/// A data item placed on a value axis, with its display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesSetupItem {
    pub dimension_item: String,
    pub axis: u8,
    pub name: Option<String>,
}

/// Axis setup of the UI joined with metadata names
pub fn series_setup_items(state: &AppState) -> Vec<SeriesSetupItem> {
    state
        .ui
        .series
        .iter()
        .map(|item| SeriesSetupItem {
            dimension_item: item.dimension_item.clone(),
            axis: item.axis,
            name: state
                .metadata
                .get(&item.dimension_item)
                .map(|m| m.name.clone()),
        })
        .collect()
}

/// Name of the working copy, falling back to the backend display name
pub fn current_name(state: &AppState) -> Option<&str> {
    let current = state.current.as_deref()?;
    current.name.as_deref().or(current.display_name.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::metadata::MetadataItem;
    use dv_core::model::SeriesItem;
    use dv_core::VisualizationType;

    #[test]
    fn test_visualization_state_by_content() {
        let saved = Visualization::new(VisualizationType::Column);
        let same_content = saved.clone();
        let mut edited = saved.clone();
        edited.options.hide_legend = true;

        assert_eq!(visualization_state(None, None), VisualizationState::Empty);
        assert_eq!(visualization_state(Some(&saved), None), VisualizationState::Empty);
        assert_eq!(visualization_state(None, Some(&edited)), VisualizationState::Unsaved);
        assert_eq!(
            visualization_state(Some(&saved), Some(&same_content)),
            VisualizationState::Saved
        );
        assert_eq!(
            visualization_state(Some(&saved), Some(&edited)),
            VisualizationState::Dirty
        );
        assert!(VisualizationState::Dirty.can_save());
        assert!(!VisualizationState::Saved.can_save());
    }

    #[test]
    fn test_series_setup_items() {
        let mut state = AppState::default();
        state.ui.series = vec![
            SeriesItem { dimension_item: "d1".to_string(), axis: 0 },
            SeriesItem { dimension_item: "d2".to_string(), axis: 1 },
        ];
        state
            .metadata
            .insert("d2".to_string(), MetadataItem::named("Measles doses"));

        let items = series_setup_items(&state);
        assert_eq!(items[0].name, None);
        assert_eq!(
            items[1],
            SeriesSetupItem {
                dimension_item: "d2".to_string(),
                axis: 1,
                name: Some("Measles doses".to_string()),
            }
        );
    }
}
