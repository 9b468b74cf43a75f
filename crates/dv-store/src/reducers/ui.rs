//! Selection state of the editor
//!
//! The UI keeps dimension ids per axis and item ids per dimension. A new
//! working copy is built from it when the user presses "update".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use dv_core::dimensions::{DIMENSION_ID_DATA, DIMENSION_ID_ORGUNIT, DIMENSION_ID_PERIOD};
use dv_core::model::{
    Axis, AxisId, ChartOptions, Dimension, DimensionItem, SeriesItem, Visualization,
    VisualizationType,
};
use dv_core::Settings;

use crate::action::Action;
use crate::reducers::metadata::Metadata;

/// Dimension ids placed on each axis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiLayout {
    pub columns: Vec<String>,
    pub rows: Vec<String>,
    pub filters: Vec<String>,
}

impl UiLayout {
    pub fn axis(&self, axis: AxisId) -> &[String] {
        match axis {
            AxisId::Columns => &self.columns,
            AxisId::Rows => &self.rows,
            AxisId::Filters => &self.filters,
        }
    }

    fn from_visualization(visualization: &Visualization) -> Self {
        let ids = |axis: &Axis| -> Vec<String> {
            axis.iter().map(|dim| dim.dimension.clone()).collect()
        };
        Self {
            columns: ids(&visualization.columns),
            rows: ids(&visualization.rows),
            filters: ids(&visualization.filters),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    #[serde(rename = "type")]
    pub vis_type: VisualizationType,
    pub layout: UiLayout,
    pub items_by_dimension: IndexMap<String, Vec<String>>,
    pub yearly_series: Vec<String>,
    pub series: Vec<SeriesItem>,
    pub options: ChartOptions,
}

impl UiState {
    /// Selection mirroring a loaded visualization
    pub fn from_visualization(visualization: &Visualization) -> Self {
        let items_by_dimension = AxisId::ALL
            .iter()
            .flat_map(|axis| visualization.axis(*axis))
            .filter_map(|dim| {
                let items = dim.items.as_ref()?;
                Some((
                    dim.dimension.clone(),
                    items.iter().map(|item| item.id.clone()).collect(),
                ))
            })
            .collect();

        Self {
            vis_type: visualization.vis_type,
            layout: UiLayout::from_visualization(visualization),
            items_by_dimension,
            yearly_series: visualization.yearly_series.clone().unwrap_or_default(),
            series: visualization.series.clone(),
            options: visualization.options.clone(),
        }
    }

    /// Selection of a brand new visualization
    ///
    /// Data goes on the series axis, periods on the category axis and
    /// org units on the filter axis, preselecting the configured relative
    /// period and the user's root org units.
    pub fn with_defaults(settings: &Settings) -> Self {
        let mut items_by_dimension = IndexMap::new();
        items_by_dimension.insert(
            DIMENSION_ID_PERIOD.to_string(),
            vec![settings.relative_period.clone()],
        );
        if !settings.root_organisation_units.is_empty() {
            items_by_dimension.insert(
                DIMENSION_ID_ORGUNIT.to_string(),
                settings
                    .root_organisation_units
                    .iter()
                    .map(|ou| ou.id.clone())
                    .collect(),
            );
        }

        Self {
            vis_type: VisualizationType::default(),
            layout: UiLayout {
                columns: vec![DIMENSION_ID_DATA.to_string()],
                rows: vec![DIMENSION_ID_PERIOD.to_string()],
                filters: vec![DIMENSION_ID_ORGUNIT.to_string()],
            },
            items_by_dimension,
            yearly_series: Vec::new(),
            series: Vec::new(),
            options: ChartOptions {
                digit_group_separator: settings.digit_group_separator,
                ..Default::default()
            },
        }
    }

    /// Dimensions of one axis with their selected items
    ///
    /// Item names come from the metadata cache. A dimension without a
    /// selection gets no item list.
    pub fn axis_dimensions(&self, axis: AxisId, metadata: &Metadata) -> Axis {
        self.layout
            .axis(axis)
            .iter()
            .map(|id| {
                let items = self.items_by_dimension.get(id).map(|ids| {
                    ids.iter()
                        .map(|item_id| DimensionItem {
                            id: item_id.clone(),
                            name: metadata.get(item_id).map(|m| m.name.clone()),
                        })
                        .collect()
                });
                Dimension {
                    dimension: id.clone(),
                    items,
                }
            })
            .collect()
    }

    /// Working copy described by this selection
    ///
    /// Identity, name and description are taken from `base` when given.
    pub fn to_visualization(&self, base: Option<&Visualization>, metadata: &Metadata) -> Visualization {
        let mut visualization = base.cloned().unwrap_or_default();

        visualization.vis_type = self.vis_type;
        for axis in AxisId::ALL {
            *visualization.axis_mut(axis) = self.axis_dimensions(axis, metadata);
        }
        visualization.yearly_series = if self.vis_type.is_year_over_year() {
            Some(self.yearly_series.clone())
        } else {
            None
        };
        visualization.series = self.series.clone();
        visualization.options = self.options.clone();

        visualization
    }
}

pub fn reduce(state: &mut UiState, action: &Action) {
    match action {
        Action::SetUiFromVisualization(visualization) => {
            *state = UiState::from_visualization(visualization)
        }
        Action::ClearUi(settings) => *state = UiState::with_defaults(settings),
        Action::SetUiType(vis_type) => state.vis_type = *vis_type,
        Action::SetUiLayout(layout) => state.layout = layout.clone(),
        Action::SetUiItems { dimension, items } => {
            state
                .items_by_dimension
                .insert(dimension.clone(), items.clone());
        }
        Action::SetUiYearlySeries(series) => state.yearly_series = series.clone(),
        Action::SetUiOptions(options) => state.options = options.clone(),
        _ => {}
    }
}
