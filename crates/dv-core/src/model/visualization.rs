use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Axis, AxisId, ChartOptions, VisualizationType};
use crate::layout::Layout;

/// A visualization as exchanged with the backend
///
/// The same shape is used for the last-saved copy and for the working copy
/// the user edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visualization {
    /// Backend identifier, absent until first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Localized name computed by the backend, never sent back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "type", default)]
    pub vis_type: VisualizationType,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub columns: Axis,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub rows: Axis,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub filters: Axis,

    /// Period ids compared against each other in year-over-year charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yearly_series: Option<Vec<String>>,

    /// Axis assignment of individual data items
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<SeriesItem>,

    #[serde(flatten)]
    pub options: ChartOptions,
}

/// Places one data item on a value axis of a multi-axis chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesItem {
    pub dimension_item: String,

    #[serde(default)]
    pub axis: u8,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Axis, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Axis>::deserialize(deserializer)?.unwrap_or_default())
}

impl Visualization {
    /// Create an empty, unsaved visualization of the given type
    pub fn new(vis_type: VisualizationType) -> Self {
        Self {
            vis_type,
            ..Default::default()
        }
    }

    pub fn axis(&self, axis: AxisId) -> &Axis {
        match axis {
            AxisId::Columns => &self.columns,
            AxisId::Rows => &self.rows,
            AxisId::Filters => &self.filters,
        }
    }

    pub fn axis_mut(&mut self, axis: AxisId) -> &mut Axis {
        match axis {
            AxisId::Columns => &mut self.columns,
            AxisId::Rows => &mut self.rows,
            AxisId::Filters => &mut self.filters,
        }
    }

    /// Borrowed layout view used for validation
    pub fn layout(&self) -> Layout<'_> {
        Layout {
            vis_type: self.vis_type,
            columns: &self.columns,
            rows: &self.rows,
            filters: &self.filters,
            yearly_series: self.yearly_series.as_deref(),
        }
    }

    /// Copy suitable for sending to the backend
    ///
    /// Drops the backend-computed display name and replaces absent item
    /// lists with empty ones.
    pub fn to_persistable(&self) -> Visualization {
        let mut visualization = self.clone();
        visualization.display_name = None;

        for axis in AxisId::ALL {
            for dimension in visualization.axis_mut(axis).iter_mut() {
                dimension.items.get_or_insert_with(Vec::new);
            }
        }

        visualization
    }

    /// Copy without identity so that the backend creates a new object
    pub fn prepare_for_save_as(mut self) -> Visualization {
        self.id = None;
        self.display_name = None;
        self
    }

    /// Name given to a visualization saved without one
    pub fn untitled_name(vis_type: VisualizationType, date: NaiveDate) -> String {
        format!(
            "Untitled {} visualization, {}",
            vis_type.display_name(),
            date.format("%b %d, %Y")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dimension;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "id": "v1",
            "name": "ANC coverage",
            "displayName": "ANC coverage",
            "type": "LINE",
            "columns": [{"dimension": "dx", "items": [{"id": "d1", "name": "ANC 1"}]}],
            "rows": [{"dimension": "pe", "items": [{"id": "LAST_12_MONTHS"}]}],
            "filters": null,
            "hideLegend": true,
            "targetLine": {"value": 80.0, "title": "Target"},
            "someUnknownField": 12
        }"#;

        let vis: Visualization = serde_json::from_str(json).unwrap();
        assert_eq!(vis.id.as_deref(), Some("v1"));
        assert_eq!(vis.vis_type, VisualizationType::Line);
        assert!(vis.filters.is_empty());
        assert!(vis.options.hide_legend);
        assert_eq!(vis.options.target_line.as_ref().map(|l| l.value), Some(80.0));
        assert_eq!(vis.columns[0].items()[0].name.as_deref(), Some("ANC 1"));
    }

    #[test]
    fn test_persistable_drops_display_name_and_fills_items() {
        let mut vis = Visualization::new(VisualizationType::Column);
        vis.display_name = Some("Shown".to_string());
        vis.filters.push(Dimension::bare("ou"));

        let persisted = vis.to_persistable();
        assert!(persisted.display_name.is_none());
        assert_eq!(persisted.filters[0].items, Some(Vec::new()));
    }

    #[test]
    fn test_save_as_strips_identity() {
        let mut vis = Visualization::new(VisualizationType::Bar);
        vis.id = Some("v1".to_string());
        vis.name = Some("Kept".to_string());

        let copy = vis.prepare_for_save_as();
        assert!(copy.id.is_none());
        assert_eq!(copy.name.as_deref(), Some("Kept"));
    }

    #[test]
    fn test_untitled_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            Visualization::untitled_name(VisualizationType::YearOverYearLine, date),
            "Untitled Year over year (line) visualization, Mar 05, 2024"
        );
    }
}
