//! Layout checks and normalization
//!
//! A [`Layout`] is a borrowed view over the axes of a visualization (or of
//! the UI state the user is editing). It is validated before the
//! visualization may be updated or saved.

mod adapter;
mod org_units;
mod validation;

pub use adapter::{adapt_axis_items, adapt_visualization_axes};
pub use org_units::{convert_ou_levels_to_uids, OrgUnitLevel, LEVEL_PREFIX};
pub use validation::{is_axis_valid, validate_layout};

use crate::model::{Dimension, VisualizationType};

/// Axes and type of a chart, as seen by the validator
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    pub vis_type: VisualizationType,
    pub columns: &'a [Dimension],
    pub rows: &'a [Dimension],
    pub filters: &'a [Dimension],
    pub yearly_series: Option<&'a [String]>,
}

impl<'a> Layout<'a> {
    /// First dimension with the given id, searching columns, rows, then filters
    pub fn find_dimension(&self, dimension_id: &str) -> Option<&'a Dimension> {
        self.columns
            .iter()
            .chain(self.rows)
            .chain(self.filters)
            .find(|dim| dim.dimension == dimension_id)
    }
}
