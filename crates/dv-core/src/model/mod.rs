//! Visualization value model

mod dimension;
mod options;
mod vis_type;
mod visualization;

pub use dimension::{Axis, AxisId, Dimension, DimensionItem};
pub use options::{
    AxisRange, ChartOptions, DigitGroupSeparator, FontStyle, FontStyles, ReferenceLine,
    SortOrder, TextAlign, TitleMode,
};
pub use vis_type::VisualizationType;
pub use visualization::{SeriesItem, Visualization};
