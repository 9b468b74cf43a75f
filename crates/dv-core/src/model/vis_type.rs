use serde::{Deserialize, Serialize};
use std::fmt;

/// Chart types a visualization can be rendered as
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisualizationType {
    #[default]
    Column,
    StackedColumn,
    Bar,
    StackedBar,
    Line,
    Area,
    StackedArea,
    Pie,
    Radar,
    Gauge,
    YearOverYearLine,
    YearOverYearColumn,
    SingleValue,
    Scatter,
    PivotTable,
}

impl VisualizationType {
    /// Human readable name, used in generated visualization names
    pub fn display_name(&self) -> &'static str {
        match self {
            VisualizationType::Column => "Column",
            VisualizationType::StackedColumn => "Stacked column",
            VisualizationType::Bar => "Bar",
            VisualizationType::StackedBar => "Stacked bar",
            VisualizationType::Line => "Line",
            VisualizationType::Area => "Area",
            VisualizationType::StackedArea => "Stacked area",
            VisualizationType::Pie => "Pie",
            VisualizationType::Radar => "Radar",
            VisualizationType::Gauge => "Gauge",
            VisualizationType::YearOverYearLine => "Year over year (line)",
            VisualizationType::YearOverYearColumn => "Year over year (column)",
            VisualizationType::SingleValue => "Single value",
            VisualizationType::Scatter => "Scatter",
            VisualizationType::PivotTable => "Pivot table",
        }
    }

    pub fn is_year_over_year(&self) -> bool {
        matches!(
            self,
            VisualizationType::YearOverYearLine | VisualizationType::YearOverYearColumn
        )
    }
}

impl fmt::Display for VisualizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
