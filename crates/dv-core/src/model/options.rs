//! Chart options carried alongside the layout

use serde::{Deserialize, Serialize};

/// How a title or subtitle is produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TitleMode {
    /// Generated from the layout
    #[default]
    Auto,
    /// User supplied text
    Custom,
    /// Hidden
    None,
}

/// Thousands separator used when formatting values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigitGroupSeparator {
    #[default]
    Space,
    Comma,
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    Asc,
    Desc,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font settings for one text element of a chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    /// Hex color, e.g. `#ff7700`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
}

/// Per-element font overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontStyles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization_title: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization_subtitle: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_axis_title: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_axis_title: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_line_label: Option<FontStyle>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_line_label: Option<FontStyle>,
}

/// A horizontal reference line (target line or base line)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferenceLine {
    pub value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Range axis bounds and formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Chart options of a visualization
///
/// Every option is optional on the wire; unknown option fields sent by the
/// backend are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub title_mode: TitleMode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub subtitle_mode: TitleMode,

    pub hide_legend: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_styles: Option<FontStyles>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_axis: Option<AxisRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_axis_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_line: Option<ReferenceLine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_line: Option<ReferenceLine>,

    pub digit_group_separator: DigitGroupSeparator,

    pub cumulative_values: bool,

    pub percent_stacked_values: bool,

    pub show_data: bool,

    pub sort_order: SortOrder,
}
