use serde::{Deserialize, Serialize};
use std::fmt;

/// A selected item of a dimension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionItem {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DimensionItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn named(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
        }
    }
}

/// A dimension placed on an axis together with its selected items
///
/// `items` is `None` when the backend sent no item list and the dimension
/// is one whose items are resolved later (data, period, org unit, assigned
/// categories).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub dimension: String,

    #[serde(default)]
    pub items: Option<Vec<DimensionItem>>,
}

impl Dimension {
    pub fn new(dimension: impl Into<String>, items: Vec<DimensionItem>) -> Self {
        Self {
            dimension: dimension.into(),
            items: Some(items),
        }
    }

    /// Dimension built from plain item ids
    pub fn with_item_ids<I, S>(dimension: impl Into<String>, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(dimension, ids.into_iter().map(DimensionItem::new).collect())
    }

    /// Dimension without an item list
    pub fn bare(dimension: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            items: None,
        }
    }

    /// Selected items, empty when none were sent
    pub fn items(&self) -> &[DimensionItem] {
        self.items.as_deref().unwrap_or_default()
    }

    /// A dimension counts as valid once it carries at least one item
    pub fn is_valid(&self) -> bool {
        self.items().first().is_some()
    }
}

/// Ordered list of dimensions on one axis
pub type Axis = Vec<Dimension>;

/// The three named axes of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    Columns,
    Rows,
    Filters,
}

impl AxisId {
    pub const ALL: [AxisId; 3] = [AxisId::Columns, AxisId::Rows, AxisId::Filters];

    /// Label shown to users for this axis
    pub fn label(&self) -> &'static str {
        match self {
            AxisId::Columns => "Series",
            AxisId::Rows => "Category",
            AxisId::Filters => "Filter",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
