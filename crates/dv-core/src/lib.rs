//! Core functionality for the visualization authoring tool
//!
//! This crate provides the value model for chart layouts, the layout
//! validation rules, and the seams to the analytics backend and to
//! navigation.

pub mod api;
pub mod error;
pub mod events;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod settings;
pub mod user;

// Re-export commonly used types
pub use api::{SaveResponse, VisualizationApi};
pub use error::{ApiError, LoadError, ValidationError};
pub use layout::{adapt_axis_items, validate_layout, Layout};
pub use model::{
    ChartOptions, Dimension, DimensionItem, Visualization, VisualizationType,
};
pub use navigation::{History, HistoryEngine, Location, LocationState};
pub use settings::Settings;
pub use user::User;

/// Fixed dimension identifiers
pub mod dimensions {
    /// Data (indicators, data elements, ...)
    pub const DIMENSION_ID_DATA: &str = "dx";

    /// Periods
    pub const DIMENSION_ID_PERIOD: &str = "pe";

    /// Organisation units
    pub const DIMENSION_ID_ORGUNIT: &str = "ou";

    /// Assigned categories
    pub const DIMENSION_ID_ASSIGNED_CATEGORIES: &str = "co";

    /// Dimensions whose items are resolved dynamically rather than
    /// defaulted to the "all items" placeholder
    pub const RESERVED_DIMENSION_IDS: [&str; 4] = [
        DIMENSION_ID_DATA,
        DIMENSION_ID_PERIOD,
        DIMENSION_ID_ORGUNIT,
        DIMENSION_ID_ASSIGNED_CATEGORIES,
    ];

    /// Sentinel item id meaning "every item of a dynamic dimension"
    pub const ALL_DYNAMIC_DIMENSION_ITEMS: &str = "ALL_ITEMS";

    /// Display name of the sentinel item
    pub const ALL_ITEMS_NAME: &str = "All items";

    pub fn is_reserved(dimension_id: &str) -> bool {
        RESERVED_DIMENSION_IDS.contains(&dimension_id)
    }
}
