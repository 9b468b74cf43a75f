//! Seam to the analytics backend

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::model::Visualization;

/// Status reported by the backend for a successful write
pub const STATUS_OK: &str = "OK";

/// Body of the save response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponseBody {
    #[serde(default)]
    pub uid: Option<String>,
}

/// Response to a save request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub status: String,

    #[serde(default)]
    pub response: SaveResponseBody,
}

impl SaveResponse {
    pub fn ok(uid: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            response: SaveResponseBody {
                uid: Some(uid.into()),
            },
        }
    }

    /// Uid of the stored object when the backend reported success
    pub fn saved_uid(&self) -> Option<&str> {
        if self.status == STATUS_OK {
            self.response.uid.as_deref().filter(|uid| !uid.is_empty())
        } else {
            None
        }
    }
}

/// Trait for analytics backends that store visualizations
#[async_trait::async_trait]
pub trait VisualizationApi: Send + Sync {
    /// Fetch a visualization by id
    async fn fetch_visualization(&self, id: &str) -> Result<Visualization, ApiError>;

    /// Create (no id) or update (with id) a visualization
    async fn save_visualization(&self, visualization: &Visualization) -> Result<SaveResponse, ApiError>;

    /// Delete a visualization
    async fn delete_visualization(&self, id: &str) -> Result<(), ApiError>;

    /// Record that a visualization was viewed
    async fn post_data_statistics(&self, id: &str) -> Result<(), ApiError>;
}
