//! In-memory backend

use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;

use dv_core::{ApiError, SaveResponse, Visualization, VisualizationApi};

use super::generate_uid;

/// Backend keeping visualizations in a map
#[derive(Default)]
pub struct MemorySource {
    visualizations: RwLock<AHashMap<String, Visualization>>,
    views: RwLock<AHashMap<String, u64>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with visualizations; entries without id get one
    pub fn with_visualizations(visualizations: impl IntoIterator<Item = Visualization>) -> Self {
        let source = Self::new();
        {
            let mut stored = source.visualizations.write();
            for mut visualization in visualizations {
                let id = visualization.id.get_or_insert_with(generate_uid).clone();
                stored.insert(id, visualization);
            }
        }
        source
    }

    /// Number of recorded views of a visualization
    pub fn view_count(&self, id: &str) -> u64 {
        self.views.read().get(id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.visualizations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.visualizations.read().is_empty()
    }
}

#[async_trait]
impl VisualizationApi for MemorySource {
    async fn fetch_visualization(&self, id: &str) -> Result<Visualization, ApiError> {
        self.visualizations
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::not_found(format!("Visualization {id} not found")))
    }

    async fn save_visualization(&self, visualization: &Visualization) -> Result<SaveResponse, ApiError> {
        let mut stored = visualization.clone();
        let uid = stored.id.get_or_insert_with(generate_uid).clone();
        stored.display_name = stored.name.clone();

        tracing::debug!("Storing visualization {} in memory", uid);
        self.visualizations.write().insert(uid.clone(), stored);

        Ok(SaveResponse::ok(uid))
    }

    async fn delete_visualization(&self, id: &str) -> Result<(), ApiError> {
        match self.visualizations.write().remove(id) {
            Some(_) => Ok(()),
            None => Err(ApiError::not_found(format!("Visualization {id} not found"))),
        }
    }

    async fn post_data_statistics(&self, id: &str) -> Result<(), ApiError> {
        *self.views.write().entry(id.to_string()).or_insert(0) += 1;
        Ok(())
    }
}
