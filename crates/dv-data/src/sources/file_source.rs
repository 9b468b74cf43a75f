//! JSON directory backend

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;

use dv_core::{ApiError, SaveResponse, Visualization, VisualizationApi};

use super::{generate_uid, is_valid_uid};
use crate::DataError;

/// Backend storing each visualization as `<dir>/<id>.json`
pub struct FileSource {
    /// Directory holding the documents
    dir: PathBuf,
    /// View counts recorded during this process
    views: RwLock<AHashMap<String, u64>>,
}

impl FileSource {
    /// Open a store directory, creating it if needed
    pub async fn new(dir: impl Into<PathBuf>) -> Result<Self, DataError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        tracing::info!("Using visualization store at {}", dir.display());

        Ok(Self {
            dir,
            views: RwLock::new(AHashMap::new()),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn view_count(&self, id: &str) -> u64 {
        self.views.read().get(id).copied().unwrap_or(0)
    }

    fn document_path(&self, id: &str) -> Result<PathBuf, DataError> {
        if !is_valid_uid(id) {
            return Err(DataError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    async fn read(&self, id: &str) -> Result<Visualization, DataError> {
        let path = self.document_path(id)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataError::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn write(&self, visualization: &Visualization) -> Result<String, DataError> {
        let mut stored = visualization.clone();
        let id = stored.id.get_or_insert_with(generate_uid).clone();
        stored.display_name = stored.name.clone();

        let path = self.document_path(&id)?;
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(&stored)?;

        // Write then rename so readers never see a partial document
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("Wrote visualization {} to {}", id, path.display());
        Ok(id)
    }

    async fn remove(&self, id: &str) -> Result<(), DataError> {
        let path = self.document_path(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(DataError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl VisualizationApi for FileSource {
    async fn fetch_visualization(&self, id: &str) -> Result<Visualization, ApiError> {
        Ok(self.read(id).await?)
    }

    async fn save_visualization(&self, visualization: &Visualization) -> Result<SaveResponse, ApiError> {
        let uid = self.write(visualization).await?;
        Ok(SaveResponse::ok(uid))
    }

    async fn delete_visualization(&self, id: &str) -> Result<(), ApiError> {
        Ok(self.remove(id).await?)
    }

    async fn post_data_statistics(&self, id: &str) -> Result<(), ApiError> {
        *self.views.write().entry(id.to_string()).or_insert(0) += 1;
        Ok(())
    }
}
