use std::path::{Path, PathBuf};

use tokio::sync::Mutex;
use tracing::debug;

use super::{new_id, Brew, BrewApi, CreateBrewData};
use crate::error::ApiError;

/// Local backend keeping brews as a JSON array in one file.
///
/// A missing file is an empty feed. Feed order is most recent first.
pub struct FileBrewApi {
    path: PathBuf,
    // Serializes read-modify-write cycles from this process.
    write_lock: Mutex<()>,
}

impl FileBrewApi {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Brew>, ApiError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ApiError::Storage(format!("read {}: {}", self.path.display(), e))),
        };
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::Decode(format!("{}: {}", self.path.display(), e)))
    }

    async fn store(&self, brews: &[Brew]) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Storage(format!("create {}: {}", parent.display(), e)))?;
        }
        let body = serde_json::to_vec_pretty(brews)
            .map_err(|e| ApiError::Storage(format!("encode brews: {}", e)))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|e| ApiError::Storage(format!("write {}: {}", self.path.display(), e)))
    }
}

#[async_trait::async_trait]
impl BrewApi for FileBrewApi {
    async fn create_brew(&self, data: CreateBrewData) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock().await;
        let mut brews = self.load().await?;
        brews.insert(0, Brew::from_create(Some(new_id()), data));
        self.store(&brews).await?;
        debug!(path = %self.path.display(), count = brews.len(), "file: brew created");
        Ok(())
    }

    async fn get_brews(&self) -> Result<Vec<Brew>, ApiError> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures;

    #[tokio::test]
    async fn missing_file_is_empty_feed() {
        let dir = tempfile::tempdir().unwrap();
        let api = FileBrewApi::new(dir.path().join("brews.json"));
        assert!(api.get_brews().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("brews.json");

        FileBrewApi::new(&path).create_brew(fixtures::guji()).await.unwrap();

        let reopened = FileBrewApi::new(&path);
        let brews = reopened.get_brews().await.unwrap();
        assert_eq!(brews.len(), 1);
        assert_eq!(brews[0].roaster, "Local Roasters");
        assert!(brews[0].id.is_some());
    }

    #[tokio::test]
    async fn corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("brews.json");
        std::fs::write(&path, b"{not json").unwrap();

        let err = FileBrewApi::new(&path).get_brews().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }
}
