//! Filesystem-backed media store
//!
//! Stores uploaded media under a configured directory with UUID object names
//! and serves them back as `{base_url}/{object}` URLs. Enrichment never
//! reads these bytes; the URL is carried on the reactable as-is.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{info, instrument};
use uuid::Uuid;

use stage_core::error::DomainError;
use stage_core::traits::{MediaStore, RepoResult};

/// Media store writing to the local filesystem
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    root: PathBuf,
    base_url: String,
}

impl FsMediaStore {
    /// Create a new FsMediaStore rooted at `root`, serving under `base_url`
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    fn extension_for(content_type: &str) -> &'static str {
        match content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            _ => "bin",
        }
    }
}

#[async_trait]
impl MediaStore for FsMediaStore {
    #[instrument(skip(self, bytes))]
    async fn save(&self, bytes: &[u8], content_type: &str) -> RepoResult<String> {
        let object = format!("{}.{}", Uuid::new_v4(), Self::extension_for(content_type));
        let path = self.root.join(&object);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        info!(object = %object, size = bytes.len(), "Media stored");

        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), object))
    }
}
