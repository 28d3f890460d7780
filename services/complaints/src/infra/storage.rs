use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::domain::repository::BlobStore;
use crate::error::ComplaintsServiceError;

/// Attachment blobs on the local filesystem, one file per key under a root
/// directory. Keys look like `<complaint_id>/<ts>.<ext>`, so the complaint id
/// becomes a subdirectory.
#[derive(Clone)]
pub struct LocalBlobStore {
    pub root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, ComplaintsServiceError> {
        // Keys are generated server-side, but refuse traversal anyway.
        let relative = Path::new(key);
        if relative
            .components()
            .any(|c| !matches!(c, std::path::Component::Normal(_)))
        {
            return Err(ComplaintsServiceError::AttachmentNotFound);
        }
        Ok(self.root.join(relative))
    }
}

impl BlobStore for LocalBlobStore {
    async fn put(&self, key: &str, data: &[u8]) -> Result<(), ComplaintsServiceError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, data).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, ComplaintsServiceError> {
        let path = self.path_for(key)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(ComplaintsServiceError::AttachmentNotFound)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Create the attachment root at startup so the first upload does not race
/// directory creation.
pub async fn ensure_root(root: &Path) -> Result<(), anyhow::Error> {
    tokio::fs::create_dir_all(root)
        .await
        .with_context(|| format!("create attachment root {}", root.display()))
}
