//! Local staging of incoming uploads.
//!
//! Incoming multipart bytes are written to a uniquely named file under the
//! configured upload directory. `StagedFile` owns that path: callers remove
//! it explicitly at the end of the workflow, and `Drop` removes it on any
//! exit path that skipped the explicit cleanup.

use bytes::Bytes;
use foodreel_core::AppError;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct StagedFile {
    path: PathBuf,
    removed: bool,
}

impl StagedFile {
    /// Write `data` to a fresh file under `upload_dir`, creating the
    /// directory if needed.
    pub async fn create(upload_dir: &Path, data: Bytes) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(upload_dir).await?;
        let path = upload_dir.join(Uuid::new_v4().to_string());
        tokio::fs::write(&path, &data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Staged upload");
        Ok(StagedFile {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the staged file. Failures are logged, never propagated: a
    /// leftover temp file must not mask the workflow's real outcome.
    pub async fn remove(mut self) {
        self.removed = true;
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged file");
        } else {
            tracing::debug!(path = %self.path.display(), "Removed staged file");
        }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.removed {
            if let Err(e) = std::fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Failed to remove staged file on drop"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_and_remove() {
        let dir = TempDir::new().unwrap();
        let staged = StagedFile::create(dir.path(), Bytes::from_static(b"video bytes"))
            .await
            .unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());

        staged.remove().await;
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_drop_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = {
            let staged = StagedFile::create(dir.path(), Bytes::from_static(b"x"))
                .await
                .unwrap();
            staged.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_create_makes_upload_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("staging");
        let staged = StagedFile::create(&nested, Bytes::from_static(b"x"))
            .await
            .unwrap();
        assert!(staged.path().starts_with(&nested));
        staged.remove().await;
    }
}
