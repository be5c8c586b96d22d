//! Fake video storage backend for integration tests.

use async_trait::async_trait;
use foodreel_storage::{RawUploadResponse, StorageError, VideoStorage};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Succeeds by default; flip `fail_uploads` to simulate a backend outage
/// across every strategy.
pub struct FakeVideoStorage {
    fail_uploads: AtomicBool,
}

impl FakeVideoStorage {
    pub fn new() -> Self {
        FakeVideoStorage {
            fail_uploads: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_uploads.store(failing, Ordering::SeqCst);
    }

    fn respond(&self, folder: &str) -> Result<RawUploadResponse, StorageError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(StorageError::UploadFailed("backend unavailable".to_string()));
        }
        Ok(RawUploadResponse {
            secure_url: Some(format!(
                "https://res.cloudinary.com/demo/video/upload/v1/{folder}/clip"
            )),
            url: None,
            public_id: Some(format!("{folder}/clip")),
            version: Some(1),
        })
    }
}

#[async_trait]
impl VideoStorage for FakeVideoStorage {
    async fn upload(&self, _path: &Path, folder: &str) -> Result<RawUploadResponse, StorageError> {
        self.respond(folder)
    }

    async fn upload_bulk(
        &self,
        _path: &Path,
        folder: &str,
        _chunk_size: u64,
    ) -> Result<RawUploadResponse, StorageError> {
        self.respond(folder)
    }

    async fn upload_stream(
        &self,
        _path: &Path,
        folder: &str,
    ) -> Result<RawUploadResponse, StorageError> {
        self.respond(folder)
    }

    fn cloud_name(&self) -> &str {
        "demo"
    }
}
