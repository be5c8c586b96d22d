//! Object upload pipeline.
//!
//! Picks an upload strategy by file size, wraps each strategy in the retry
//! policy, falls back from bulk to stream on exhaustion, and normalizes the
//! backend response into a delivery URL plus object id.

use crate::retry::RetryPolicy;
use crate::traits::{RawUploadResponse, StorageError, StorageResult, VideoStorage};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Files strictly larger than this go through the bulk strategy.
pub const BULK_THRESHOLD_BYTES: u64 = 5 * 1024 * 1024;
/// Chunk size handed to the bulk strategy.
pub const CHUNK_SIZE_BYTES: u64 = 20 * 1024 * 1024;
/// Attempts per strategy.
pub const MAX_ATTEMPTS: u32 = 5;
/// First retry delay; doubles after each failure.
pub const BASE_DELAY: Duration = Duration::from_millis(600);

/// Normalized upload result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedObject {
    pub url: String,
    pub public_id: String,
}

/// Drives uploads against any `VideoStorage` backend.
#[derive(Clone)]
pub struct UploadPipeline {
    storage: Arc<dyn VideoStorage>,
    retry: RetryPolicy,
}

impl UploadPipeline {
    pub fn new(storage: Arc<dyn VideoStorage>) -> Self {
        UploadPipeline {
            storage,
            retry: RetryPolicy::new(MAX_ATTEMPTS, BASE_DELAY),
        }
    }

    /// Upload the file at `path` into `folder` and return its delivery URL
    /// and object id.
    pub async fn upload_video(&self, path: &Path, folder: &str) -> StorageResult<UploadedObject> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|_| StorageError::FileNotFound(path.display().to_string()))?;
        let size = metadata.len();

        let raw = if size > BULK_THRESHOLD_BYTES {
            tracing::debug!(size, folder, "Selecting bulk upload strategy");
            match self
                .retry
                .run("bulk", |_| {
                    self.storage.upload_bulk(path, folder, CHUNK_SIZE_BYTES)
                })
                .await
            {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!(error = %e, "Bulk strategy exhausted, falling back to stream");
                    self.retry
                        .run("stream", |_| self.storage.upload_stream(path, folder))
                        .await?
                }
            }
        } else {
            tracing::debug!(size, folder, "Selecting standard upload strategy");
            self.retry
                .run("standard", |_| self.storage.upload(path, folder))
                .await?
        };

        self.normalize(raw)
    }

    /// Prefer `secure_url`, then `url`, then a synthesized delivery URL from
    /// the object id. The version segment is included when present.
    fn normalize(&self, raw: RawUploadResponse) -> StorageResult<UploadedObject> {
        let public_id = raw.public_id.clone().unwrap_or_default();

        if let Some(url) = raw.secure_url.filter(|u| !u.is_empty()) {
            return Ok(UploadedObject { url, public_id });
        }
        if let Some(url) = raw.url.filter(|u| !u.is_empty()) {
            return Ok(UploadedObject { url, public_id });
        }
        match &raw.public_id {
            Some(id) if !id.is_empty() => {
                let version = raw
                    .version
                    .map(|v| format!("v{}/", v))
                    .unwrap_or_default();
                let url = format!(
                    "https://res.cloudinary.com/{}/video/upload/{}{}",
                    self.storage.cloud_name(),
                    version,
                    id
                );
                Ok(UploadedObject {
                    url,
                    public_id: id.clone(),
                })
            }
            _ => Err(StorageError::UploadResultInvalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    /// Records strategy invocations and fails a configured number of times
    /// per strategy before yielding the canned response.
    struct FakeVideoStorage {
        calls: Mutex<Vec<&'static str>>,
        bulk_failures: AtomicU32,
        standard_failures: AtomicU32,
        stream_failures: AtomicU32,
        response: RawUploadResponse,
    }

    impl FakeVideoStorage {
        fn new(response: RawUploadResponse) -> Self {
            FakeVideoStorage {
                calls: Mutex::new(Vec::new()),
                bulk_failures: AtomicU32::new(0),
                standard_failures: AtomicU32::new(0),
                stream_failures: AtomicU32::new(0),
                response,
            }
        }

        fn ok_response() -> RawUploadResponse {
            RawUploadResponse {
                secure_url: Some("https://cdn.example.com/v1/clip".to_string()),
                url: Some("http://cdn.example.com/v1/clip".to_string()),
                public_id: Some("clip".to_string()),
                version: Some(1),
            }
        }

        fn attempt(&self, label: &'static str, budget: &AtomicU32) -> crate::traits::StorageResult<RawUploadResponse> {
            self.calls.lock().unwrap().push(label);
            if budget.load(Ordering::SeqCst) > 0 {
                budget.fetch_sub(1, Ordering::SeqCst);
                return Err(StorageError::UploadFailed(format!("{label} rejected")));
            }
            Ok(self.response.clone())
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VideoStorage for FakeVideoStorage {
        async fn upload(
            &self,
            _path: &Path,
            _folder: &str,
        ) -> crate::traits::StorageResult<RawUploadResponse> {
            self.attempt("standard", &self.standard_failures)
        }

        async fn upload_bulk(
            &self,
            _path: &Path,
            _folder: &str,
            chunk_size: u64,
        ) -> crate::traits::StorageResult<RawUploadResponse> {
            assert_eq!(chunk_size, CHUNK_SIZE_BYTES);
            self.attempt("bulk", &self.bulk_failures)
        }

        async fn upload_stream(
            &self,
            _path: &Path,
            _folder: &str,
        ) -> crate::traits::StorageResult<RawUploadResponse> {
            self.attempt("stream", &self.stream_failures)
        }

        fn cloud_name(&self) -> &str {
            "demo"
        }
    }

    fn file_of_size(bytes: usize) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        file
    }

    #[tokio::test]
    async fn test_small_file_uses_standard_strategy() {
        let storage = Arc::new(FakeVideoStorage::new(FakeVideoStorage::ok_response()));
        let pipeline = UploadPipeline::new(storage.clone());
        let file = file_of_size(1024);

        let result = pipeline.upload_video(file.path(), "food_videos/p1").await.unwrap();

        assert_eq!(storage.calls(), vec!["standard"]);
        assert_eq!(result.url, "https://cdn.example.com/v1/clip");
        assert_eq!(result.public_id, "clip");
    }

    #[tokio::test]
    async fn test_large_file_uses_bulk_strategy() {
        let storage = Arc::new(FakeVideoStorage::new(FakeVideoStorage::ok_response()));
        let pipeline = UploadPipeline::new(storage.clone());
        let file = file_of_size((BULK_THRESHOLD_BYTES + 1) as usize);

        pipeline.upload_video(file.path(), "food_videos/p1").await.unwrap();

        assert_eq!(storage.calls(), vec!["bulk"]);
    }

    #[tokio::test]
    async fn test_file_at_threshold_stays_standard() {
        let storage = Arc::new(FakeVideoStorage::new(FakeVideoStorage::ok_response()));
        let pipeline = UploadPipeline::new(storage.clone());
        let file = file_of_size(BULK_THRESHOLD_BYTES as usize);

        pipeline.upload_video(file.path(), "food_videos/p1").await.unwrap();

        assert_eq!(storage.calls(), vec!["standard"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bulk_exhaustion_falls_back_to_stream() {
        let storage = Arc::new(FakeVideoStorage::new(FakeVideoStorage::ok_response()));
        storage.bulk_failures.store(u32::MAX, Ordering::SeqCst);
        let pipeline = UploadPipeline::new(storage.clone());
        let file = file_of_size((BULK_THRESHOLD_BYTES + 1) as usize);

        let result = pipeline.upload_video(file.path(), "food_videos/p1").await.unwrap();

        let calls = storage.calls();
        assert_eq!(&calls[..5], &["bulk"; 5]);
        assert_eq!(calls[5], "stream");
        assert_eq!(calls.len(), 6);
        assert_eq!(result.public_id, "clip");
    }

    #[tokio::test(start_paused = true)]
    async fn test_standard_exhaustion_has_no_fallback() {
        let storage = Arc::new(FakeVideoStorage::new(FakeVideoStorage::ok_response()));
        storage.standard_failures.store(u32::MAX, Ordering::SeqCst);
        let pipeline = UploadPipeline::new(storage.clone());
        let file = file_of_size(1024);

        let err = pipeline.upload_video(file.path(), "food_videos/p1").await.unwrap_err();

        assert_eq!(storage.calls(), vec!["standard"; 5]);
        assert!(matches!(err, StorageError::UploadFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let storage = Arc::new(FakeVideoStorage::new(FakeVideoStorage::ok_response()));
        let pipeline = UploadPipeline::new(storage.clone());

        let err = pipeline
            .upload_video(Path::new("/nonexistent/clip.mp4"), "food_videos/p1")
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::FileNotFound(_)));
        assert!(storage.calls().is_empty());
    }

    #[tokio::test]
    async fn test_normalize_prefers_secure_url() {
        let storage = Arc::new(FakeVideoStorage::new(RawUploadResponse {
            secure_url: Some("https://secure".to_string()),
            url: Some("http://plain".to_string()),
            public_id: Some("clip".to_string()),
            version: Some(7),
        }));
        let pipeline = UploadPipeline::new(storage);
        let file = file_of_size(10);

        let result = pipeline.upload_video(file.path(), "f").await.unwrap();
        assert_eq!(result.url, "https://secure");
    }

    #[tokio::test]
    async fn test_normalize_synthesizes_url_from_id_and_version() {
        let storage = Arc::new(FakeVideoStorage::new(RawUploadResponse {
            secure_url: None,
            url: None,
            public_id: Some("food_videos/p1/clip".to_string()),
            version: Some(1712345678),
        }));
        let pipeline = UploadPipeline::new(storage);
        let file = file_of_size(10);

        let result = pipeline.upload_video(file.path(), "f").await.unwrap();
        assert_eq!(
            result.url,
            "https://res.cloudinary.com/demo/video/upload/v1712345678/food_videos/p1/clip"
        );
    }

    #[tokio::test]
    async fn test_normalize_synthesizes_url_without_version() {
        let storage = Arc::new(FakeVideoStorage::new(RawUploadResponse {
            secure_url: None,
            url: None,
            public_id: Some("food_videos/p1/clip".to_string()),
            version: None,
        }));
        let pipeline = UploadPipeline::new(storage);
        let file = file_of_size(10);

        let result = pipeline.upload_video(file.path(), "f").await.unwrap();
        assert_eq!(
            result.url,
            "https://res.cloudinary.com/demo/video/upload/food_videos/p1/clip"
        );
        assert_eq!(result.public_id, "food_videos/p1/clip");
    }

    #[tokio::test]
    async fn test_normalize_rejects_empty_response() {
        let storage = Arc::new(FakeVideoStorage::new(RawUploadResponse::default()));
        let pipeline = UploadPipeline::new(storage);
        let file = file_of_size(10);

        let err = pipeline.upload_video(file.path(), "f").await.unwrap_err();
        assert!(matches!(err, StorageError::UploadResultInvalid));
    }
}
