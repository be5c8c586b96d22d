//! Storage abstraction trait
//!
//! This module defines the `VideoStorage` trait that remote video backends
//! implement, plus the storage error taxonomy and the raw backend response
//! shape the pipeline normalizes.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Upload succeeded but the response contained no usable URL")]
    UploadResultInvalid,

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Untrusted backend response. Any of the URL fields may be absent; the
/// pipeline decides what counts as a usable result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUploadResponse {
    pub secure_url: Option<String>,
    pub url: Option<String>,
    pub public_id: Option<String>,
    pub version: Option<u64>,
}

/// Remote video storage backend.
///
/// Implementations expose three upload strategies over the same file; the
/// pipeline owns strategy selection, retries, and fallback ordering.
#[async_trait]
pub trait VideoStorage: Send + Sync {
    /// Single-request upload, for files at or below the bulk threshold.
    async fn upload(&self, path: &Path, folder: &str) -> StorageResult<RawUploadResponse>;

    /// Chunked upload for large files.
    async fn upload_bulk(
        &self,
        path: &Path,
        folder: &str,
        chunk_size: u64,
    ) -> StorageResult<RawUploadResponse>;

    /// Streaming upload, used as the fallback when the bulk strategy is
    /// exhausted.
    async fn upload_stream(&self, path: &Path, folder: &str) -> StorageResult<RawUploadResponse>;

    /// Cloud identifier used to synthesize a delivery URL when the backend
    /// response omits one.
    fn cloud_name(&self) -> &str;
}
