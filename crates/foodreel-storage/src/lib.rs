//! Remote video storage: the `VideoStorage` trait, the retry policy, the
//! upload pipeline that picks a strategy by file size and falls back on
//! exhaustion, and a Cloudinary-backed implementation.

pub mod cloudinary;
pub mod pipeline;
pub mod retry;
pub mod traits;

pub use cloudinary::CloudinaryStorage;
pub use pipeline::{UploadPipeline, UploadedObject};
pub use retry::RetryPolicy;
pub use traits::{RawUploadResponse, StorageError, StorageResult, VideoStorage};
