//! Foodreel Core Library
//!
//! Shared configuration, error taxonomy, and domain models for the foodreel
//! backend. Everything HTTP- or storage-specific lives in the other crates.

pub mod config;
pub mod error;
pub mod models;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
