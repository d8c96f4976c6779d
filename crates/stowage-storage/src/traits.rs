//! Storage abstraction trait
//!
//! This module defines the `ObjectSource` capability that every backend
//! implements, and the error type shared by all of them.

use crate::StorageBackend;
use async_trait::async_trait;
use std::io;
use stowage_core::InvalidReference;
use thiserror::Error;
use tokio::io::AsyncWrite;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<InvalidReference> for StorageError {
    fn from(err: InvalidReference) -> Self {
        StorageError::InvalidKey(err.to_string())
    }
}

impl StorageError {
    /// Classify a filesystem error raised while reading `location`.
    pub(crate) fn from_io(err: io::Error, location: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => StorageError::NotFound(location.to_string()),
            io::ErrorKind::PermissionDenied => {
                StorageError::AccessDenied(format!("{}: {}", location, err))
            }
            _ => StorageError::IoError(err),
        }
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Writable destination for an object's body.
pub type ObjectSink<'a> = dyn AsyncWrite + Send + Unpin + 'a;

/// Object source capability
///
/// The single data operation every backend (S3, local filesystem, stub)
/// provides. Any implementation is interchangeable behind
/// `Arc<dyn ObjectSource>`.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    /// Write the raw bytes of `bucket/key` into `sink`.
    ///
    /// Returns the number of bytes written. Bytes are passed through
    /// unchanged. The sink is not flushed; that is left to the caller.
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        sink: &mut ObjectSink<'_>,
    ) -> StorageResult<u64>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
