use crate::traits::{ObjectSink, ObjectSource, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Local filesystem storage implementation
///
/// Buckets are directories directly under `base_path`; an object lives at
/// `{base_path}/{bucket}/{key}`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory holding one sub-directory per bucket
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }

    /// Convert bucket and key to a filesystem path with security validation
    ///
    /// Rejects traversal sequences and absolute keys, then checks that the
    /// resolved path cannot escape the base storage directory.
    fn object_path(&self, bucket: &str, key: &str) -> StorageResult<PathBuf> {
        if bucket.is_empty() || bucket.contains('/') || bucket.contains("..") {
            return Err(StorageError::InvalidKey(format!(
                "Bucket name is not a single path segment: {:?}",
                bucket
            )));
        }
        if key.is_empty() || key.contains("..") || key.starts_with('/') {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid characters".to_string(),
            ));
        }

        let path = self.base_path.join(bucket).join(key);

        let base_canonical = self.base_path.canonicalize().map_err(|e| {
            StorageError::ConfigError(format!("Failed to canonicalize base path: {}", e))
        })?;

        // Symlinks inside the root may still point elsewhere.
        if let Ok(canonical) = path.canonicalize() {
            if canonical.strip_prefix(&base_canonical).is_err() {
                return Err(StorageError::InvalidKey(
                    "Storage key resolves outside storage directory".to_string(),
                ));
            }
        }

        Ok(path)
    }
}

#[async_trait]
impl ObjectSource for LocalStorage {
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        sink: &mut ObjectSink<'_>,
    ) -> StorageResult<u64> {
        let path = self.object_path(bucket, key)?;
        let location = format!("{}/{}", bucket, key);
        let start = std::time::Instant::now();

        let mut file = fs::File::open(&path)
            .await
            .map_err(|e| StorageError::from_io(e, &location))?;

        let size = tokio::io::copy(&mut file, sink).await.map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path.display(),
                bucket = %bucket,
                key = %key,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Local storage read failed"
            );
            StorageError::from_io(e, &location)
        })?;

        tracing::info!(
            path = %path.display(),
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage read successful"
        );

        Ok(size)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
