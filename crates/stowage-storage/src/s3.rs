use crate::traits::{ObjectSink, ObjectSource, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use futures::StreamExt;
use object_store::aws::{AmazonS3, AmazonS3Builder};
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{ObjectStoreExt, Result as ObjectResult};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// S3 storage implementation
///
/// `object_store` clients are bound to a single bucket, so one is built per
/// bucket on first use and cached for the lifetime of the storage.
pub struct S3Storage {
    region: String,
    endpoint_url: Option<String>, // Custom endpoint for S3-compatible providers
    stores: RwLock<HashMap<String, Arc<AmazonS3>>>,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// # Arguments
    /// * `region` - AWS region (or region identifier for S3-compatible providers)
    /// * `endpoint_url` - Optional custom endpoint URL for S3-compatible providers
    ///   (e.g., "http://localhost:9000" for MinIO)
    pub fn new(region: String, endpoint_url: Option<String>) -> Self {
        S3Storage {
            region,
            endpoint_url,
            stores: RwLock::new(HashMap::new()),
        }
    }

    fn build_store(&self, bucket: &str) -> StorageResult<AmazonS3> {
        // Credentials and the remaining settings come from the environment.
        let mut builder = AmazonS3Builder::from_env()
            .with_region(self.region.clone())
            .with_bucket_name(bucket.to_string());

        if let Some(ref endpoint) = self.endpoint_url {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))
    }

    async fn store_for(&self, bucket: &str) -> StorageResult<Arc<AmazonS3>> {
        if let Some(store) = self.stores.read().await.get(bucket) {
            return Ok(Arc::clone(store));
        }

        let store = Arc::new(self.build_store(bucket)?);
        let mut stores = self.stores.write().await;
        Ok(Arc::clone(
            stores.entry(bucket.to_string()).or_insert(store),
        ))
    }
}

/// Map an `object_store` failure onto the storage error taxonomy.
fn classify_error(err: ObjectStoreError, bucket: &str, key: &str) -> StorageError {
    match err {
        ObjectStoreError::NotFound { .. } => StorageError::NotFound(format!("{}/{}", bucket, key)),
        e @ (ObjectStoreError::PermissionDenied { .. } | ObjectStoreError::Unauthenticated { .. }) => {
            StorageError::AccessDenied(e.to_string())
        }
        other => StorageError::Transport(other.to_string()),
    }
}

#[async_trait]
impl ObjectSource for S3Storage {
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        sink: &mut ObjectSink<'_>,
    ) -> StorageResult<u64> {
        let start = std::time::Instant::now();
        let store = self.store_for(bucket).await?;
        let location = Path::from(key.to_string());

        let result: ObjectResult<_> = store.get(&location).await;

        let result = result.map_err(|e| {
            let err = classify_error(e, bucket, key);
            tracing::error!(
                error = %err,
                bucket = %bucket,
                key = %key,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 get_object failed"
            );
            err
        })?;

        let mut stream = result.into_stream();
        let mut size: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %bucket,
                    key = %key,
                    size_bytes = size,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 body stream error"
                );
                classify_error(e, bucket, key)
            })?;
            sink.write_all(&chunk).await?;
            size += chunk.len() as u64;
        }

        tracing::info!(
            bucket = %bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 get_object successful"
        );

        Ok(size)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}
