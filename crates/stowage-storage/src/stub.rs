//! In-memory object source for tests and dry runs.
//!
//! `StubStorage` answers `get_object` from canned responses and records every
//! request it receives, so callers can assert on the interaction afterwards
//! instead of setting expectations up front.

use crate::traits::{ObjectSink, ObjectSource, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tokio::io::AsyncWriteExt;

/// Canned outcome for a stubbed `get_object` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubResponse {
    Body(Bytes),
    NotFound,
    AccessDenied(String),
    Transport(String),
}

impl StubResponse {
    pub fn body(body: impl Into<Bytes>) -> Self {
        StubResponse::Body(body.into())
    }
}

/// One recorded `get_object` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetObjectCall {
    pub bucket: String,
    pub key: String,
}

/// Stub storage backend
#[derive(Debug, Default)]
pub struct StubStorage {
    default_response: Option<StubResponse>,
    responses: HashMap<(String, String), StubResponse>,
    calls: Mutex<Vec<GetObjectCall>>,
}

impl StubStorage {
    /// An empty stub: every request fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer any `(bucket, key)` without a specific response with `body`.
    pub fn with_default_body(self, body: impl Into<Bytes>) -> Self {
        self.with_default_response(StubResponse::body(body))
    }

    pub fn with_default_response(mut self, response: StubResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    pub fn with_object(self, bucket: &str, key: &str, body: impl Into<Bytes>) -> Self {
        self.with_response(bucket, key, StubResponse::body(body))
    }

    pub fn with_response(mut self, bucket: &str, key: &str, response: StubResponse) -> Self {
        self.responses
            .insert((bucket.to_string(), key.to_string()), response);
        self
    }

    /// Every request received so far, oldest first.
    pub fn calls(&self) -> Vec<GetObjectCall> {
        self.log().clone()
    }

    pub fn call_count(&self) -> usize {
        self.log().len()
    }

    fn log(&self) -> MutexGuard<'_, Vec<GetObjectCall>> {
        // A panicking test thread must not hide the calls recorded before it.
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn response_for(&self, bucket: &str, key: &str) -> StubResponse {
        self.responses
            .get(&(bucket.to_string(), key.to_string()))
            .or(self.default_response.as_ref())
            .cloned()
            .unwrap_or(StubResponse::NotFound)
    }
}

#[async_trait]
impl ObjectSource for StubStorage {
    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        sink: &mut ObjectSink<'_>,
    ) -> StorageResult<u64> {
        self.log().push(GetObjectCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
        });

        match self.response_for(bucket, key) {
            StubResponse::Body(body) => {
                sink.write_all(&body).await?;
                tracing::debug!(
                    bucket = %bucket,
                    key = %key,
                    size_bytes = body.len(),
                    "Stub get_object served"
                );
                Ok(body.len() as u64)
            }
            StubResponse::NotFound => Err(StorageError::NotFound(format!("{}/{}", bucket, key))),
            StubResponse::AccessDenied(reason) => Err(StorageError::AccessDenied(reason)),
            StubResponse::Transport(reason) => Err(StorageError::Transport(reason)),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Stub
    }
}
