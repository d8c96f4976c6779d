//! Fetch a stored object into a temporary file.

use crate::traits::{ObjectSource, StorageResult};
use std::io::Seek;
use std::path::PathBuf;
use std::sync::Arc;
use stowage_core::StorageObjectReference;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;

/// Downloads objects from an [`ObjectSource`] into fresh temporary files.
///
/// Every call is a single attempt: one `get_object` request, no retries.
/// The returned file belongs to the caller and is unlinked when dropped.
#[derive(Clone)]
pub struct ObjectFetcher {
    source: Arc<dyn ObjectSource>,
    temp_dir: Option<PathBuf>,
}

impl ObjectFetcher {
    pub fn new(source: Arc<dyn ObjectSource>) -> Self {
        Self {
            source,
            temp_dir: None,
        }
    }

    /// Create temporary files in `dir` instead of the system temp directory.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    pub fn source(&self) -> &Arc<dyn ObjectSource> {
        &self.source
    }

    /// Retrieve `reference` into a new temporary file.
    ///
    /// On success the file holds exactly the bytes the backend returned and
    /// is positioned at the start, ready to read. On failure the temporary
    /// file is removed and the backend error is returned unchanged.
    #[tracing::instrument(
        skip(self),
        fields(
            bucket = %reference.bucket(),
            key = %reference.key(),
            backend = %self.source.backend_type()
        )
    )]
    pub async fn fetch(&self, reference: &StorageObjectReference) -> StorageResult<NamedTempFile> {
        let start = std::time::Instant::now();

        let mut temp = match self.temp_dir {
            Some(ref dir) => NamedTempFile::new_in(dir)?,
            None => NamedTempFile::new()?,
        };
        // Separate handle so writes do not move the caller's read position.
        let mut sink = tokio::fs::File::from_std(temp.reopen()?);

        let size = match self
            .source
            .get_object(reference.bucket(), reference.key(), &mut sink)
            .await
        {
            Ok(size) => size,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Object fetch failed"
                );
                return Err(e);
            }
        };

        sink.flush().await?;
        drop(sink);
        temp.rewind()?;

        tracing::info!(
            size_bytes = size,
            path = %temp.path().display(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Object fetched to temporary file"
        );

        Ok(temp)
    }
}
