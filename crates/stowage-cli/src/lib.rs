use anyhow::Context;
use serde::Serialize;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use stowage_storage::{ObjectFetcher, StorageObjectReference};

/// Outcome of a `fetch` command, printed as JSON.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FetchSummary {
    pub bucket: String,
    pub key: String,
    pub backend: String,
    pub size_bytes: u64,
    /// Where the object was written. `None` when it was only inspected.
    pub path: Option<PathBuf>,
    /// Leading bytes of the body, lossily decoded, for quick inspection.
    pub preview: String,
}

const PREVIEW_BYTES: u64 = 64;

/// Fetch one object and optionally keep it at `output`.
///
/// Without `output` the temporary file is dropped (and removed) once the
/// summary has been built. With `output` the temporary file is created in
/// the destination's directory, so keeping it is a same-filesystem rename.
pub async fn fetch_object(
    fetcher: &ObjectFetcher,
    bucket: &str,
    key: &str,
    output: Option<&Path>,
) -> anyhow::Result<FetchSummary> {
    let reference = StorageObjectReference::new(bucket, key)?;
    let fetcher = match output {
        Some(dest) => fetcher.clone().with_temp_dir(destination_dir(dest)),
        None => fetcher.clone(),
    };
    let mut file = fetcher
        .fetch(&reference)
        .await
        .with_context(|| format!("Failed to fetch {}", reference))?;

    let size_bytes = file
        .as_file()
        .metadata()
        .context("Failed to stat fetched object")?
        .len();

    let mut head = Vec::new();
    file.by_ref()
        .take(PREVIEW_BYTES)
        .read_to_end(&mut head)
        .context("Failed to read fetched object")?;
    file.seek(SeekFrom::Start(0))?;

    let path = match output {
        Some(dest) => {
            file.persist(dest)
                .with_context(|| format!("Failed to write {}", dest.display()))?;
            Some(dest.to_path_buf())
        }
        None => None,
    };

    Ok(FetchSummary {
        bucket: reference.bucket().to_string(),
        key: reference.key().to_string(),
        backend: fetcher.source().backend_type().to_string(),
        size_bytes,
        path,
        preview: String::from_utf8_lossy(&head).into_owned(),
    })
}

/// Directory a file at `dest` will live in; bare file names resolve to `.`.
fn destination_dir(dest: &Path) -> PathBuf {
    match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
