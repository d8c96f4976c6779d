//! Configuration module
//!
//! Storage backend settings loaded from the environment (and a `.env` file
//! when present).

use std::env;
use std::path::PathBuf;

use crate::storage_types::StorageBackend;

/// Storage configuration
#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
}

/// Application configuration.
#[derive(Clone, Debug, Default)]
pub struct Config(pub StorageConfig);

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let storage_backend = non_empty("STORAGE_BACKEND")
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?;

        let config = StorageConfig {
            storage_backend,
            s3_bucket: non_empty("S3_BUCKET"),
            s3_region: non_empty("S3_REGION"),
            s3_endpoint: non_empty("S3_ENDPOINT"),
            aws_region: non_empty("AWS_REGION"),
            local_storage_path: non_empty("LOCAL_STORAGE_PATH"),
        };

        Ok(Config(config))
    }

    pub fn storage_backend(&self) -> Option<StorageBackend> {
        self.0.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.0.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.0.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.0.s3_endpoint.as_deref()
    }

    pub fn aws_region(&self) -> Option<&str> {
        self.0.aws_region.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<PathBuf> {
        self.0.local_storage_path.as_ref().map(PathBuf::from)
    }
}
