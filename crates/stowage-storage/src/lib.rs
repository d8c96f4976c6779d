//! Stowage Storage Library
//!
//! This crate provides the `ObjectSource` capability, its backends (S3, local
//! filesystem, in-memory stub) and the `ObjectFetcher` that materializes a
//! remote object into a caller-owned temporary file.
//!
//! # Object addressing
//!
//! Objects are addressed by `(bucket, key)`. The local backend maps this to
//! `{root}/{bucket}/{key}`; bucket and key must not contain `..` or a
//! leading `/`.

pub mod factory;
pub mod fetcher;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod stub;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use fetcher::ObjectFetcher;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use stowage_core::{StorageBackend, StorageObjectReference};
pub use stub::{GetObjectCall, StubResponse, StubStorage};
pub use traits::{ObjectSink, ObjectSource, StorageError, StorageResult};
