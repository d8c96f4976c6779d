//! Stowage Core Library
//!
//! This crate provides the domain models, storage backend selection and
//! configuration shared by the storage, client and CLI crates.

pub mod config;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use models::{InvalidReference, Order, OrderList, StorageObjectReference};
pub use storage_types::StorageBackend;
