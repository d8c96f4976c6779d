use std::fmt;

/// Raised when a reference is built from an empty bucket or key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReference {
    #[error("bucket must not be empty")]
    EmptyBucket,
    #[error("object key must not be empty")]
    EmptyKey,
}

/// Identifies one object in an object storage backend.
///
/// Immutable once constructed. Both parts are guaranteed non-empty; the
/// backend decides whether the object actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageObjectReference {
    bucket: String,
    key: String,
}

impl StorageObjectReference {
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Result<Self, InvalidReference> {
        let bucket = bucket.into();
        let key = key.into();

        if bucket.is_empty() {
            return Err(InvalidReference::EmptyBucket);
        }
        if key.is_empty() {
            return Err(InvalidReference::EmptyKey);
        }

        Ok(Self { bucket, key })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for StorageObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_reference() {
        let reference = StorageObjectReference::new("bucket", "any").unwrap();
        assert_eq!(reference.bucket(), "bucket");
        assert_eq!(reference.key(), "any");
        assert_eq!(reference.to_string(), "bucket/any");
    }

    #[test]
    fn rejects_empty_parts() {
        assert_eq!(
            StorageObjectReference::new("", "any"),
            Err(InvalidReference::EmptyBucket)
        );
        assert_eq!(
            StorageObjectReference::new("bucket", ""),
            Err(InvalidReference::EmptyKey)
        );
    }
}
