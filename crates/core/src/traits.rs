//! ObjectStore trait definition
//!
//! This trait defines the interface for the storage operations the CLI needs.
//! It allows the CLI to be decoupled from the specific S3 SDK implementation.

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncRead;

use crate::error::Result;
use crate::session::{ClientOptions, DEFAULT_REGION};

/// Streaming body of a downloaded object
pub type ObjectBody = Box<dyn AsyncRead + Send + Unpin>;

/// A bucket as reported by a bucket listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketInfo {
    /// Bucket name
    pub name: String,

    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
}

impl BucketInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            created: None,
        }
    }
}

/// Metadata for an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectInfo {
    /// Object key
    pub key: String,

    /// Size in bytes
    pub size_bytes: i64,

    /// Human-readable size
    pub size_human: String,

    /// Last modified timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,

    /// ETag (usually MD5 for single-part uploads)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Storage class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,
}

impl ObjectInfo {
    /// Create a new ObjectInfo for a key of the given size
    pub fn file(key: impl Into<String>, size: i64) -> Self {
        Self {
            key: key.into(),
            size_bytes: size,
            size_human: humansize::format_size(size.max(0) as u64, humansize::BINARY),
            last_modified: None,
            etag: None,
            storage_class: None,
        }
    }
}

/// Result of a single list call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListResult {
    /// Listed objects
    pub items: Vec<ObjectInfo>,

    /// Whether more keys exist beyond this page
    pub truncated: bool,
}

/// Options for list operations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Prefix to filter by
    pub prefix: Option<String>,

    /// Maximum number of keys to return
    pub max_keys: Option<i32>,
}

/// Parameters of a create-bucket call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBucketRequest {
    pub bucket: String,

    /// Explicit location constraint, absent for the default region
    pub location_constraint: Option<String>,
}

impl CreateBucketRequest {
    /// Build the request for creating `bucket` in `region`
    ///
    /// S3 rejects a location constraint naming the default region, so it is
    /// only set for other regions.
    pub fn for_region(bucket: impl Into<String>, region: &str) -> Self {
        let location_constraint = (region != DEFAULT_REGION).then(|| region.to_string());
        Self {
            bucket: bucket.into(),
            location_constraint,
        }
    }
}

/// An opened local file ready to be sent as an object body
#[derive(Debug)]
pub struct UploadBody {
    pub file: tokio::fs::File,

    /// Length of the file in bytes
    pub length: u64,

    pub content_type: Option<String>,
}

/// Trait for the storage operations used by the CLI
///
/// This trait is implemented by the S3 adapter and can be mocked for testing.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create a bucket
    async fn create_bucket(&self, request: CreateBucketRequest) -> Result<()>;

    /// Delete a bucket
    async fn delete_bucket(&self, bucket: &str) -> Result<()>;

    /// List buckets
    async fn list_buckets(&self) -> Result<Vec<BucketInfo>>;

    /// Get the raw location constraint of a bucket
    async fn bucket_location(&self, bucket: &str) -> Result<Option<String>>;

    /// Upload a local file to `key`
    async fn put_object(&self, bucket: &str, key: &str, body: UploadBody) -> Result<ObjectInfo>;

    /// Get object content as a stream
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectBody>;

    /// List objects in a bucket (a single page)
    async fn list_objects(&self, bucket: &str, options: &ListOptions) -> Result<ListResult>;

    /// Delete an object
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()>;
}

/// Builds a fresh [`ObjectStore`] for each command
#[async_trait]
pub trait ClientFactory: Send + Sync {
    async fn connect(&self, options: &ClientOptions) -> Result<Box<dyn ObjectStore>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_info_file() {
        let info = ObjectInfo::file("test.txt", 1024);
        assert_eq!(info.key, "test.txt");
        assert_eq!(info.size_bytes, 1024);
        assert_eq!(info.size_human, "1 KiB");
    }

    #[test]
    fn test_create_bucket_request_default_region() {
        let req = CreateBucketRequest::for_region("mybucket", "us-east-1");
        assert_eq!(req.bucket, "mybucket");
        assert!(req.location_constraint.is_none());
    }

    #[test]
    fn test_create_bucket_request_other_region() {
        let req = CreateBucketRequest::for_region("mybucket", "eu-west-1");
        assert_eq!(req.location_constraint.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_bucket_info_serializes_without_date() {
        let json = serde_json::to_string(&BucketInfo::new("logs")).unwrap();
        assert_eq!(json, r#"{"name":"logs"}"#);
    }
}
