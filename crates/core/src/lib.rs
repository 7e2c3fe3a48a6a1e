//! ss-core: Core library for the simple-s3 CLI
//!
//! This crate provides the core functionality for the simple-s3 CLI, including:
//! - Configuration loading
//! - Session parameters and flag validation
//! - ObjectStore and ClientFactory traits for S3 operations
//!
//! This crate is designed to be independent of any specific S3 SDK,
//! allowing command handlers to be tested against fake clients.

pub mod config;
pub mod error;
pub mod session;
pub mod traits;

pub use config::{Config, ConfigManager, Defaults};
pub use error::{Error, Result};
pub use session::{ClientOptions, DEFAULT_REGION, Session, Target, non_empty, resolve_location};
pub use traits::{
    BucketInfo, ClientFactory, CreateBucketRequest, ListOptions, ListResult, ObjectBody,
    ObjectInfo, ObjectStore, UploadBody,
};
