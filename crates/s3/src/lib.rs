//! ss-s3: S3 SDK adapter for the simple-s3 CLI
//!
//! This crate provides the implementation of the ObjectStore and
//! ClientFactory traits using the aws-sdk-s3 crate. It is the only crate
//! that directly depends on the AWS SDK.

pub mod client;
pub mod error;

pub use client::{AwsClientFactory, S3Client};
