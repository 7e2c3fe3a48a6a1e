//! S3 client implementation
//!
//! Wraps aws-sdk-s3 and implements the ObjectStore trait from ss-core.

use async_trait::async_trait;
use aws_sdk_s3::primitives::{ByteStream, DateTime};
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use ss_core::{
    BucketInfo, ClientFactory, ClientOptions, CreateBucketRequest, Error, ListOptions, ListResult,
    ObjectBody, ObjectInfo, ObjectStore, Result, UploadBody,
};

use crate::error::map_sdk_error;

/// S3 client wrapper
pub struct S3Client {
    inner: aws_sdk_s3::Client,
}

impl S3Client {
    /// Create a new S3 client from the given options
    ///
    /// Credentials come from the SDK's default provider chain; only the
    /// profile, region and endpoint are chosen here.
    pub async fn new(options: &ClientOptions) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = &options.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }

        if let Some(endpoint) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let config = loader.load().await;

        tracing::debug!(
            region = ?config.region(),
            profile = ?options.profile,
            endpoint = ?options.endpoint_url,
            "loaded AWS config"
        );

        // Custom endpoints are usually S3-compatible servers without
        // virtual-host bucket routing
        let s3_config = aws_sdk_s3::config::Builder::from(&config)
            .force_path_style(options.endpoint_url.is_some())
            .build();

        Ok(Self {
            inner: aws_sdk_s3::Client::from_conf(s3_config),
        })
    }

    /// Get the underlying aws-sdk-s3 client
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.inner
    }
}

fn to_timestamp(value: &DateTime) -> Option<jiff::Timestamp> {
    jiff::Timestamp::new(value.secs(), value.subsec_nanos() as i32).ok()
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn create_bucket(&self, request: CreateBucketRequest) -> Result<()> {
        let mut call = self.inner.create_bucket().bucket(&request.bucket);

        if let Some(region) = &request.location_constraint {
            let configuration = CreateBucketConfiguration::builder()
                .location_constraint(BucketLocationConstraint::from(region.as_str()))
                .build();
            call = call.create_bucket_configuration(configuration);
        }

        call.send().await.map_err(map_sdk_error)?;

        Ok(())
    }

    async fn delete_bucket(&self, bucket: &str) -> Result<()> {
        self.inner
            .delete_bucket()
            .bucket(bucket)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }

    async fn list_buckets(&self) -> Result<Vec<BucketInfo>> {
        let response = self
            .inner
            .list_buckets()
            .send()
            .await
            .map_err(map_sdk_error)?;

        let buckets = response
            .buckets()
            .iter()
            .map(|b| {
                let mut info = BucketInfo::new(b.name().unwrap_or_default());
                info.created = b.creation_date().and_then(to_timestamp);
                info
            })
            .collect();

        Ok(buckets)
    }

    async fn bucket_location(&self, bucket: &str) -> Result<Option<String>> {
        let response = self
            .inner
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(response
            .location_constraint()
            .map(|l| l.as_str().to_string()))
    }

    async fn put_object(&self, bucket: &str, key: &str, body: UploadBody) -> Result<ObjectInfo> {
        let UploadBody {
            file,
            length,
            content_type,
        } = body;

        let stream = ByteStream::read_from()
            .file(file)
            .build()
            .await
            .map_err(|e| Error::General(e.to_string()))?;

        let mut request = self
            .inner
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_length(length as i64)
            .body(stream);

        if let Some(ct) = content_type {
            request = request.content_type(ct);
        }

        let response = request.send().await.map_err(map_sdk_error)?;

        let mut info = ObjectInfo::file(key, length as i64);
        if let Some(etag) = response.e_tag() {
            info.etag = Some(etag.trim_matches('"').to_string());
        }
        info.last_modified = Some(jiff::Timestamp::now());

        Ok(info)
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectBody> {
        let response = self
            .inner
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(Box::new(response.body.into_async_read()))
    }

    async fn list_objects(&self, bucket: &str, options: &ListOptions) -> Result<ListResult> {
        let mut request = self.inner.list_objects_v2().bucket(bucket);

        if let Some(prefix) = options.prefix.as_deref().filter(|p| !p.is_empty()) {
            request = request.prefix(prefix);
        }

        if let Some(max) = options.max_keys {
            request = request.max_keys(max);
        }

        let response = request.send().await.map_err(map_sdk_error)?;

        let items = response
            .contents()
            .iter()
            .map(|object| {
                let mut info =
                    ObjectInfo::file(object.key().unwrap_or_default(), object.size().unwrap_or(0));
                info.last_modified = object.last_modified().and_then(to_timestamp);
                info.etag = object.e_tag().map(|e| e.trim_matches('"').to_string());
                info.storage_class = object.storage_class().map(|sc| sc.as_str().to_string());
                info
            })
            .collect();

        Ok(ListResult {
            items,
            truncated: response.is_truncated().unwrap_or(false),
        })
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<()> {
        self.inner
            .delete_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(())
    }
}

/// Factory producing a fresh [`S3Client`] per command
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsClientFactory;

#[async_trait]
impl ClientFactory for AwsClientFactory {
    async fn connect(&self, options: &ClientOptions) -> Result<Box<dyn ObjectStore>> {
        let client = S3Client::new(options).await?;
        Ok(Box::new(client))
    }
}
