//! Per-invocation session parameters
//!
//! A `Session` carries the persistent `bucket` flags (bucket name, region,
//! profile, endpoint) for a single process run. It is built once from the
//! command line and handed to every command handler; nothing here is shared
//! or persisted between runs.

use url::Url;

use crate::error::{Error, Result};

/// Region S3 assumes when a bucket carries no location constraint
pub const DEFAULT_REGION: &str = "us-east-1";

/// Session parameters shared by all `bucket` subcommands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Bucket name (`--name`)
    pub bucket: Option<String>,

    /// Region (`--region`)
    pub region: Option<String>,

    /// Shared config profile (`--profile`)
    pub profile: Option<String>,

    /// Custom S3-compatible endpoint (`--endpoint-url`)
    pub endpoint_url: Option<String>,
}

/// A bucket/region pair that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub bucket: String,
    pub region: String,
}

/// Options used to construct a storage client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Region to sign requests for; `None` defers to the provider chain
    pub region: Option<String>,

    /// Named profile from the shared config files
    pub profile: Option<String>,

    /// Endpoint override for S3-compatible servers
    pub endpoint_url: Option<String>,
}

impl Session {
    /// Create a session from raw flag values
    pub fn new(
        bucket: Option<String>,
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        Self {
            bucket,
            region,
            profile,
            endpoint_url,
        }
    }

    /// Fill in the profile from configuration defaults when no flag was given
    pub fn with_default_profile(mut self, profile: Option<&str>) -> Self {
        if non_empty(&self.profile).is_none() {
            self.profile = profile.filter(|p| !p.is_empty()).map(str::to_string);
        }
        self
    }

    /// Require a non-empty bucket name and region
    pub fn target(&self) -> Result<Target> {
        match (non_empty(&self.bucket), non_empty(&self.region)) {
            (Some(bucket), Some(region)) => Ok(Target {
                bucket: bucket.to_string(),
                region: region.to_string(),
            }),
            _ => Err(Error::Validation(
                "Bucket and region must be set via --name and --region".to_string(),
            )),
        }
    }

    /// The profile, if one was given
    pub fn profile(&self) -> Option<&str> {
        non_empty(&self.profile)
    }

    /// Build client options, validating the endpoint URL if present
    pub fn client_options(&self) -> Result<ClientOptions> {
        let endpoint_url = match non_empty(&self.endpoint_url) {
            Some(raw) => {
                let url = Url::parse(raw)?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(Error::Validation(format!(
                        "Endpoint URL must use http or https: {raw}"
                    )));
                }
                Some(raw.to_string())
            }
            None => None,
        };

        Ok(ClientOptions {
            region: non_empty(&self.region).map(str::to_string),
            profile: non_empty(&self.profile).map(str::to_string),
            endpoint_url,
        })
    }
}

/// Treat empty flag values the same as missing ones
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Resolve the region reported by a location query
///
/// S3 reports buckets in the default region with an empty location.
pub fn resolve_location(location: Option<&str>) -> String {
    match location {
        Some(loc) if !loc.is_empty() => loc.to_string(),
        _ => DEFAULT_REGION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(bucket: &str, region: &str) -> Session {
        Session::new(Some(bucket.into()), Some(region.into()), None, None)
    }

    #[test]
    fn test_target_valid() {
        let target = session("mybucket", "eu-west-1").target().unwrap();
        assert_eq!(target.bucket, "mybucket");
        assert_eq!(target.region, "eu-west-1");
    }

    #[test]
    fn test_target_missing_bucket() {
        let s = Session::new(None, Some("eu-west-1".into()), None, None);
        assert!(matches!(s.target(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_target_missing_region() {
        let s = Session::new(Some("mybucket".into()), None, None, None);
        assert!(matches!(s.target(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_target_empty_values() {
        assert!(session("", "eu-west-1").target().is_err());
        assert!(session("mybucket", "").target().is_err());
    }

    #[test]
    fn test_client_options_drops_empty_values() {
        let s = Session::new(Some("b".into()), Some(String::new()), Some(String::new()), None);
        let opts = s.client_options().unwrap();
        assert_eq!(opts, ClientOptions::default());
    }

    #[test]
    fn test_client_options_carries_profile_and_region() {
        let s = Session::new(None, Some("ap-south-1".into()), Some("dev".into()), None);
        let opts = s.client_options().unwrap();
        assert_eq!(opts.region.as_deref(), Some("ap-south-1"));
        assert_eq!(opts.profile.as_deref(), Some("dev"));
        assert!(opts.endpoint_url.is_none());
    }

    #[test]
    fn test_client_options_endpoint() {
        let mut s = session("b", "us-east-1");
        s.endpoint_url = Some("http://localhost:9000".into());
        let opts = s.client_options().unwrap();
        assert_eq!(opts.endpoint_url.as_deref(), Some("http://localhost:9000"));

        s.endpoint_url = Some("localhost:9000".into());
        assert!(s.client_options().unwrap_err().is_validation());

        s.endpoint_url = Some("ftp://example.com".into());
        assert!(s.client_options().unwrap_err().is_validation());
    }

    #[test]
    fn test_default_profile_only_fills_gaps() {
        let s = session("b", "r").with_default_profile(Some("from-config"));
        assert_eq!(s.profile(), Some("from-config"));

        let mut s = session("b", "r");
        s.profile = Some("from-flag".into());
        let s = s.with_default_profile(Some("from-config"));
        assert_eq!(s.profile(), Some("from-flag"));

        let s = session("b", "r").with_default_profile(Some(""));
        assert_eq!(s.profile(), None);
    }

    #[test]
    fn test_resolve_location() {
        assert_eq!(resolve_location(None), "us-east-1");
        assert_eq!(resolve_location(Some("")), "us-east-1");
        assert_eq!(resolve_location(Some("eu-west-1")), "eu-west-1");
        assert_eq!(resolve_location(Some("EU")), "EU");
    }
}
