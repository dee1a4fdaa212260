//! SAML Provider Lifecycle Handler
//!
//! This module provides the handler that owns the collaborators a custom
//! resource invocation needs: the IAM client used to manage the provider and
//! the HTTP fetcher used to resolve externally hosted metadata. The lifecycle
//! operations live in `lifecycle.rs`, the request dispatch in `dispatch.rs`.

use crate::aws::iam_client::{AwsIamClient, SamlProviderApi};
use crate::aws::AwsError;
use crate::error::{SamlProviderError, SamlProviderResult};
use crate::metadata::{HttpMetadataFetcher, MetadataFetcher};
use aws_sdk_iam::Client as IamClient;

/// Holds the IAM and metadata collaborators for one process.
pub struct LifecycleHandler<P, F> {
    pub(crate) provider: P,
    pub(crate) fetcher: F,
}

impl<P: SamlProviderApi, F: MetadataFetcher> LifecycleHandler<P, F> {
    pub fn new(provider: P, fetcher: F) -> Self {
        Self { provider, fetcher }
    }
}

impl LifecycleHandler<AwsIamClient, HttpMetadataFetcher> {
    /// Create a handler backed by the real IAM API
    ///
    /// The AWS configuration is loaded using the default credential provider
    /// chain. `endpoint_url` overrides the IAM endpoint, for local stacks.
    ///
    /// # Errors
    ///
    /// Returns [`SamlProviderError::ClientConstruction`] when no region can
    /// be resolved, since the SDK cannot build an IAM endpoint without one.
    pub async fn from_env(
        http: reqwest::Client,
        endpoint_url: Option<&str>,
    ) -> SamlProviderResult<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(url) = endpoint_url {
            loader = loader.endpoint_url(url);
        }
        let config = loader.load().await;

        if config.region().is_none() {
            let err = AwsError::ConfigError("no AWS region configured".to_string());
            return Err(SamlProviderError::client_construction(err.to_string()));
        }

        Ok(Self::new(
            AwsIamClient::new(IamClient::new(&config)),
            HttpMetadataFetcher::new(http),
        ))
    }
}
