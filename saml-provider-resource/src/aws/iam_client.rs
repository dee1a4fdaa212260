//! AWS IAM client wrapper for SAML provider operations

use crate::aws::{AwsError, AwsResult};
use async_trait::async_trait;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::Client as IamClient;

/// The IAM operations a SAML provider custom resource needs.
#[async_trait]
pub trait SamlProviderApi: Send + Sync {
    /// Register a new SAML provider and return its ARN.
    async fn create_saml_provider(&self, name: &str, metadata_document: &str) -> AwsResult<String>;

    /// Replace the metadata document of an existing provider and return its ARN.
    async fn update_saml_provider(&self, arn: &str, metadata_document: &str) -> AwsResult<String>;

    /// Delete a provider. A missing provider yields [`AwsError::NoSuchEntity`].
    async fn delete_saml_provider(&self, arn: &str) -> AwsResult<()>;
}

pub struct AwsIamClient {
    client: IamClient,
}

impl AwsIamClient {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SamlProviderApi for AwsIamClient {
    async fn create_saml_provider(&self, name: &str, metadata_document: &str) -> AwsResult<String> {
        let response = self
            .client
            .create_saml_provider()
            .name(name)
            .saml_metadata_document(metadata_document)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "Failed to create SAML provider '{name}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        response
            .saml_provider_arn()
            .map(str::to_string)
            .ok_or_else(|| {
                AwsError::IamError(format!(
                    "CreateSAMLProvider returned no ARN for provider '{name}'"
                ))
            })
    }

    async fn update_saml_provider(&self, arn: &str, metadata_document: &str) -> AwsResult<String> {
        let response = self
            .client
            .update_saml_provider()
            .saml_provider_arn(arn)
            .saml_metadata_document(metadata_document)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "Failed to update SAML provider '{arn}': {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        // The ARN never changes on update; fall back to the one we sent.
        Ok(response.saml_provider_arn().unwrap_or(arn).to_string())
    }

    async fn delete_saml_provider(&self, arn: &str) -> AwsResult<()> {
        self.client
            .delete_saml_provider()
            .saml_provider_arn(arn)
            .send()
            .await
            .map_err(|e| {
                let missing = e
                    .as_service_error()
                    .is_some_and(|service_error| service_error.is_no_such_entity_exception());
                if missing {
                    AwsError::NoSuchEntity(arn.to_string())
                } else {
                    AwsError::IamError(DisplayErrorContext(&e).to_string())
                }
            })?;
        Ok(())
    }
}
