//! Create, update and delete of a SAML provider

use crate::aws::iam_client::SamlProviderApi;
use crate::aws::AwsError;
use crate::error::{SamlProviderError, SamlProviderResult};
use crate::metadata::MetadataFetcher;
use crate::types::{ProviderOutcome, ResourceProperties};
use log::{debug, info, warn};

impl<P: SamlProviderApi, F: MetadataFetcher> super::service::LifecycleHandler<P, F> {
    /// Resolve the metadata document for a property set
    ///
    /// An inline document wins. Otherwise the document is fetched from
    /// `MetadataUrl`. With neither present the result is empty and IAM
    /// rejects the call.
    pub async fn resolve_metadata(
        &self,
        properties: &ResourceProperties,
    ) -> SamlProviderResult<String> {
        let metadata = match (properties.inline_metadata(), properties.metadata_url()) {
            (Some(document), _) => document.to_string(),
            (None, Some(url)) => self.fetcher.fetch(url).await?,
            (None, None) => String::new(),
        };
        debug!("Metadata: {}", metadata);
        Ok(metadata)
    }

    pub async fn create(&self, name: &str, metadata: &str) -> SamlProviderResult<ProviderOutcome> {
        info!("Got Create");
        let arn = self.provider.create_saml_provider(name, metadata).await?;
        info!("Arn: {}", arn);
        Ok(ProviderOutcome::with_arn(arn))
    }

    pub async fn update(
        &self,
        physical_id: &str,
        metadata: &str,
    ) -> SamlProviderResult<ProviderOutcome> {
        info!("Got Update");
        let arn = self
            .provider
            .update_saml_provider(physical_id, metadata)
            .await?;
        Ok(ProviderOutcome::with_arn(arn))
    }

    /// Delete the provider; one that is already gone counts as deleted.
    pub async fn delete(&self, physical_id: &str) -> SamlProviderResult<ProviderOutcome> {
        info!("Got Delete");
        match self.provider.delete_saml_provider(physical_id).await {
            Ok(()) => {
                info!("Deleted: {}", physical_id);
                Ok(ProviderOutcome::deleted(physical_id.to_string()))
            }
            Err(AwsError::NoSuchEntity(_)) => {
                warn!("Provider {} does not exist.", physical_id);
                Ok(ProviderOutcome::deleted(physical_id.to_string()))
            }
            Err(source) => Err(SamlProviderError::DeleteFailed {
                physical_id: physical_id.to_string(),
                source,
            }),
        }
    }
}
