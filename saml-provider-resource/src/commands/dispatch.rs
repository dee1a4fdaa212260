//! Request dispatch and the per-invocation entry point

use super::service::LifecycleHandler;
use crate::aws::iam_client::SamlProviderApi;
use crate::error::SamlProviderResult;
use crate::metadata::MetadataFetcher;
use crate::response::{CustomResourceResponse, ResponseSender};
use crate::types::{InvocationContext, LifecycleEvent, ProviderOutcome, RequestType};
use log::{debug, error};

impl<P: SamlProviderApi, F: MetadataFetcher> LifecycleHandler<P, F> {
    /// Route a request to create, update or delete
    ///
    /// A renamed provider is a new IAM resource, so an Update that changes
    /// `Name` creates a fresh provider and CloudFormation deletes the old
    /// physical id afterwards. Metadata is only resolved for Create and
    /// Update; a Delete never depends on the metadata URL being reachable.
    pub async fn dispatch(&self, event: &LifecycleEvent) -> SamlProviderResult<ProviderOutcome> {
        let operation = event.operation().inspect_err(|_| {
            error!("Unknown operation: {}", event.request_type);
        })?;
        let properties = &event.resource_properties;
        let physical_id = event.physical_resource_id().unwrap_or_default();

        match operation {
            RequestType::Create => {
                let metadata = self.resolve_metadata(properties).await?;
                self.create(&properties.name, &metadata).await
            }
            RequestType::Update => {
                let metadata = self.resolve_metadata(properties).await?;
                if event.name_changed() {
                    self.create(&properties.name, &metadata).await
                } else {
                    self.update(physical_id, &metadata).await
                }
            }
            RequestType::Delete => self.delete(physical_id).await,
        }
    }
}

/// Handle one custom resource request end to end
///
/// `init` is the result of constructing the handler at process start. Exactly
/// one response is sent to CloudFormation whatever happens; failures are
/// reported as `FAILED` and then returned so the Lambda runtime records them
/// too. A response that cannot be delivered is logged, not retried.
pub async fn handle_event<P, F, S>(
    init: &SamlProviderResult<LifecycleHandler<P, F>>,
    sender: &S,
    event: &LifecycleEvent,
    context: &InvocationContext,
) -> SamlProviderResult<ProviderOutcome>
where
    P: SamlProviderApi,
    F: MetadataFetcher,
    S: ResponseSender + ?Sized,
{
    debug!("{:?}", event);

    let result = match init {
        Ok(handler) => handler.dispatch(event).await,
        Err(init_error) => Err(init_error.clone()),
    };

    let response = match &result {
        Ok(outcome) => CustomResourceResponse::success(event, outcome, context),
        Err(e) => {
            error!("Exception: {}", e);
            CustomResourceResponse::failure(event, &e.to_string(), context)
        }
    };

    if let Err(e) = sender.send(&event.response_url, &response).await {
        error!("send(..) failed executing request: {}", e);
    }

    result
}
