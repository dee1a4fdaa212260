//! This crate provides the core logic of the SAML provider CloudFormation
//! custom resource:
//! - Lifecycle dispatch (Create, rename-aware Update, idempotent Delete)
//! - IAM SAML provider operations
//! - Metadata resolution (inline or fetched from a URL)
//! - The custom resource response callback
//!

mod aws;
pub mod commands;
mod error;
mod metadata;
mod response;
mod types;

#[cfg(test)]
mod test_support;

// Re-exports for a small, focused public API
pub use aws::iam_client::{AwsIamClient, SamlProviderApi};
pub use aws::{AwsError, AwsResult};
pub use commands::{handle_event, LifecycleHandler};
pub use error::{SamlProviderError, SamlProviderResult};
pub use metadata::{HttpMetadataFetcher, MetadataFetcher};
pub use response::{CustomResourceResponse, HttpResponseSender, ResponseSender};
pub use types::{
    InvocationContext, LifecycleEvent, ProviderOutcome, RequestType, ResourceProperties,
    ResponseStatus, ARN_DATA_KEY,
};
