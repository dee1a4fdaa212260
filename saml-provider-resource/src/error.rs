//! Error types for custom resource invocations

use crate::aws::AwsError;
use thiserror::Error;

/// Every failure an invocation can hit. All of them except a missing
/// provider on delete are reported to CloudFormation as `FAILED`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamlProviderError {
    /// The IAM client could not be constructed at process start.
    #[error("Unable to create IAM Client: {0}")]
    ClientConstruction(String),

    /// The metadata URL answered with something other than 200.
    #[error("Non-200 HTTP result: {status}")]
    HttpStatus { url: String, status: u16 },

    /// The metadata URL could not be reached or its body could not be read.
    #[error("Failed to fetch metadata from {url}: {message}")]
    HttpTransport { url: String, message: String },

    #[error("Unknown Operation: {0}")]
    UnknownOperation(String),

    #[error(transparent)]
    Provider(#[from] AwsError),

    #[error("Cannot delete SAML provider {physical_id}: {source}")]
    DeleteFailed {
        physical_id: String,
        #[source]
        source: AwsError,
    },

    /// The response could not be delivered to the pre-signed callback URL.
    #[error("Failed to send custom resource response: {0}")]
    Callback(String),
}

impl SamlProviderError {
    pub fn client_construction(message: impl Into<String>) -> Self {
        Self::ClientConstruction(message.into())
    }

    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback(message.into())
    }
}

pub type SamlProviderResult<T> = Result<T, SamlProviderError>;
