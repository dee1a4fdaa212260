//! AWS SDK integration: IAM SAML provider client wrapper.

pub mod iam_client;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AwsError {
    #[error("AWS configuration error: {0}")]
    ConfigError(String),
    #[error("IAM client error: {0}")]
    IamError(String),
    /// The referenced SAML provider does not exist.
    #[error("SAML provider {0} does not exist")]
    NoSuchEntity(String),
}

pub type AwsResult<T> = Result<T, AwsError>;
