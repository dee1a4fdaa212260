//! Request and outcome types for the SAML provider custom resource

use crate::error::{SamlProviderError, SamlProviderResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Key under which the provider ARN is exposed to `Fn::GetAtt`.
pub const ARN_DATA_KEY: &str = "Arn";

/// Lifecycle operation requested by CloudFormation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

impl FromStr for RequestType {
    type Err = SamlProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Create" => Ok(Self::Create),
            "Update" => Ok(Self::Update),
            "Delete" => Ok(Self::Delete),
            other => Err(SamlProviderError::UnknownOperation(other.to_string())),
        }
    }
}

/// Properties declared on the custom resource in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_url: Option<String>,
}

impl ResourceProperties {
    /// Inline metadata document, if one was given.
    pub fn inline_metadata(&self) -> Option<&str> {
        non_empty(self.metadata.as_deref())
    }

    pub fn metadata_url(&self) -> Option<&str> {
        non_empty(self.metadata_url.as_deref())
    }
}

/// A custom resource request as delivered by CloudFormation.
///
/// `RequestType` stays a raw string here so that an unrecognised value still
/// deserializes and can be answered with a `FAILED` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecycleEvent {
    #[serde(default)]
    pub request_type: String,
    #[serde(rename = "ResponseURL", default)]
    pub response_url: String,
    #[serde(default)]
    pub stack_id: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub logical_resource_id: String,
    #[serde(default)]
    pub resource_type: String,
    #[serde(default)]
    pub service_token: String,
    #[serde(default)]
    pub resource_properties: ResourceProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_resource_properties: Option<ResourceProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,
}

impl LifecycleEvent {
    pub fn operation(&self) -> SamlProviderResult<RequestType> {
        self.request_type.parse()
    }

    pub fn physical_resource_id(&self) -> Option<&str> {
        non_empty(self.physical_resource_id.as_deref())
    }

    /// True when the provider name differs from the previous properties.
    /// A missing previous property set counts as a rename.
    pub fn name_changed(&self) -> bool {
        self.old_resource_properties
            .as_ref()
            .map(|old| old.name.as_str())
            != Some(self.resource_properties.name.as_str())
    }
}

/// Facts about the Lambda invocation that the response protocol needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    pub log_stream_name: String,
}

impl InvocationContext {
    pub fn new(log_stream_name: impl Into<String>) -> Self {
        Self {
            log_stream_name: log_stream_name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Result of a successful lifecycle operation. Failures travel as `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderOutcome {
    pub data: BTreeMap<String, String>,
    pub physical_resource_id: String,
}

impl ProviderOutcome {
    /// Success carrying the provider ARN as both output data and physical id.
    pub fn with_arn(arn: String) -> Self {
        let mut data = BTreeMap::new();
        data.insert(ARN_DATA_KEY.to_string(), arn.clone());
        Self {
            data,
            physical_resource_id: arn,
        }
    }

    /// Success with no output data, used once a provider is gone.
    pub fn deleted(physical_resource_id: String) -> Self {
        Self {
            data: BTreeMap::new(),
            physical_resource_id,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
