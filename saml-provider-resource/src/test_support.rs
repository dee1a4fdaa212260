//! In-memory fakes for the IAM, metadata and callback collaborators

use crate::aws::iam_client::SamlProviderApi;
use crate::aws::{AwsError, AwsResult};
use crate::error::{SamlProviderError, SamlProviderResult};
use crate::metadata::MetadataFetcher;
use crate::response::{CustomResourceResponse, ResponseSender};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IamCall {
    Create { name: String, metadata: String },
    Update { arn: String, metadata: String },
    Delete { arn: String },
}

/// Records every call; when `failure` is set every call returns it.
#[derive(Default)]
pub(crate) struct FakeIam {
    calls: Mutex<Vec<IamCall>>,
    failure: Option<AwsError>,
}

impl FakeIam {
    pub(crate) fn failing(error: AwsError) -> Self {
        Self {
            calls: Mutex::default(),
            failure: Some(error),
        }
    }

    pub(crate) fn calls(&self) -> Vec<IamCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: IamCall) -> AwsResult<()> {
        self.calls.lock().unwrap().push(call);
        self.failure.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl SamlProviderApi for FakeIam {
    async fn create_saml_provider(&self, name: &str, metadata_document: &str) -> AwsResult<String> {
        self.record(IamCall::Create {
            name: name.to_string(),
            metadata: metadata_document.to_string(),
        })?;
        Ok(format!("arn:aws:iam::123456789012:saml-provider/{name}"))
    }

    async fn update_saml_provider(&self, arn: &str, metadata_document: &str) -> AwsResult<String> {
        self.record(IamCall::Update {
            arn: arn.to_string(),
            metadata: metadata_document.to_string(),
        })?;
        Ok(arn.to_string())
    }

    async fn delete_saml_provider(&self, arn: &str) -> AwsResult<()> {
        self.record(IamCall::Delete {
            arn: arn.to_string(),
        })
    }
}

/// Serves fixed documents by URL; unknown URLs answer 404.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    documents: HashMap<String, String>,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub(crate) fn with_document(url: &str, document: &str) -> Self {
        let mut documents = HashMap::new();
        documents.insert(url.to_string(), document.to_string());
        Self {
            documents,
            requested: Mutex::default(),
        }
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> SamlProviderResult<String> {
        self.requested.lock().unwrap().push(url.to_string());
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| SamlProviderError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

#[derive(Default)]
pub(crate) struct RecordingSender {
    sent: Mutex<Vec<(String, CustomResourceResponse)>>,
    reject: bool,
}

impl RecordingSender {
    pub(crate) fn rejecting() -> Self {
        Self {
            sent: Mutex::default(),
            reject: true,
        }
    }

    pub(crate) fn sent(&self) -> Vec<(String, CustomResourceResponse)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseSender for RecordingSender {
    async fn send(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> SamlProviderResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((response_url.to_string(), response.clone()));
        if self.reject {
            return Err(SamlProviderError::callback("response URL answered with 403"));
        }
        Ok(())
    }
}
