//! Fetching externally hosted SAML metadata documents

use crate::error::{SamlProviderError, SamlProviderResult};
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

/// Retrieves a metadata document from a URL.
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> SamlProviderResult<String>;
}

/// Plain HTTP GET; anything other than `200 OK` is a failure.
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
}

impl HttpMetadataFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, url: &str) -> SamlProviderResult<String> {
        debug!("Fetching: {}", url);
        let transport_error = |e: reqwest::Error| SamlProviderError::HttpTransport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport_error)?;
        if response.status() != StatusCode::OK {
            return Err(SamlProviderError::HttpStatus {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        String::from_utf8(body.to_vec()).map_err(|e| SamlProviderError::HttpTransport {
            url: url.to_string(),
            message: format!("metadata document is not valid UTF-8: {e}"),
        })
    }
}
