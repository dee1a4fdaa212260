//! CloudFormation custom resource response body and its delivery
//!
//! CloudFormation waits on a pre-signed S3 URL for exactly one JSON document
//! describing the outcome. The URL is signed without a content type, so the
//! PUT must carry an empty `Content-Type` header.

use crate::error::{SamlProviderError, SamlProviderResult};
use crate::types::{InvocationContext, LifecycleEvent, ProviderOutcome, ResponseStatus};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use std::collections::BTreeMap;

const REASON_DATA_KEY: &str = "Reason";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub no_echo: bool,
    pub data: BTreeMap<String, String>,
}

impl CustomResourceResponse {
    pub fn success(
        event: &LifecycleEvent,
        outcome: &ProviderOutcome,
        context: &InvocationContext,
    ) -> Self {
        Self::build(
            event,
            ResponseStatus::Success,
            log_stream_reason(context),
            Some(outcome.physical_resource_id.as_str()),
            outcome.data.clone(),
            context,
        )
    }

    /// `FAILED` response. The reason is repeated under `Data.Reason`.
    pub fn failure(event: &LifecycleEvent, reason: &str, context: &InvocationContext) -> Self {
        let mut data = BTreeMap::new();
        data.insert(REASON_DATA_KEY.to_string(), reason.to_string());
        Self::build(
            event,
            ResponseStatus::Failed,
            reason.to_string(),
            event.physical_resource_id(),
            data,
            context,
        )
    }

    fn build(
        event: &LifecycleEvent,
        status: ResponseStatus,
        reason: String,
        physical_resource_id: Option<&str>,
        data: BTreeMap<String, String>,
        context: &InvocationContext,
    ) -> Self {
        // CloudFormation rejects an empty physical id; the log stream is the
        // conventional stand-in when no provider exists yet.
        let physical_resource_id = physical_resource_id
            .filter(|id| !id.is_empty())
            .unwrap_or(context.log_stream_name.as_str())
            .to_string();

        Self {
            status,
            reason,
            physical_resource_id,
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            no_echo: false,
            data,
        }
    }
}

fn log_stream_reason(context: &InvocationContext) -> String {
    format!(
        "See the details in CloudWatch Log Stream: {}",
        context.log_stream_name
    )
}

/// Delivers the response document to CloudFormation.
#[async_trait]
pub trait ResponseSender: Send + Sync {
    async fn send(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> SamlProviderResult<()>;
}

pub struct HttpResponseSender {
    client: reqwest::Client,
}

impl HttpResponseSender {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ResponseSender for HttpResponseSender {
    async fn send(
        &self,
        response_url: &str,
        response: &CustomResourceResponse,
    ) -> SamlProviderResult<()> {
        let body = serde_json::to_string(response).map_err(|e| {
            SamlProviderError::callback(format!("Failed to serialize response: {e}"))
        })?;
        debug!("Response body: {}", body);

        let reply = self
            .client
            .put(response_url)
            .header(CONTENT_TYPE, "")
            .body(body)
            .send()
            .await
            .map_err(|e| SamlProviderError::callback(e.to_string()))?;

        let status = reply.status();
        info!("Status code: {}", status);
        if !status.is_success() {
            return Err(SamlProviderError::callback(format!(
                "response URL answered with {status}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ARN_DATA_KEY;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ARN: &str = "arn:aws:iam::123456789012:saml-provider/idp1";

    fn sample_event(physical_resource_id: Option<&str>) -> LifecycleEvent {
        LifecycleEvent {
            request_type: "Create".to_string(),
            stack_id: "arn:aws:cloudformation:us-east-1:123456789012:stack/idp/guid".to_string(),
            request_id: "req-1".to_string(),
            logical_resource_id: "Provider".to_string(),
            physical_resource_id: physical_resource_id.map(str::to_string),
            ..LifecycleEvent::default()
        }
    }

    fn context() -> InvocationContext {
        InvocationContext::new("2026/10/16/[$LATEST]abcdef")
    }

    #[test]
    fn test_success_response_carries_outcome() {
        let outcome = ProviderOutcome::with_arn(ARN.to_string());
        let response = CustomResourceResponse::success(&sample_event(None), &outcome, &context());

        assert_eq!(response.status, ResponseStatus::Success);
        assert_eq!(response.physical_resource_id, ARN);
        assert_eq!(response.data.get(ARN_DATA_KEY).map(String::as_str), Some(ARN));
        assert_eq!(
            response.reason,
            "See the details in CloudWatch Log Stream: 2026/10/16/[$LATEST]abcdef"
        );
        assert_eq!(response.request_id, "req-1");
        assert_eq!(response.logical_resource_id, "Provider");
    }

    #[test]
    fn test_failure_without_physical_id_falls_back_to_log_stream() {
        let response =
            CustomResourceResponse::failure(&sample_event(None), "Non-200 HTTP result: 404", &context());

        assert_eq!(response.status, ResponseStatus::Failed);
        assert_eq!(response.reason, "Non-200 HTTP result: 404");
        assert_eq!(response.physical_resource_id, "2026/10/16/[$LATEST]abcdef");
        assert_eq!(
            response.data.get("Reason").map(String::as_str),
            Some("Non-200 HTTP result: 404")
        );
    }

    #[test]
    fn test_failure_keeps_existing_physical_id() {
        let response = CustomResourceResponse::failure(&sample_event(Some(ARN)), "boom", &context());
        assert_eq!(response.physical_resource_id, ARN);
    }

    #[test]
    fn test_wire_format_uses_cloudformation_field_names() {
        let outcome = ProviderOutcome::with_arn(ARN.to_string());
        let response = CustomResourceResponse::success(&sample_event(None), &outcome, &context());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["Status"], "SUCCESS");
        assert_eq!(value["PhysicalResourceId"], ARN);
        assert_eq!(value["NoEcho"], false);
        assert_eq!(value["Data"]["Arn"], ARN);
        assert!(value.get("StackId").is_some());
        assert!(value.get("LogicalResourceId").is_some());
    }

    #[tokio::test]
    async fn test_http_sender_puts_response_document() {
        let mock_server = MockServer::start().await;
        let response = CustomResourceResponse::failure(&sample_event(Some(ARN)), "boom", &context());

        Mock::given(method("PUT"))
            .and(path("/signed-response"))
            .and(body_json(json!({
                "Status": "FAILED",
                "Reason": "boom",
                "PhysicalResourceId": ARN,
                "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/idp/guid",
                "RequestId": "req-1",
                "LogicalResourceId": "Provider",
                "NoEcho": false,
                "Data": {"Reason": "boom"}
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let sender = HttpResponseSender::new(reqwest::Client::new());
        sender
            .send(&format!("{}/signed-response", mock_server.uri()), &response)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_http_sender_reports_rejected_callback() {
        let mock_server = MockServer::start().await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let outcome = ProviderOutcome::with_arn(ARN.to_string());
        let response = CustomResourceResponse::success(&sample_event(None), &outcome, &context());
        let sender = HttpResponseSender::new(reqwest::Client::new());
        let err = sender.send(&mock_server.uri(), &response).await.unwrap_err();

        assert!(matches!(err, SamlProviderError::Callback(_)));
        assert!(err.to_string().contains("403"));
    }
}
