//! # HTTP Transport
//!
//! Posts XML envelopes to the gateway endpoint over `reqwest` and folds the answer into the
//! two-channel result of [`Transport::send`].
//!
//! ## Envelope
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <{operation}Request xmlns="AnetApi/xml/v1/schema/AnetApiSchema.xsd">
//!   <merchantAuthentication><name/><transactionKey/></merchantAuthentication>
//!   <refId/>            <!-- only when configured -->
//!   ...body...
//!   <validationMode/>   <!-- only when the operation carries one -->
//! </{operation}Request>
//! ```
//!
//! ## Classification
//!
//! - `messages.resultCode == "Error"`, or an `ErrorResponse` root: `CallError::RemoteFault`
//!   with the first message's `code` and `text`.
//! - Connection errors, timeouts, non 2xx statuses and unparseable bodies:
//!   `CallError::TransportFailure`.
//!
//! The transport never retries.
use super::{OperationRequest, Transport};
use crate::{
    config::{ClientConfig, Credentials},
    error::CallError,
    xml::{self, XmlFragment},
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const SCHEMA_NAMESPACE: &str = "AnetApi/xml/v1/schema/AnetApiSchema.xsd";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Failure to reach the gateway at all (DNS, TLS, refused connection, timeout).
pub const E_CONNECT: &str = "E_CONNECT";
/// The gateway answered with a non success HTTP status.
pub const E_HTTP_STATUS: &str = "E_HTTP_STATUS";
/// The gateway answered with something that is not a response document.
pub const E_PARSE: &str = "E_PARSE";

#[derive(Debug, thiserror::Error)]
pub enum HttpTransportError {
    #[error("Failed to build the HTTP client: '{0}'")]
    Build(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, HttpTransportError> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        config: &ClientConfig,
        timeout: Duration,
    ) -> Result<Self, HttpTransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HttpTransportError::Build)?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url().to_string(),
            credentials: config.credentials.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Wraps a request body in the authenticated envelope.
    pub fn envelope(&self, request: &OperationRequest) -> String {
        let mut head = XmlFragment::new();
        head.wrap("merchantAuthentication", |auth| {
            auth.element("name", &self.credentials.api_login_id)
                .element("transactionKey", &self.credentials.transaction_key);
        })
        .optional_element("refId", request.ref_id.as_deref());

        let mut tail = XmlFragment::new();
        tail.optional_element("validationMode", request.validation_mode.as_ref());

        let root = format!("{}Request", request.operation);
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?><{root} xmlns="{SCHEMA_NAMESPACE}">{head}{body}{tail}</{root}>"#,
            body = request.body,
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: OperationRequest) -> Result<Value, CallError> {
        let operation = request.operation;
        let envelope = self.envelope(&request);

        debug!(%operation, endpoint = %self.endpoint, bytes = envelope.len(), "posting envelope");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(envelope)
            .send()
            .await
            .map_err(|err| {
                warn!(%operation, error = %err, "gateway request failed");
                CallError::transport(E_CONNECT, err.to_string())
            })?;

        let status = response.status();
        let document = response.text().await.map_err(|err| {
            warn!(%operation, %status, error = %err, "failed to read gateway response");
            CallError::transport(E_CONNECT, err.to_string())
        })?;

        debug!(%operation, %status, bytes = document.len(), "received gateway response");

        if !status.is_success() {
            warn!(%operation, %status, "gateway answered with a non success status");
            return Err(CallError::transport(
                E_HTTP_STATUS,
                format!("Gateway answered with HTTP {status}"),
            ));
        }

        classify_response(&document).inspect_err(|err| {
            debug!(%operation, code = err.code(), text = err.text(), "gateway call failed");
        })
    }
}

/// Parses a response document and separates remote faults from successful records.
pub fn classify_response(document: &str) -> Result<Value, CallError> {
    let (root, value) =
        xml::parse_document(document).map_err(|err| CallError::transport(E_PARSE, err.to_string()))?;

    let result_code = value
        .pointer("/messages/resultCode")
        .and_then(Value::as_str);

    if root == "ErrorResponse" || result_code == Some("Error") {
        let (code, text) = first_message(&value);
        return Err(CallError::remote(code, text));
    }

    Ok(value)
}

fn first_message(value: &Value) -> (String, String) {
    let message = match value.pointer("/messages/message") {
        Some(Value::Array(items)) => items.first(),
        other => other,
    };
    let field = |name: &str| {
        message
            .and_then(|m| m.get(name))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    (field("code"), field("text"))
}
