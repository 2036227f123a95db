//! # Gateway Stub
//!
//! **INTERNAL USE ONLY**: This crate exists solely to stand in for the payment gateway's XML
//! endpoint while integration testing `cim-core` and the `cim` CLI.
//! It is not intended for production use.
//!
//! Responses are canned per operation: a mounted response answers every envelope whose root
//! element is `<{operation}Request`. Canned documents start with a UTF-8 byte order mark, like
//! the real gateway's.
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_string_contains, header, method, path},
};

pub const REQUEST_PATH: &str = "/xml/v1/request.api";

const BOM: &str = "\u{feff}";
const NAMESPACE: &str = "AnetApi/xml/v1/schema/AnetApiSchema.xsd";

pub struct StubGateway {
    server: MockServer,
}

impl StubGateway {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// The URL clients should post envelopes to.
    pub fn endpoint(&self) -> String {
        format!("{}{REQUEST_PATH}", self.server.uri())
    }

    /// Answers every `operation` request with `document`, with HTTP 200.
    pub async fn respond(&self, operation: &str, document: String) {
        self.respond_with(operation, ResponseTemplate::new(200).set_body_string(document))
            .await;
    }

    /// Answers every `operation` request with a bare HTTP status and no body.
    pub async fn respond_status(&self, operation: &str, status: u16) {
        self.respond_with(operation, ResponseTemplate::new(status))
            .await;
    }

    async fn respond_with(&self, operation: &str, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path(REQUEST_PATH))
            .and(header("content-type", "text/xml; charset=utf-8"))
            .and(body_string_contains(format!("<{operation}Request ")))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }

    /// The envelopes received so far, in arrival order.
    pub async fn received_envelopes(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| String::from_utf8_lossy(&request.body).into_owned())
            .collect()
    }
}

/// A successful `{operation}Response` with `content` after the messages block.
pub fn ok_response(operation: &str, content: &str) -> String {
    format!(
        "{BOM}<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <{operation}Response xmlns=\"{NAMESPACE}\">\
         <messages><resultCode>Ok</resultCode>\
         <message><code>I00001</code><text>Successful.</text></message></messages>\
         {content}</{operation}Response>"
    )
}

/// A rejected `{operation}Response` carrying a single gateway message.
pub fn error_response(operation: &str, code: &str, text: &str) -> String {
    format!(
        "{BOM}<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <{operation}Response xmlns=\"{NAMESPACE}\">\
         <messages><resultCode>Error</resultCode>\
         <message><code>{code}</code><text>{text}</text></message></messages>\
         </{operation}Response>"
    )
}

/// The document the gateway sends when it cannot even tell which operation was meant.
pub fn error_root(code: &str, text: &str) -> String {
    format!(
        "{BOM}<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <ErrorResponse xmlns=\"{NAMESPACE}\">\
         <messages><resultCode>Error</resultCode>\
         <message><code>{code}</code><text>{text}</text></message></messages>\
         </ErrorResponse>"
    )
}
