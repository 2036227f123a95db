//! # CIM Client
//!
//! This module implements the operation contract layer: one method per remote operation.
//!
//! Every method follows the same two phase shape:
//!
//! 1. **Validation and assembly** happen synchronously, inside the method call. A malformed
//!    call returns an [`InvalidArgument`](crate::InvalidArgument) right away and nothing is
//!    sent.
//! 2. **Completion** happens later: the returned [`PendingCall`] is awaited, the request goes
//!    through the [`Transport`] exactly once, and resolves to the parsed response record or
//!    a [`CallError`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use cim_core::{CimClient, ClientConfig, Environment};
//! use cim_core::client::ShippingAddressKey;
//!
//! # async fn run() -> Result<(), cim_core::Error> {
//! let client = CimClient::connect(ClientConfig::new(Environment::Sandbox, "id", "key"))?;
//!
//! // Fails here, before any network activity, if an identifier is missing.
//! let call = client.get_customer_shipping_address(ShippingAddressKey::new("10", "20"))?;
//! let address = call.await?;
//! # Ok(())
//! # }
//! ```
mod dynamic;
mod payment_profile;
mod profile;
mod shipping_address;
mod transaction;
mod types;

pub use dynamic::{DynamicCallError, DynamicRequest};
pub use types::*;

use crate::{
    config::ClientConfig,
    error::CallError,
    transport::{
        Operation, OperationRequest, Transport,
        http::{HttpTransport, HttpTransportError},
    },
    xml::XmlFragment,
};
use futures_util::future::BoxFuture;
use std::future::IntoFuture;
use tracing::debug;

/// The operation client.
///
/// The generic parameter `T` is the transport requests are handed to once validated.
#[derive(Debug, Clone)]
pub struct CimClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl CimClient<HttpTransport> {
    /// Creates a client that talks to the gateway over HTTP.
    ///
    /// # Returns
    ///
    /// * `Ok(CimClient<HttpTransport>)` - The client, no connection is opened yet.
    /// * `Err(HttpTransportError)` - If the HTTP client cannot be built (TLS backend).
    pub fn connect(config: ClientConfig) -> Result<Self, HttpTransportError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T> CimClient<T> {
    /// Creates a client from an existing transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn ref_id(&self) -> Option<&str> {
        self.config.ref_id.as_deref()
    }

    /// Sets the merchant reference id sent with every following request.
    pub fn set_ref_id(&mut self, ref_id: impl Into<String>) {
        self.config.ref_id = Some(ref_id.into());
    }

    pub fn clear_ref_id(&mut self) {
        self.config.ref_id = None;
    }
}

impl<T: Transport> CimClient<T> {
    fn dispatch(
        &self,
        operation: Operation,
        body: XmlFragment,
        validation_mode: Option<ValidationMode>,
    ) -> PendingCall<'_, T> {
        debug!(
            %operation,
            body_bytes = body.as_str().len(),
            validation_mode = validation_mode.as_ref().map(ValidationMode::as_str),
            "operation validated"
        );

        PendingCall {
            transport: &self.transport,
            request: OperationRequest {
                operation,
                body: body.into_string(),
                validation_mode,
                ref_id: self.config.ref_id.clone(),
            },
        }
    }
}

/// A validated request that has not been sent yet.
///
/// Awaiting it sends the request exactly once. Dropping it sends nothing.
#[must_use = "a pending call does nothing unless awaited"]
#[derive(Debug)]
pub struct PendingCall<'a, T> {
    transport: &'a T,
    request: OperationRequest,
}

impl<T> PendingCall<'_, T> {
    pub fn operation(&self) -> Operation {
        self.request.operation
    }

    pub fn body(&self) -> &str {
        &self.request.body
    }
}

impl<'a, T: Transport> IntoFuture for PendingCall<'a, T> {
    type Output = Result<serde_json::Value, CallError>;
    type IntoFuture = BoxFuture<'a, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.transport.send(self.request)
    }
}
