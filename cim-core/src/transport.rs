//! # Transport
//!
//! The seam between the operation client and the network. The client never talks to the
//! gateway directly: it hands a fully assembled [`OperationRequest`] to a [`Transport`],
//! which wraps it in the authenticated envelope, sends it, and classifies the answer.
//!
//! * [`http::HttpTransport`] is the production implementation.
//! * Tests plug in their own implementations to observe requests without any network.
pub mod http;

use crate::{client::ValidationMode, error::CallError};
use async_trait::async_trait;
use std::{fmt, str::FromStr};

/// Every remote operation the client exposes, named exactly as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateCustomerProfile,
    CreateCustomerPaymentProfile,
    CreateCustomerShippingAddress,
    CreateCustomerProfileTransaction,
    DeleteCustomerProfile,
    DeleteCustomerPaymentProfile,
    DeleteCustomerShippingAddress,
    GetCustomerProfileIds,
    GetCustomerProfile,
    GetCustomerPaymentProfile,
    GetCustomerShippingAddress,
    UpdateCustomerProfile,
    UpdateCustomerPaymentProfile,
    UpdateCustomerShippingAddress,
    UpdateSplitTenderGroup,
    ValidateCustomerPaymentProfile,
}

impl Operation {
    pub const ALL: [Operation; 16] = [
        Operation::CreateCustomerProfile,
        Operation::CreateCustomerPaymentProfile,
        Operation::CreateCustomerShippingAddress,
        Operation::CreateCustomerProfileTransaction,
        Operation::DeleteCustomerProfile,
        Operation::DeleteCustomerPaymentProfile,
        Operation::DeleteCustomerShippingAddress,
        Operation::GetCustomerProfileIds,
        Operation::GetCustomerProfile,
        Operation::GetCustomerPaymentProfile,
        Operation::GetCustomerShippingAddress,
        Operation::UpdateCustomerProfile,
        Operation::UpdateCustomerPaymentProfile,
        Operation::UpdateCustomerShippingAddress,
        Operation::UpdateSplitTenderGroup,
        Operation::ValidateCustomerPaymentProfile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateCustomerProfile => "createCustomerProfile",
            Operation::CreateCustomerPaymentProfile => "createCustomerPaymentProfile",
            Operation::CreateCustomerShippingAddress => "createCustomerShippingAddress",
            Operation::CreateCustomerProfileTransaction => "createCustomerProfileTransaction",
            Operation::DeleteCustomerProfile => "deleteCustomerProfile",
            Operation::DeleteCustomerPaymentProfile => "deleteCustomerPaymentProfile",
            Operation::DeleteCustomerShippingAddress => "deleteCustomerShippingAddress",
            Operation::GetCustomerProfileIds => "getCustomerProfileIds",
            Operation::GetCustomerProfile => "getCustomerProfile",
            Operation::GetCustomerPaymentProfile => "getCustomerPaymentProfile",
            Operation::GetCustomerShippingAddress => "getCustomerShippingAddress",
            Operation::UpdateCustomerProfile => "updateCustomerProfile",
            Operation::UpdateCustomerPaymentProfile => "updateCustomerPaymentProfile",
            Operation::UpdateCustomerShippingAddress => "updateCustomerShippingAddress",
            Operation::UpdateSplitTenderGroup => "updateSplitTenderGroup",
            Operation::ValidateCustomerPaymentProfile => "validateCustomerPaymentProfile",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation '{0}'")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

/// A validated, fully assembled request, ready to be put in an envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    pub operation: Operation,
    /// The body fragment, placed inside the envelope after the authentication block.
    pub body: String,
    /// Placed after the body when present.
    pub validation_mode: Option<ValidationMode>,
    pub ref_id: Option<String>,
}

/// Sends one [`OperationRequest`] and resolves exactly once.
///
/// * `Ok(value)` - The gateway accepted the request; `value` is the parsed response record.
/// * `Err(CallError::RemoteFault)` - The gateway answered with an error result.
/// * `Err(CallError::TransportFailure)` - No usable answer was obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: OperationRequest) -> Result<serde_json::Value, CallError>;
}
