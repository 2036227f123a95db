//! # Errors
//!
//! An operation can fail on two independent channels:
//!
//! - **[`InvalidArgument`]**: the call itself is malformed. It is returned synchronously by the
//!   operation method and nothing is ever sent to the gateway. The messages are stable and
//!   callers are allowed to match on the text.
//! - **[`CallError`]**: the request was dispatched, and either the gateway rejected it
//!   (`RemoteFault`) or it never produced a usable answer (`TransportFailure`).
use crate::{config::ConfigError, transport::http::HttpTransportError};

/// A local precondition violation detected before any remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("You must enter in a customerProfileId.")]
    CustomerProfileIdMissing,
    #[error("You must enter in a customerPaymentProfileId.")]
    CustomerPaymentProfileIdMissing,
    #[error("You must enter in a customerAddressId.")]
    CustomerAddressIdMissing,
    #[error("You must enter in a customerProfileId and customerPaymentProfileId.")]
    PaymentProfileKeyMissing,
    #[error("You must enter in a customerProfileId and customerAddressId.")]
    ShippingAddressKeyMissing,
    #[error("You must enter in a customerProfileId and a customerAddressId.")]
    ShippingAddressDeleteKeyMissing,
    #[error(
        "Invalid transactionType. Must be: AuthCapture, AuthOnly, CaptureOnly, or PriorAuthCapture"
    )]
    UnsupportedTransactionType,
    #[error("You must provide a customer object.")]
    NoCustomer,
    #[error("You must provide a customerProfileId.")]
    NoCustomerProfileId,
    #[error("You must provide a customerPaymentProfileId.")]
    NoCustomerPaymentProfileId,
    #[error("You must enter in a customerProfileId and paymentProfile object.")]
    PaymentProfileUpdateMissing,
    #[error("You must provide a paymentProfile object.")]
    NoPaymentProfile,
    #[error(
        "You must enter in a customerProfileId, an address object, and a customerShippingAddressId."
    )]
    ShippingAddressUpdateMissing,
    #[error("You must provide an address object.")]
    NoAddress,
    #[error("You must enter in a splitTenderId and a splitTenderStatus.")]
    SplitTenderMissing,
    #[error("You must provide a splitTenderId.")]
    NoSplitTenderId,
    #[error("You must provide a splitTenderStatus.")]
    NoSplitTenderStatus,
    #[error("splitTenderStatus must be either voided or completed.")]
    InvalidSplitTenderStatus,
    #[error("You must enter in a customerProfileId and a customerPaymentProfileId.")]
    ValidationMissing,
    #[error("You must provide a validationMode.")]
    NoValidationMode,
}

/// Discriminant of a [`CallError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RemoteFault,
    TransportFailure,
}

/// The failure half of a completed call.
///
/// Both variants carry a machine readable `code` and a human readable `text`. For remote
/// faults they are the gateway's own message code and text (e.g. `E00040`, "The record cannot
/// be found."); transport failures use local `E_*` codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    #[error("Remote fault [{code}]: {text}")]
    RemoteFault { code: String, text: String },
    #[error("Transport failure [{code}]: {text}")]
    TransportFailure { code: String, text: String },
}

impl CallError {
    pub fn remote(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self::RemoteFault {
            code: code.into(),
            text: text.into(),
        }
    }

    pub fn transport(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self::TransportFailure {
            code: code.into(),
            text: text.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CallError::RemoteFault { .. } => ErrorKind::RemoteFault,
            CallError::TransportFailure { .. } => ErrorKind::TransportFailure,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            CallError::RemoteFault { code, .. } | CallError::TransportFailure { code, .. } => code,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            CallError::RemoteFault { text, .. } | CallError::TransportFailure { text, .. } => text,
        }
    }
}

/// Umbrella error, so that both phases of a call can be chained with `?`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    #[error(transparent)]
    Call(#[from] CallError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Transport(#[from] HttpTransportError),
}
