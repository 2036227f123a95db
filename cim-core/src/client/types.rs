use crate::{
    entity::{Address, Customer, PaymentProfile, Scalar, ToXml},
    error::InvalidArgument,
};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Whether, and how, the gateway test-verifies submitted payment data.
///
/// Bodies decode any mode name: names the client does not know are kept in
/// [`ValidationMode::Other`] and sent as-is, leaving the verdict to the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ValidationMode {
    #[default]
    None,
    TestMode,
    LiveMode,
    Other(String),
}

impl ValidationMode {
    pub fn as_str(&self) -> &str {
        match self {
            ValidationMode::None => "none",
            ValidationMode::TestMode => "testMode",
            ValidationMode::LiveMode => "liveMode",
            ValidationMode::Other(name) => name,
        }
    }
}

impl From<String> for ValidationMode {
    fn from(name: String) -> Self {
        name.parse().unwrap_or(ValidationMode::Other(name))
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown validationMode '{0}', expected none, testMode or liveMode")]
pub struct UnknownValidationMode(pub String);

impl FromStr for ValidationMode {
    type Err = UnknownValidationMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ValidationMode::None),
            "testMode" => Ok(ValidationMode::TestMode),
            "liveMode" => Ok(ValidationMode::LiveMode),
            other => Err(UnknownValidationMode(other.to_string())),
        }
    }
}

/// Profile transaction types known to the gateway.
///
/// `Refund` and `Void` are valid names, but
/// [`create_customer_profile_transaction`](super::CimClient::create_customer_profile_transaction)
/// only creates the first four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionType {
    AuthOnly,
    AuthCapture,
    CaptureOnly,
    PriorAuthCapture,
    Refund,
    Void,
}

impl TransactionType {
    pub const ALL: [TransactionType; 6] = [
        TransactionType::AuthOnly,
        TransactionType::AuthCapture,
        TransactionType::CaptureOnly,
        TransactionType::PriorAuthCapture,
        TransactionType::Refund,
        TransactionType::Void,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::AuthOnly => "AuthOnly",
            TransactionType::AuthCapture => "AuthCapture",
            TransactionType::CaptureOnly => "CaptureOnly",
            TransactionType::PriorAuthCapture => "PriorAuthCapture",
            TransactionType::Refund => "Refund",
            TransactionType::Void => "Void",
        }
    }

    /// Whether `createCustomerProfileTransaction` accepts this type.
    pub fn is_creatable(&self) -> bool {
        !matches!(self, TransactionType::Refund | TransactionType::Void)
    }

    /// The element wrapping the transaction record, e.g. `profileTransAuthCapture`.
    pub fn element_name(&self) -> String {
        format!("profileTrans{}", self.as_str())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or(InvalidArgument::UnsupportedTransactionType)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitTenderStatus {
    Voided,
    Completed,
}

impl SplitTenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitTenderStatus::Voided => "voided",
            SplitTenderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for SplitTenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitTenderStatus {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "voided" => Ok(SplitTenderStatus::Voided),
            "completed" => Ok(SplitTenderStatus::Completed),
            _ => Err(InvalidArgument::InvalidSplitTenderStatus),
        }
    }
}

fn is_blank(value: &Option<Scalar>) -> bool {
    value.as_ref().is_none_or(Scalar::is_absent)
}

fn is_blank_record<R: ToXml>(record: &Option<R>) -> bool {
    record.as_ref().is_none_or(ToXml::is_empty_record)
}

/// Arguments of `createCustomerProfile`.
///
/// A bare [`Customer`] converts into this request with the default validation mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerProfile {
    pub customer_profile: Option<Customer>,
    /// Defaults to `none`.
    pub validation_mode: Option<ValidationMode>,
}

impl From<Customer> for CreateCustomerProfile {
    fn from(customer: Customer) -> Self {
        Self {
            customer_profile: Some(customer),
            validation_mode: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerPaymentProfile {
    pub customer_profile_id: Scalar,
    pub payment_profile: Option<PaymentProfile>,
    /// Defaults to `none`.
    pub validation_mode: Option<ValidationMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCustomerShippingAddress {
    pub customer_profile_id: Scalar,
    pub shipping_address: Option<Address>,
}

/// Identifies a payment profile (get and delete).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentProfileKey {
    pub customer_profile_id: Scalar,
    pub customer_payment_profile_id: Scalar,
}

impl PaymentProfileKey {
    pub fn new(
        customer_profile_id: impl Into<Scalar>,
        customer_payment_profile_id: impl Into<Scalar>,
    ) -> Self {
        Self {
            customer_profile_id: customer_profile_id.into(),
            customer_payment_profile_id: customer_payment_profile_id.into(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.customer_profile_id.is_absent() && self.customer_payment_profile_id.is_absent()
    }
}

/// Identifies a shipping address (get and delete).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingAddressKey {
    pub customer_profile_id: Scalar,
    pub customer_address_id: Scalar,
}

impl ShippingAddressKey {
    pub fn new(
        customer_profile_id: impl Into<Scalar>,
        customer_address_id: impl Into<Scalar>,
    ) -> Self {
        Self {
            customer_profile_id: customer_profile_id.into(),
            customer_address_id: customer_address_id.into(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.customer_profile_id.is_absent() && self.customer_address_id.is_absent()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCustomerPaymentProfile {
    pub customer_profile_id: Scalar,
    pub payment_profile: Option<PaymentProfile>,
    /// Defaults to `none`.
    pub validation_mode: Option<ValidationMode>,
}

impl UpdateCustomerPaymentProfile {
    pub(crate) fn is_blank(&self) -> bool {
        self.customer_profile_id.is_absent()
            && is_blank_record(&self.payment_profile)
            && self.validation_mode.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateCustomerShippingAddress {
    pub customer_profile_id: Scalar,
    pub address: Option<Address>,
}

impl UpdateCustomerShippingAddress {
    pub(crate) fn is_blank(&self) -> bool {
        self.customer_profile_id.is_absent() && is_blank_record(&self.address)
    }
}

/// Arguments of `updateSplitTenderGroup`.
///
/// The status stays free text here; it is checked against `voided` and `completed` when the
/// operation is called.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateSplitTenderGroup {
    pub split_tender_id: Scalar,
    pub split_tender_status: String,
}

impl UpdateSplitTenderGroup {
    pub fn new(split_tender_id: impl Into<Scalar>, split_tender_status: impl Into<String>) -> Self {
        Self {
            split_tender_id: split_tender_id.into(),
            split_tender_status: split_tender_status.into(),
        }
    }

    pub(crate) fn is_blank(&self) -> bool {
        self.split_tender_id.is_absent() && self.split_tender_status.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidateCustomerPaymentProfile {
    pub customer_profile_id: Scalar,
    pub customer_payment_profile_id: Scalar,
    /// Sent only when present.
    pub customer_shipping_address_id: Option<Scalar>,
    /// Sent only when present.
    pub card_code: Option<Scalar>,
    pub validation_mode: Option<ValidationMode>,
}

impl ValidateCustomerPaymentProfile {
    pub(crate) fn is_blank(&self) -> bool {
        self.customer_profile_id.is_absent()
            && self.customer_payment_profile_id.is_absent()
            && is_blank(&self.customer_shipping_address_id)
            && is_blank(&self.card_code)
            && self.validation_mode.is_none()
    }
}
