//! # Dynamic Dispatch
//!
//! Invokes any operation by its wire name with a loosely shaped JSON body, the way a command
//! line or a scripting front end would. The body is decoded into the operation's typed request
//! and goes through exactly the same validation as the typed methods.
use super::{
    CimClient, CreateCustomerPaymentProfile, CreateCustomerProfile, CreateCustomerShippingAddress,
    PaymentProfileKey, PendingCall, ShippingAddressKey, TransactionType,
    UpdateCustomerPaymentProfile, UpdateCustomerShippingAddress, UpdateSplitTenderGroup,
    ValidateCustomerPaymentProfile,
};
use crate::{
    entity::{Customer, CustomerBasic, Scalar, Transaction},
    error::InvalidArgument,
    transport::{Operation, Transport},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

/// A request object naming an operation and carrying its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRequest {
    pub operation: Operation,
    /// The JSON body of the request.
    /// - For `deleteCustomerProfile` and `getCustomerProfile`: the id, as a string or number.
    /// - For `getCustomerProfileIds`: ignored.
    /// - For `createCustomerProfileTransaction`: `{ "transactionType": ..., "transaction": {...} }`.
    /// - For every other operation: an object shaped like the operation's request.
    pub body: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum DynamicCallError {
    #[error("Failed to decode the request body: '{0}'")]
    InvalidBody(#[from] serde_json::Error),
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct TransactionBody {
    transaction_type: String,
    transaction: Transaction,
}

impl<T: Transport> CimClient<T> {
    /// Validates and assembles a request described by an operation name and a JSON body.
    ///
    /// # Returns
    ///
    /// * `Ok(PendingCall)` - The validated call, to be awaited.
    /// * `Err(DynamicCallError::InvalidBody)` - The body does not have the operation's shape.
    /// * `Err(DynamicCallError::InvalidArgument)` - The body decoded but failed validation.
    pub fn dynamic(&self, request: DynamicRequest) -> Result<PendingCall<'_, T>, DynamicCallError> {
        let DynamicRequest { operation, body } = request;

        let call = match operation {
            Operation::CreateCustomerProfile => {
                self.create_customer_profile(create_profile_request(body)?)?
            }
            Operation::CreateCustomerPaymentProfile => {
                self.create_customer_payment_profile(decode::<CreateCustomerPaymentProfile>(body)?)?
            }
            Operation::CreateCustomerShippingAddress => self
                .create_customer_shipping_address(decode::<CreateCustomerShippingAddress>(body)?)?,
            Operation::CreateCustomerProfileTransaction => {
                let TransactionBody {
                    transaction_type,
                    transaction,
                } = decode(body)?;
                self.create_customer_profile_transaction(
                    transaction_type.parse::<TransactionType>()?,
                    transaction,
                )?
            }
            Operation::DeleteCustomerProfile => self.delete_customer_profile(bare_id(body))?,
            Operation::DeleteCustomerPaymentProfile => {
                self.delete_customer_payment_profile(decode::<PaymentProfileKey>(body)?)?
            }
            Operation::DeleteCustomerShippingAddress => {
                self.delete_customer_shipping_address(decode::<ShippingAddressKey>(body)?)?
            }
            Operation::GetCustomerProfileIds => self.get_customer_profile_ids()?,
            Operation::GetCustomerProfile => self.get_customer_profile(bare_id(body))?,
            Operation::GetCustomerPaymentProfile => {
                self.get_customer_payment_profile(decode::<PaymentProfileKey>(body)?)?
            }
            Operation::GetCustomerShippingAddress => {
                self.get_customer_shipping_address(decode::<ShippingAddressKey>(body)?)?
            }
            Operation::UpdateCustomerProfile => {
                self.update_customer_profile(decode::<CustomerBasic>(body)?)?
            }
            Operation::UpdateCustomerPaymentProfile => {
                self.update_customer_payment_profile(decode::<UpdateCustomerPaymentProfile>(body)?)?
            }
            Operation::UpdateCustomerShippingAddress => self
                .update_customer_shipping_address(decode::<UpdateCustomerShippingAddress>(body)?)?,
            Operation::UpdateSplitTenderGroup => {
                self.update_split_tender_group(decode::<UpdateSplitTenderGroup>(body)?)?
            }
            Operation::ValidateCustomerPaymentProfile => self
                .validate_customer_payment_profile(
                    decode::<ValidateCustomerPaymentProfile>(body)?,
                )?,
        };

        Ok(call)
    }
}

/// Decodes an object body. `null` stands for an empty request.
fn decode<R: DeserializeOwned + Default>(body: Value) -> Result<R, serde_json::Error> {
    match body {
        Value::Null => Ok(R::default()),
        body => serde_json::from_value(body),
    }
}

/// A body with neither `validationMode` nor `customerProfile` is the customer record itself.
fn create_profile_request(body: Value) -> Result<CreateCustomerProfile, serde_json::Error> {
    let wrapped = body
        .as_object()
        .is_some_and(|o| o.contains_key("validationMode") || o.contains_key("customerProfile"));

    if wrapped {
        decode(body)
    } else {
        decode::<Customer>(body).map(CreateCustomerProfile::from)
    }
}

/// Strings and numbers are ids; anything else counts as a missing id.
fn bare_id(body: Value) -> Scalar {
    match body {
        Value::String(text) => Scalar::from(text),
        Value::Number(number) => Scalar::from(number.to_string()),
        _ => Scalar::default(),
    }
}
