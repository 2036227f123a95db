//! Payment profile operations.
use super::{
    CimClient, CreateCustomerPaymentProfile, PaymentProfileKey, PendingCall,
    UpdateCustomerPaymentProfile, ValidateCustomerPaymentProfile,
};
use crate::{
    entity::{PaymentProfile, Scalar, ToXml},
    error::InvalidArgument,
    transport::{Operation, Transport},
    xml::XmlFragment,
};

impl<T: Transport> CimClient<T> {
    /// Attaches a new payment profile to an existing customer profile.
    ///
    /// The payment profile is always serialized, as an empty `paymentProfile` element when
    /// absent. The validation mode defaults to `none`.
    pub fn create_customer_payment_profile(
        &self,
        request: CreateCustomerPaymentProfile,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if request.customer_profile_id.is_absent() {
            return Err(InvalidArgument::CustomerProfileIdMissing);
        }

        let body = profile_body(&request.customer_profile_id, request.payment_profile.as_ref());
        Ok(self.dispatch(
            Operation::CreateCustomerPaymentProfile,
            body,
            Some(request.validation_mode.unwrap_or_default()),
        ))
    }

    pub fn delete_customer_payment_profile(
        &self,
        key: PaymentProfileKey,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = key_body(&key)?;
        Ok(self.dispatch(Operation::DeleteCustomerPaymentProfile, body, None))
    }

    pub fn get_customer_payment_profile(
        &self,
        key: PaymentProfileKey,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = key_body(&key)?;
        Ok(self.dispatch(Operation::GetCustomerPaymentProfile, body, None))
    }

    /// Replaces a payment profile. The record must carry its `customerPaymentProfileId`.
    ///
    /// The validation mode defaults to `none`.
    pub fn update_customer_payment_profile(
        &self,
        request: UpdateCustomerPaymentProfile,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if request.is_blank() {
            return Err(InvalidArgument::PaymentProfileUpdateMissing);
        }
        if request.customer_profile_id.is_absent() {
            return Err(InvalidArgument::NoCustomerProfileId);
        }
        let payment_profile = request
            .payment_profile
            .as_ref()
            .filter(|profile| !profile.is_empty_record())
            .ok_or(InvalidArgument::NoPaymentProfile)?;

        let body = profile_body(&request.customer_profile_id, Some(payment_profile));
        Ok(self.dispatch(
            Operation::UpdateCustomerPaymentProfile,
            body,
            Some(request.validation_mode.unwrap_or_default()),
        ))
    }

    /// Runs a test transaction against a stored payment profile.
    ///
    /// Unlike the other operations, the validation mode is mandatory here. The shipping
    /// address id and card code are sent only when present.
    pub fn validate_customer_payment_profile(
        &self,
        request: ValidateCustomerPaymentProfile,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if request.is_blank() {
            return Err(InvalidArgument::ValidationMissing);
        }
        if request.customer_profile_id.is_absent() {
            return Err(InvalidArgument::NoCustomerProfileId);
        }
        if request.customer_payment_profile_id.is_absent() {
            return Err(InvalidArgument::NoCustomerPaymentProfileId);
        }
        let validation_mode = request
            .validation_mode
            .ok_or(InvalidArgument::NoValidationMode)?;

        let present = |value: &Option<Scalar>| value.clone().filter(|v| !v.is_absent());

        let mut body = XmlFragment::new();
        body.element("customerProfileId", &request.customer_profile_id)
            .element(
                "customerPaymentProfileId",
                &request.customer_payment_profile_id,
            )
            .optional_element(
                "customerShippingAddressId",
                present(&request.customer_shipping_address_id),
            )
            .optional_element("cardCode", present(&request.card_code));

        Ok(self.dispatch(
            Operation::ValidateCustomerPaymentProfile,
            body,
            Some(validation_mode),
        ))
    }
}

fn profile_body(customer_profile_id: &Scalar, profile: Option<&PaymentProfile>) -> XmlFragment {
    let mut body = XmlFragment::new();
    body.element("customerProfileId", customer_profile_id)
        .wrap("paymentProfile", |f| {
            if let Some(profile) = profile {
                profile.write_xml(f);
            }
        });
    body
}

fn key_body(key: &PaymentProfileKey) -> Result<XmlFragment, InvalidArgument> {
    if key.is_blank() {
        return Err(InvalidArgument::PaymentProfileKeyMissing);
    }
    if key.customer_profile_id.is_absent() {
        return Err(InvalidArgument::CustomerProfileIdMissing);
    }
    if key.customer_payment_profile_id.is_absent() {
        return Err(InvalidArgument::CustomerPaymentProfileIdMissing);
    }

    let mut body = XmlFragment::new();
    body.element("customerProfileId", &key.customer_profile_id)
        .element(
            "customerPaymentProfileId",
            &key.customer_payment_profile_id,
        );
    Ok(body)
}
