//! Customer profile operations.
use super::{CimClient, CreateCustomerProfile, PendingCall};
use crate::{
    entity::{CustomerBasic, Scalar, ToXml},
    error::InvalidArgument,
    transport::{Operation, Transport},
    xml::XmlFragment,
};

impl<T: Transport> CimClient<T> {
    /// Creates a customer profile, optionally with payment profiles and shipping addresses.
    ///
    /// Never fails locally: a request without a customer sends an empty customer fragment.
    /// The validation mode defaults to `none`.
    pub fn create_customer_profile(
        &self,
        request: impl Into<CreateCustomerProfile>,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let request = request.into();
        let body = request
            .customer_profile
            .map(|customer| customer.to_xml())
            .unwrap_or_default();

        Ok(self.dispatch(
            Operation::CreateCustomerProfile,
            body,
            Some(request.validation_mode.unwrap_or_default()),
        ))
    }

    /// Deletes a customer profile and everything attached to it.
    ///
    /// The id must be present and, when numeric, at least `1`.
    pub fn delete_customer_profile(
        &self,
        customer_profile_id: impl Into<Scalar>,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = single_profile_id(customer_profile_id.into())?;
        Ok(self.dispatch(Operation::DeleteCustomerProfile, body, None))
    }

    /// Lists the ids of every customer profile of the merchant account.
    pub fn get_customer_profile_ids(&self) -> Result<PendingCall<'_, T>, InvalidArgument> {
        Ok(self.dispatch(Operation::GetCustomerProfileIds, XmlFragment::new(), None))
    }

    /// Retrieves a customer profile with its payment profiles and shipping addresses.
    ///
    /// The id must be present and, when numeric, at least `1`.
    pub fn get_customer_profile(
        &self,
        customer_profile_id: impl Into<Scalar>,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = single_profile_id(customer_profile_id.into())?;
        Ok(self.dispatch(Operation::GetCustomerProfile, body, None))
    }

    /// Updates the scalar fields of an existing profile.
    ///
    /// # Errors
    ///
    /// * [`InvalidArgument::NoCustomer`] - The record has no field at all.
    /// * [`InvalidArgument::NoCustomerProfileId`] - The record does not say which profile to update.
    pub fn update_customer_profile(
        &self,
        profile: CustomerBasic,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = profile.to_xml();
        if body.is_empty() {
            return Err(InvalidArgument::NoCustomer);
        }
        if profile
            .customer_profile_id
            .as_ref()
            .is_none_or(Scalar::is_absent)
        {
            return Err(InvalidArgument::NoCustomerProfileId);
        }

        Ok(self.dispatch(Operation::UpdateCustomerProfile, body, None))
    }
}

fn single_profile_id(id: Scalar) -> Result<XmlFragment, InvalidArgument> {
    if id.is_below_one() {
        return Err(InvalidArgument::CustomerProfileIdMissing);
    }
    let mut body = XmlFragment::new();
    body.element("customerProfileId", &id);
    Ok(body)
}
