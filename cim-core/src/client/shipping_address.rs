//! Shipping address operations.
use super::{
    CimClient, CreateCustomerShippingAddress, PendingCall, ShippingAddressKey,
    UpdateCustomerShippingAddress,
};
use crate::{
    entity::{Address, Scalar, ToXml},
    error::InvalidArgument,
    transport::{Operation, Transport},
    xml::XmlFragment,
};

impl<T: Transport> CimClient<T> {
    pub fn create_customer_shipping_address(
        &self,
        request: CreateCustomerShippingAddress,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if request.customer_profile_id.is_absent() {
            return Err(InvalidArgument::CustomerProfileIdMissing);
        }

        let body = address_body(
            &request.customer_profile_id,
            request.shipping_address.as_ref(),
        );
        Ok(self.dispatch(Operation::CreateCustomerShippingAddress, body, None))
    }

    pub fn delete_customer_shipping_address(
        &self,
        key: ShippingAddressKey,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = key_body(&key, InvalidArgument::ShippingAddressDeleteKeyMissing)?;
        Ok(self.dispatch(Operation::DeleteCustomerShippingAddress, body, None))
    }

    pub fn get_customer_shipping_address(
        &self,
        key: ShippingAddressKey,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        let body = key_body(&key, InvalidArgument::ShippingAddressKeyMissing)?;
        Ok(self.dispatch(Operation::GetCustomerShippingAddress, body, None))
    }

    /// Replaces a shipping address. The address must carry its `customerAddressId`.
    pub fn update_customer_shipping_address(
        &self,
        request: UpdateCustomerShippingAddress,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if request.is_blank() {
            return Err(InvalidArgument::ShippingAddressUpdateMissing);
        }
        if request.customer_profile_id.is_absent() {
            return Err(InvalidArgument::NoCustomerProfileId);
        }
        let address = request
            .address
            .as_ref()
            .filter(|address| !address.is_empty_record())
            .ok_or(InvalidArgument::NoAddress)?;

        let body = address_body(&request.customer_profile_id, Some(address));
        Ok(self.dispatch(Operation::UpdateCustomerShippingAddress, body, None))
    }
}

fn address_body(customer_profile_id: &Scalar, address: Option<&Address>) -> XmlFragment {
    let mut body = XmlFragment::new();
    body.element("customerProfileId", customer_profile_id)
        .wrap("address", |f| {
            if let Some(address) = address {
                address.write_xml(f);
            }
        });
    body
}

// The delete and get messages for an empty key differ by one word.
fn key_body(
    key: &ShippingAddressKey,
    blank: InvalidArgument,
) -> Result<XmlFragment, InvalidArgument> {
    if key.is_blank() {
        return Err(blank);
    }
    if key.customer_profile_id.is_absent() {
        return Err(InvalidArgument::CustomerProfileIdMissing);
    }
    if key.customer_address_id.is_absent() {
        return Err(InvalidArgument::CustomerAddressIdMissing);
    }

    let mut body = XmlFragment::new();
    body.element("customerProfileId", &key.customer_profile_id)
        .element("customerAddressId", &key.customer_address_id);
    Ok(body)
}
