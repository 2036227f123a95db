use super::{Scalar, ToXml};
use crate::xml::XmlFragment;
use serde::Deserialize;

/// A billing (`billTo`) or shipping (`shipToList`, `address`) address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<Scalar>,
    pub country: Option<String>,
    pub phone_number: Option<Scalar>,
    pub fax_number: Option<Scalar>,
    /// Only meaningful for shipping addresses that already exist on the gateway.
    pub customer_address_id: Option<Scalar>,
}

impl ToXml for Address {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("firstName", self.first_name.as_deref())
            .optional_element("lastName", self.last_name.as_deref())
            .optional_element("company", self.company.as_deref())
            .optional_element("address", self.address.as_deref())
            .optional_element("city", self.city.as_deref())
            .optional_element("state", self.state.as_deref())
            .optional_element("zip", self.zip.as_ref())
            .optional_element("country", self.country.as_deref())
            .optional_element("phoneNumber", self.phone_number.as_ref())
            .optional_element("faxNumber", self.fax_number.as_ref())
            .optional_element("customerAddressId", self.customer_address_id.as_ref());
    }
}
