use super::{Address, PaymentProfile, Scalar, ToXml, one_or_many};
use crate::xml::XmlFragment;
use serde::Deserialize;

/// A full customer profile, as sent by `createCustomerProfile`.
///
/// It may carry any number of payment profiles and shipping addresses, which are created
/// together with the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub merchant_customer_id: Option<Scalar>,
    pub description: Option<String>,
    pub email: Option<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub payment_profiles: Vec<PaymentProfile>,
    #[serde(deserialize_with = "one_or_many")]
    pub ship_to_list: Vec<Address>,
}

impl ToXml for Customer {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("merchantCustomerId", self.merchant_customer_id.as_ref())
            .optional_element("description", self.description.as_deref())
            .optional_element("email", self.email.as_deref());

        for profile in &self.payment_profiles {
            fragment.optional_wrap("paymentProfiles", |f| profile.write_xml(f));
        }
        for address in &self.ship_to_list {
            fragment.optional_wrap("shipToList", |f| address.write_xml(f));
        }
    }
}

/// The scalar part of a profile, as sent by `updateCustomerProfile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerBasic {
    pub merchant_customer_id: Option<Scalar>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub customer_profile_id: Option<Scalar>,
}

impl ToXml for CustomerBasic {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("merchantCustomerId", self.merchant_customer_id.as_ref())
            .optional_element("description", self.description.as_deref())
            .optional_element("email", self.email.as_deref())
            .optional_element("customerProfileId", self.customer_profile_id.as_ref());
    }
}
