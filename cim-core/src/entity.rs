//! # Domain Records
//!
//! Partially or fully populated records accepted by the operations, and the serializer that
//! turns each of them into its wire fragment.
//!
//! Every field is optional: an absent (or empty) field is simply left out of the fragment,
//! so serialization never fails. Fields are emitted in the order the gateway schema declares
//! them. Records deserialize from camelCase JSON, and numeric fields accept either JSON
//! strings or numbers.
mod address;
mod customer;
mod payment;
mod scalar;
mod transaction;

pub use address::Address;
pub use customer::{Customer, CustomerBasic};
pub use payment::{BankAccount, CreditCard, Payment, PaymentProfile};
pub use scalar::Scalar;
pub use transaction::{ExtendedAmount, LineItem, Order, Transaction};

use crate::xml::XmlFragment;
use serde::{Deserialize, Deserializer};

/// Serializes a record into its wire fragment, without any wrapping element.
pub trait ToXml {
    fn write_xml(&self, fragment: &mut XmlFragment);

    fn to_xml(&self) -> XmlFragment {
        let mut fragment = XmlFragment::new();
        self.write_xml(&mut fragment);
        fragment
    }

    /// A record is empty when it serializes to nothing.
    fn is_empty_record(&self) -> bool {
        self.to_xml().is_empty()
    }
}

/// Accepts either a single object or an array of objects.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    Ok(match Option::<OneOrMany<T>>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items,
        Some(OneOrMany::One(item)) => vec![item],
        None => Vec::new(),
    })
}
