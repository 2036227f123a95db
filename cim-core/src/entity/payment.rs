use super::{Address, Scalar, ToXml};
use crate::xml::XmlFragment;
use serde::Deserialize;

/// A stored payment method attached to a customer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentProfile {
    /// `individual` or `business`.
    pub customer_type: Option<String>,
    pub bill_to: Option<Address>,
    pub payment: Option<Payment>,
    pub customer_payment_profile_id: Option<Scalar>,
}

impl ToXml for PaymentProfile {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment.optional_element("customerType", self.customer_type.as_deref());
        if let Some(bill_to) = &self.bill_to {
            fragment.optional_wrap("billTo", |f| bill_to.write_xml(f));
        }
        if let Some(payment) = &self.payment {
            fragment.optional_wrap("payment", |f| payment.write_xml(f));
        }
        fragment.optional_element(
            "customerPaymentProfileId",
            self.customer_payment_profile_id.as_ref(),
        );
    }
}

/// Either a credit card or a bank account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub credit_card: Option<CreditCard>,
    pub bank_account: Option<BankAccount>,
}

impl ToXml for Payment {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        if let Some(card) = &self.credit_card {
            fragment.optional_wrap("creditCard", |f| card.write_xml(f));
        }
        if let Some(account) = &self.bank_account {
            fragment.optional_wrap("bankAccount", |f| account.write_xml(f));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCard {
    pub card_number: Option<Scalar>,
    /// `YYYY-MM`, or `XXXX` when updating a masked card.
    pub expiration_date: Option<String>,
    pub card_code: Option<Scalar>,
}

impl ToXml for CreditCard {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("cardNumber", self.card_number.as_ref())
            .optional_element("expirationDate", self.expiration_date.as_deref())
            .optional_element("cardCode", self.card_code.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankAccount {
    /// `checking`, `savings` or `businessChecking`.
    pub account_type: Option<String>,
    pub routing_number: Option<Scalar>,
    pub account_number: Option<Scalar>,
    pub name_on_account: Option<String>,
    /// `CCD`, `PPD`, `TEL` or `WEB`.
    pub echeck_type: Option<String>,
    pub bank_name: Option<String>,
}

impl ToXml for BankAccount {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("accountType", self.account_type.as_deref())
            .optional_element("routingNumber", self.routing_number.as_ref())
            .optional_element("accountNumber", self.account_number.as_ref())
            .optional_element("nameOnAccount", self.name_on_account.as_deref())
            .optional_element("echeckType", self.echeck_type.as_deref())
            .optional_element("bankName", self.bank_name.as_deref());
    }
}
