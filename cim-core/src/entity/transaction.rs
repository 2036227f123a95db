use super::{Scalar, ToXml, one_or_many};
use crate::xml::XmlFragment;
use serde::Deserialize;

/// The body of a profile transaction.
///
/// The same record serves every transaction type; which fields the gateway requires depends
/// on the type (e.g. `transId` for a prior auth capture, `approvalCode` for a capture only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub amount: Option<Scalar>,
    pub tax: Option<ExtendedAmount>,
    pub shipping: Option<ExtendedAmount>,
    pub duty: Option<ExtendedAmount>,
    #[serde(deserialize_with = "one_or_many")]
    pub line_items: Vec<LineItem>,
    pub credit_card_number_masked: Option<String>,
    pub bank_account_number_masked: Option<String>,
    pub customer_profile_id: Option<Scalar>,
    pub customer_payment_profile_id: Option<Scalar>,
    pub customer_shipping_address_id: Option<Scalar>,
    pub order: Option<Order>,
    pub trans_id: Option<Scalar>,
    pub tax_exempt: Option<bool>,
    pub recurring_billing: Option<bool>,
    pub card_code: Option<Scalar>,
    pub split_tender_id: Option<Scalar>,
    pub approval_code: Option<Scalar>,
}

impl ToXml for Transaction {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment.optional_element("amount", self.amount.as_ref());
        for (name, amount) in [
            ("tax", &self.tax),
            ("shipping", &self.shipping),
            ("duty", &self.duty),
        ] {
            if let Some(amount) = amount {
                fragment.optional_wrap(name, |f| amount.write_xml(f));
            }
        }
        for item in &self.line_items {
            fragment.optional_wrap("lineItems", |f| item.write_xml(f));
        }
        fragment
            .optional_element(
                "creditCardNumberMasked",
                self.credit_card_number_masked.as_deref(),
            )
            .optional_element(
                "bankAccountNumberMasked",
                self.bank_account_number_masked.as_deref(),
            )
            .optional_element("customerProfileId", self.customer_profile_id.as_ref())
            .optional_element(
                "customerPaymentProfileId",
                self.customer_payment_profile_id.as_ref(),
            )
            .optional_element(
                "customerShippingAddressId",
                self.customer_shipping_address_id.as_ref(),
            );
        if let Some(order) = &self.order {
            fragment.optional_wrap("order", |f| order.write_xml(f));
        }
        fragment
            .optional_element("transId", self.trans_id.as_ref())
            .optional_element("taxExempt", self.tax_exempt)
            .optional_element("recurringBilling", self.recurring_billing)
            .optional_element("cardCode", self.card_code.as_ref())
            .optional_element("splitTenderId", self.split_tender_id.as_ref())
            .optional_element("approvalCode", self.approval_code.as_ref());
    }
}

/// Tax, shipping or duty amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtendedAmount {
    pub amount: Option<Scalar>,
    pub name: Option<Scalar>,
    pub description: Option<String>,
}

impl ToXml for ExtendedAmount {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("amount", self.amount.as_ref())
            .optional_element("name", self.name.as_ref())
            .optional_element("description", self.description.as_deref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineItem {
    pub item_id: Option<Scalar>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<Scalar>,
    pub unit_price: Option<Scalar>,
    pub taxable: Option<bool>,
}

impl ToXml for LineItem {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("itemId", self.item_id.as_ref())
            .optional_element("name", self.name.as_deref())
            .optional_element("description", self.description.as_deref())
            .optional_element("quantity", self.quantity.as_ref())
            .optional_element("unitPrice", self.unit_price.as_ref())
            .optional_element("taxable", self.taxable);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub invoice_number: Option<Scalar>,
    pub description: Option<String>,
    #[serde(alias = "orderNumber")]
    pub purchase_order_number: Option<Scalar>,
}

impl ToXml for Order {
    fn write_xml(&self, fragment: &mut XmlFragment) {
        fragment
            .optional_element("invoiceNumber", self.invoice_number.as_ref())
            .optional_element("description", self.description.as_deref())
            .optional_element("purchaseOrderNumber", self.purchase_order_number.as_ref());
    }
}
