//! Profile transactions and split tender groups.
use super::{CimClient, PendingCall, SplitTenderStatus, TransactionType, UpdateSplitTenderGroup};
use crate::{
    entity::{ToXml, Transaction},
    error::InvalidArgument,
    transport::{Operation, Transport},
    xml::XmlFragment,
};

impl<T: Transport> CimClient<T> {
    /// Runs a transaction against stored profile data.
    ///
    /// The body is `<transaction><profileTrans{Type}>...</profileTrans{Type}></transaction>`.
    ///
    /// # Errors
    ///
    /// * [`InvalidArgument::UnsupportedTransactionType`] - For `Refund` and `Void`, which this
    ///   operation does not create.
    pub fn create_customer_profile_transaction(
        &self,
        transaction_type: TransactionType,
        transaction: Transaction,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if !transaction_type.is_creatable() {
            return Err(InvalidArgument::UnsupportedTransactionType);
        }

        let mut body = XmlFragment::new();
        body.wrap("transaction", |f| {
            f.wrap(&transaction_type.element_name(), |f| {
                transaction.write_xml(f)
            });
        });

        Ok(self.dispatch(Operation::CreateCustomerProfileTransaction, body, None))
    }

    /// Voids or completes every transaction sharing a split tender id.
    pub fn update_split_tender_group(
        &self,
        request: UpdateSplitTenderGroup,
    ) -> Result<PendingCall<'_, T>, InvalidArgument> {
        if request.is_blank() {
            return Err(InvalidArgument::SplitTenderMissing);
        }
        if request.split_tender_id.is_absent() {
            return Err(InvalidArgument::NoSplitTenderId);
        }
        if request.split_tender_status.trim().is_empty() {
            return Err(InvalidArgument::NoSplitTenderStatus);
        }
        let status: SplitTenderStatus = request.split_tender_status.parse()?;

        let mut body = XmlFragment::new();
        body.element("splitTenderId", &request.split_tender_id)
            .element("splitTenderStatus", status);

        Ok(self.dispatch(Operation::UpdateSplitTenderGroup, body, None))
    }
}
