use async_trait::async_trait;

use super::models::{Client, FundsCredit, Invoice, Transaction, TransactionMatch, TransactionUpdate};
use crate::core::Result;

/// Read/write access to the host's invoice, transaction and client records
#[async_trait]
pub trait InvoiceLedger: Send + Sync {
    /// Look up an invoice by id
    async fn find_invoice(&self, id: i64) -> Result<Option<Invoice>>;

    /// Look up a transaction record by id
    async fn find_transaction(&self, id: i64) -> Result<Option<Transaction>>;

    /// Apply a reconciliation update to an existing transaction record
    async fn update_transaction(
        &self,
        transaction: &Transaction,
        update: &TransactionUpdate,
    ) -> Result<()>;

    /// Count ledger rows matching a duplicate-detection key
    ///
    /// Counting up to 2 rows is sufficient; the adapter only distinguishes
    /// "one row" from "more than one".
    async fn count_matching_transactions(&self, query: &TransactionMatch) -> Result<u64>;

    /// Look up a client by id
    async fn find_client(&self, id: i64) -> Result<Option<Client>>;
}

/// Client account balance operations
#[async_trait]
pub trait ClientFunds: Send + Sync {
    /// Credit funds to a client account
    async fn add_funds(&self, client: &Client, credit: &FundsCredit) -> Result<()>;
}

/// Invoice credit-application operations
#[async_trait]
pub trait InvoiceCredits: Send + Sync {
    /// Apply the client's available credits against one invoice
    async fn pay_invoice_with_credits(&self, invoice: &Invoice) -> Result<()>;

    /// Batch-apply remaining credits across the client's open invoices
    async fn batch_pay_with_credits(&self, client_id: i64) -> Result<()>;
}
