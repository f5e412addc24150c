//! Billing-host collaborators
//!
//! The host owns the Invoice/Transaction/Client ledger; this module only
//! defines the narrow views and operations the gateway adapter consumes.
//! Implementations are injected at adapter construction.

pub mod models;
pub mod traits;

pub use models::{
    Client, FundsCredit, Invoice, InvoiceClient, Transaction, TransactionMatch, TransactionUpdate,
};
pub use traits::{ClientFunds, InvoiceCredits, InvoiceLedger};
