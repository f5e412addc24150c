use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Invoice as read from the host ledger
///
/// Only the fields the gateway needs; lifecycle stays with the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub client_id: i64,
    pub currency: String,
    pub subtotal: Decimal,
    pub client: InvoiceClient,
}

/// Payer details attached to an invoice; every field may be absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceClient {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Opaque handle to a host transaction record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
}

/// Opaque handle to a host client record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
}

/// Write payload applied to a transaction record on reconciliation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionUpdate {
    pub invoice_id: i64,
    /// Provider-reported status, e.g. `COMPLETED`
    pub txn_status: String,
    /// Provider transaction reference
    pub txn_id: String,
    /// Amount in the invoice's BDT-consistent terms
    pub amount: Decimal,
    /// Invoice currency code
    pub currency: String,
    /// Provider payment method, stored as the transaction type
    pub payment_method: String,
    /// Host-side lifecycle status, always `complete` here
    pub status: String,
}

/// Ledger query key for duplicate-notification detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionMatch {
    pub txn_id: String,
    pub txn_status: String,
    pub payment_method: String,
    pub amount: Decimal,
}

/// Funds credited to a client account after a verified payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundsCredit {
    pub amount: Decimal,
    pub description: String,
    /// Always `transaction` for gateway-originated credits
    pub credit_type: String,
    /// Host transaction record the credit relates to
    pub rel_id: i64,
}

impl Invoice {
    /// Payer display name with the module's permissive fallbacks
    ///
    /// Missing first name defaults to "John", missing last name to the empty
    /// string, so a fully anonymous payer renders as `"John "` (trailing
    /// space included).
    pub fn payer_name(&self) -> String {
        let first_name = self.client.first_name.as_deref().unwrap_or("John");
        let last_name = self.client.last_name.as_deref().unwrap_or("");
        format!("{} {}", first_name, last_name)
    }

    /// Payer email, defaulting to a placeholder when absent
    pub fn payer_email(&self) -> String {
        self.client
            .email
            .clone()
            .unwrap_or_else(|| "test@test.com".to_string())
    }
}
