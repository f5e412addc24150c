use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::checkout::PaymentMetadata;
use crate::core::{AppError, Result};

/// Body of `POST /api/verify-payment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub invoice_id: i64,
}

/// Answer from the verification API
///
/// Every field is optional on the wire: a payload without `status` reads as
/// an empty string, which is simply not `COMPLETED`. The payment detail
/// fields are present once the provider reports `COMPLETED`;
/// `into_completed` enforces that. Amounts arrive as either JSON numbers or
/// strings, which the `Decimal` deserializer accepts both of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub metadata: Option<PaymentMetadata>,
}

/// Verified, completed payment with every reconciliation field present
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedPayment {
    pub status: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub payment_method: String,
    pub metadata: PaymentMetadata,
}

impl VerifyResponse {
    /// Payment reconciles only when the provider reports this status
    pub const COMPLETED: &'static str = "COMPLETED";

    pub fn is_completed(&self) -> bool {
        self.status == Self::COMPLETED
    }

    /// Validate the response into a fully-populated completed payment
    pub fn into_completed(self) -> Result<CompletedPayment> {
        let transaction_id = self
            .transaction_id
            .ok_or_else(|| missing_field("transaction_id"))?;
        let amount = self.amount.ok_or_else(|| missing_field("amount"))?;
        let payment_method = self
            .payment_method
            .ok_or_else(|| missing_field("payment_method"))?;
        let metadata = self.metadata.ok_or_else(|| missing_field("metadata"))?;

        Ok(CompletedPayment {
            status: self.status,
            transaction_id,
            amount,
            payment_method,
            metadata,
        })
    }
}

fn missing_field(field: &str) -> AppError {
    AppError::provider(format!("verify-payment response is missing '{field}'"))
}
