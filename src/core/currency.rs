use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// Settlement currency used by the provider regardless of invoice currency
pub const BDT: &str = "BDT";

/// Configured USD-to-BDT exchange rate (1 USD = N BDT)
///
/// The rate is applied in both directions: outbound checkout amounts are
/// multiplied into BDT, inbound provider amounts are divided back for the
/// ledger credit. Amounts already denominated in BDT pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub fn new(rate: Decimal) -> Self {
        Self(rate)
    }

    pub fn rate(&self) -> Decimal {
        self.0
    }

    /// Convert an invoice amount into BDT for the checkout request
    ///
    /// Identity when the currency already is BDT, otherwise `amount * rate`.
    pub fn to_bdt(&self, amount: Decimal, currency: &str) -> Decimal {
        if currency == BDT {
            return amount;
        }

        amount * self.0
    }

    /// Convert a provider-reported BDT amount back into the invoice currency
    ///
    /// Identity when the currency is BDT, otherwise `amount / rate`. The rate
    /// is not validated at configuration time, so a zero rate surfaces here.
    pub fn from_bdt(&self, amount: Decimal, currency: &str) -> Result<Decimal> {
        if currency == BDT {
            return Ok(amount);
        }

        amount.checked_div(self.0).ok_or_else(|| {
            AppError::configuration("USD to BDT exchange rate must be non-zero")
        })
    }
}
