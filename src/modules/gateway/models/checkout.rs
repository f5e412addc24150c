use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::GatewayConfig;
use crate::modules::host::Invoice;

/// Invoice reference carried through the provider round trip
///
/// Sent with the checkout request and echoed back verbatim in the
/// verification response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMetadata {
    pub invoice_id: i64,
    pub currency: String,
    pub return_url: String,
}

/// Body of `POST /api/checkout-v1`
///
/// The amount serializes as a JSON string, matching how the provider
/// formats money on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub full_name: String,
    pub email: String,
    pub amount: Decimal,
    pub metadata: PaymentMetadata,
    pub redirect_url: String,
    pub return_type: String,
    pub cancel_url: String,
    pub webhook_url: String,
}

impl CheckoutRequest {
    /// Build the payment fields for one checkout attempt
    ///
    /// Payer name/email fall back to permissive defaults, and the invoice
    /// subtotal is converted into BDT at the configured rate.
    pub fn for_invoice(invoice: &Invoice, config: &GatewayConfig) -> Self {
        Self {
            full_name: invoice.payer_name(),
            email: invoice.payer_email(),
            amount: config.exchange_rate.to_bdt(invoice.subtotal, &invoice.currency),
            metadata: PaymentMetadata {
                invoice_id: invoice.id,
                currency: invoice.currency.clone(),
                return_url: config.return_url.clone(),
            },
            redirect_url: config.notify_url.clone(),
            return_type: "GET".to_string(),
            cancel_url: config.cancel_url.clone(),
            webhook_url: config.notify_url.clone(),
        }
    }
}

/// Successful answer from the checkout API
///
/// Both fields are required; a payload missing either one is treated as a
/// provider error and its `message` field is surfaced instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub status: String,
    pub payment_url: String,
}
