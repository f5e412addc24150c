use std::sync::Arc;

use tracing::{info, warn};

use super::astimpay::AstimPayApi;
use crate::config::GatewayConfig;
use crate::core::{AppError, Result};
use crate::modules::gateway::models::{
    CheckoutRequest, CompletedPayment, IpnPayload, PaymentForm,
};
use crate::modules::host::{
    ClientFunds, FundsCredit, InvoiceCredits, InvoiceLedger, TransactionMatch, TransactionUpdate,
};

/// AstimPay gateway adapter
///
/// Orchestrates the two host-facing operations: creating a checkout session
/// for an invoice and reconciling a payment notification into the host
/// ledger. All collaborators are injected; the adapter holds no state beyond
/// its validated configuration.
pub struct AstimPayAdapter {
    config: GatewayConfig,
    api: Arc<dyn AstimPayApi>,
    ledger: Arc<dyn InvoiceLedger>,
    funds: Arc<dyn ClientFunds>,
    credits: Arc<dyn InvoiceCredits>,
}

impl AstimPayAdapter {
    pub fn new(
        config: GatewayConfig,
        api: Arc<dyn AstimPayApi>,
        ledger: Arc<dyn InvoiceLedger>,
        funds: Arc<dyn ClientFunds>,
        credits: Arc<dyn InvoiceCredits>,
    ) -> Self {
        Self {
            config,
            api,
            ledger,
            funds,
            credits,
        }
    }

    /// Create a checkout session for an invoice and return the redirect form
    pub async fn start_checkout(&self, invoice_id: i64) -> Result<PaymentForm> {
        let invoice = self
            .ledger
            .find_invoice(invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invoice not found"))?;

        let request = CheckoutRequest::for_invoice(&invoice, &self.config);
        info!(
            invoice_id,
            amount = %request.amount,
            currency = %invoice.currency,
            "creating checkout session"
        );

        let response = self.api.create_checkout(&request).await?;
        info!(invoice_id, payment_url = %response.payment_url, "checkout session created");

        Ok(PaymentForm::new(
            response.payment_url,
            self.config.auto_redirect,
        ))
    }

    /// Reconcile a payment notification into the host ledger
    ///
    /// Returns the URL the payer's browser should be redirected to. The
    /// transaction update is applied before the duplicate check, so a
    /// detected replay leaves the update in place; concurrent notifications
    /// for the same payment are expected to be serialized by the host.
    pub async fn handle_notification(
        &self,
        payload: &IpnPayload,
        transaction_id: i64,
    ) -> Result<String> {
        let invoice_id = payload
            .invoice_id()
            .ok_or_else(|| AppError::invalid_request("Invalid Request"))?;

        let response = self.api.verify_payment(invoice_id).await?;
        if !response.is_completed() {
            warn!(
                invoice_id,
                status = %response.status,
                "payment not completed, rejecting notification"
            );
            return Err(AppError::invalid_request("Invalid Request"));
        }
        let payment = response.into_completed()?;

        let invoice = self
            .ledger
            .find_invoice(payment.metadata.invoice_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invoice not found"))?;
        let transaction = self
            .ledger
            .find_transaction(transaction_id)
            .await?
            .ok_or_else(|| AppError::not_found("Transaction not found"))?;

        // Ledger credit goes back into the invoice's own currency terms
        let amount = self
            .config
            .exchange_rate
            .from_bdt(payment.amount, &payment.metadata.currency)?;

        let update = TransactionUpdate {
            invoice_id: payment.metadata.invoice_id,
            txn_status: payment.status.clone(),
            txn_id: payment.transaction_id.clone(),
            amount,
            currency: invoice.currency.clone(),
            payment_method: payment.payment_method.clone(),
            status: "complete".to_string(),
        };
        self.ledger.update_transaction(&transaction, &update).await?;

        if self.is_duplicate_notification(&payment).await? {
            warn!(
                invoice_id,
                txn_id = %payment.transaction_id,
                "duplicate IPN detected after transaction update"
            );
            return Err(AppError::DuplicateIpn(
                "Cannot process duplicate IPN".to_string(),
            ));
        }

        let client = self
            .ledger
            .find_client(invoice.client_id)
            .await?
            .ok_or_else(|| AppError::not_found("Client not found"))?;

        let credit = FundsCredit {
            amount,
            description: format!(
                "{} Transaction ID: {}",
                payment.payment_method, payment.transaction_id
            ),
            credit_type: "transaction".to_string(),
            rel_id: transaction.id,
        };
        self.funds.add_funds(&client, &credit).await?;

        self.credits.pay_invoice_with_credits(&invoice).await?;
        self.credits.batch_pay_with_credits(invoice.client_id).await?;

        info!(
            invoice_id,
            transaction_id,
            txn_id = %payment.transaction_id,
            amount = %amount,
            "payment reconciled"
        );

        Ok(payment.metadata.return_url)
    }

    /// Replay detection against the host ledger
    ///
    /// A notification is a duplicate when more than one ledger row matches
    /// its fields; the row written just above counts, so only the second and
    /// later replays trip this. The match key carries the provider-reported
    /// amount while the ledger row stores the converted one.
    pub async fn is_duplicate_notification(&self, payment: &CompletedPayment) -> Result<bool> {
        let query = TransactionMatch {
            txn_id: payment.transaction_id.clone(),
            txn_status: payment.status.clone(),
            payment_method: payment.payment_method.clone(),
            amount: payment.amount,
        };

        let matches = self.ledger.count_matching_transactions(&query).await?;
        Ok(matches > 1)
    }
}
