// Integration test for the checkout flow
//
// start_checkout fetches the invoice from the host ledger, builds the
// payment fields (with BDT conversion and payer fallbacks), posts them to
// the provider and returns the renderable redirect form.

#[path = "../helpers/mod.rs"]
mod helpers;

use rust_decimal_macros::dec;

use astimpay_gateway::core::AppError;
use astimpay_gateway::host::{Invoice, InvoiceClient};
use helpers::*;

#[tokio::test]
async fn usd_invoice_is_charged_in_bdt() {
    let h = harness();
    h.ledger.add_invoice(usd_invoice(42, 9, dec!(100)));
    h.api
        .respond_to_checkout(checkout_response("https://pay.astimpay.test/c/abc"));

    let form = h.adapter.start_checkout(42).await.unwrap();

    let requests = h.api.captured_checkouts();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    // 100 USD at 1 USD = 110 BDT
    assert_eq!(request.amount, dec!(11000));
    assert_eq!(request.full_name, "Jane Roe");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.metadata.invoice_id, 42);
    assert_eq!(request.metadata.currency, "USD");
    assert_eq!(request.metadata.return_url, RETURN_URL);
    assert_eq!(request.redirect_url, NOTIFY_URL);
    assert_eq!(request.webhook_url, NOTIFY_URL);
    assert_eq!(request.cancel_url, CANCEL_URL);
    assert_eq!(request.return_type, "GET");

    let html = form.render();
    assert!(html.contains("action=\"https://pay.astimpay.test/c/abc\""));
    assert!(html.contains("Pay Now"));
    assert!(!html.contains("<script"));
}

#[tokio::test]
async fn bdt_invoice_amount_is_not_converted() {
    let h = harness();
    h.ledger.add_invoice(bdt_invoice(42, 9, dec!(2500)));
    h.api
        .respond_to_checkout(checkout_response("https://pay.astimpay.test/c/abc"));

    h.adapter.start_checkout(42).await.unwrap();

    assert_eq!(h.api.captured_checkouts()[0].amount, dec!(2500));
}

#[tokio::test]
async fn anonymous_payer_gets_permissive_defaults() {
    let h = harness();
    h.ledger.add_invoice(Invoice {
        client: InvoiceClient::default(),
        ..usd_invoice(42, 9, dec!(100))
    });
    h.api
        .respond_to_checkout(checkout_response("https://pay.astimpay.test/c/abc"));

    h.adapter.start_checkout(42).await.unwrap();

    let request = &h.api.captured_checkouts()[0];
    // Trailing space comes from the empty last-name fallback
    assert_eq!(request.full_name, "John ");
    assert_eq!(request.email, "test@test.com");
}

#[tokio::test]
async fn auto_redirect_config_renders_a_self_submitting_form() {
    let h = harness_with_config(config_with(|params| params.auto_redirect = true));
    h.ledger.add_invoice(usd_invoice(42, 9, dec!(100)));
    h.api
        .respond_to_checkout(checkout_response("https://pay.astimpay.test/c/abc"));

    let form = h.adapter.start_checkout(42).await.unwrap();

    let html = form.render();
    assert!(html.contains("Redirecting to Payment Page..."));
    assert!(html.contains("document.forms['payment_form'].submit()"));
}

#[tokio::test]
async fn unknown_invoice_is_not_found() {
    let h = harness();

    let err = h.adapter.start_checkout(404).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert!(h.api.captured_checkouts().is_empty());
}

#[tokio::test]
async fn provider_transport_failure_propagates() {
    let h = harness();
    h.ledger.add_invoice(usd_invoice(42, 9, dec!(100)));
    // No scripted checkout response: the call fails at the transport level

    let err = h.adapter.start_checkout(42).await.unwrap_err();

    assert!(matches!(err, AppError::GatewayTransport(_)));
}
