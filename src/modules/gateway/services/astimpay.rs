use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::core::{AppError, Result};
use crate::modules::gateway::models::{
    CheckoutRequest, CheckoutResponse, VerifyRequest, VerifyResponse,
};

/// Fixed bound on both provider calls; there is no retry behind it
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// AstimPay provider API: checkout-session creation and payment verification
#[async_trait]
pub trait AstimPayApi: Send + Sync {
    /// Create a hosted checkout session for the given payment fields
    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse>;

    /// Ask the provider for the payment outcome of an invoice
    async fn verify_payment(&self, invoice_id: i64) -> Result<VerifyResponse>;
}

/// HTTP client for the AstimPay V1 API
///
/// Both endpoints live on the host of the configured API URL, always over
/// https, authenticated with a static `API-KEY` header.
pub struct AstimPayClient {
    client: Client,
    api_key: String,
    api_url: String,
}

impl AstimPayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
        })
    }

    /// Derive an endpoint from the configured API URL
    ///
    /// Only the host is reused; scheme and path are fixed. The URL is not
    /// validated at configuration time, so a hostless value fails here.
    fn endpoint(&self, path: &str) -> Result<String> {
        let host = Url::parse(&self.api_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "API URL '{}' has no usable host",
                    self.api_url
                ))
            })?;

        Ok(format!("https://{host}/api/{path}"))
    }

    async fn post_json<B>(&self, url: &str, body: &B) -> Result<String>
    where
        B: serde::Serialize + ?Sized + Sync,
    {
        let response = self
            .client
            .post(url)
            .header("API-KEY", &self.api_key)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    AppError::transport(format!(
                        "AstimPay unreachable ({}): {}",
                        if e.is_timeout() { "timeout" } else { "connection failed" },
                        e
                    ))
                } else {
                    AppError::transport(format!("AstimPay request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::transport(format!("failed to read AstimPay response: {e}")))?;

        debug!(url = %url, status = status.as_u16(), "provider call finished");
        Ok(body)
    }
}

#[async_trait]
impl AstimPayApi for AstimPayClient {
    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse> {
        let url = self.endpoint("checkout-v1")?;
        let body = self.post_json(&url, request).await?;

        // A success payload carries both status and payment_url; anything
        // else is reported with the provider's own message.
        match serde_json::from_str::<CheckoutResponse>(&body) {
            Ok(response) => Ok(response),
            Err(_) => Err(AppError::provider(provider_message(&body))),
        }
    }

    async fn verify_payment(&self, invoice_id: i64) -> Result<VerifyResponse> {
        let url = self.endpoint("verify-payment")?;
        let body = self.post_json(&url, &VerifyRequest { invoice_id }).await?;

        match serde_json::from_str::<VerifyResponse>(&body) {
            Ok(response) => Ok(response),
            Err(_) => Err(AppError::provider(provider_message(&body))),
        }
    }
}

/// Provider error payloads carry a `message` field, but not reliably
fn provider_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ProviderMessage {
        message: Option<String>,
    }

    serde_json::from_str::<ProviderMessage>(body)
        .ok()
        .and_then(|payload| payload.message)
        .unwrap_or_else(|| "Please recheck configurations".to_string())
}
