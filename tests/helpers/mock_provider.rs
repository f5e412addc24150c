use std::sync::Mutex;

use async_trait::async_trait;

use astimpay_gateway::core::{AppError, Result};
use astimpay_gateway::gateway::{AstimPayApi, CheckoutRequest, CheckoutResponse, VerifyResponse};

/// Scripted AstimPay API
///
/// Responses are set up front; a missing response simulates a transport
/// failure. Every request is captured for assertions.
#[derive(Default)]
pub struct MockAstimPay {
    pub checkout_response: Mutex<Option<CheckoutResponse>>,
    pub verify_response: Mutex<Option<VerifyResponse>>,
    pub checkout_requests: Mutex<Vec<CheckoutRequest>>,
    pub verify_requests: Mutex<Vec<i64>>,
}

impl MockAstimPay {
    pub fn respond_to_checkout(&self, response: CheckoutResponse) {
        *self.checkout_response.lock().unwrap() = Some(response);
    }

    pub fn respond_to_verify(&self, response: VerifyResponse) {
        *self.verify_response.lock().unwrap() = Some(response);
    }

    pub fn captured_checkouts(&self) -> Vec<CheckoutRequest> {
        self.checkout_requests.lock().unwrap().clone()
    }

    pub fn captured_verifies(&self) -> Vec<i64> {
        self.verify_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AstimPayApi for MockAstimPay {
    async fn create_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutResponse> {
        self.checkout_requests.lock().unwrap().push(request.clone());
        self.checkout_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::transport("AstimPay unreachable (connection failed)"))
    }

    async fn verify_payment(&self, invoice_id: i64) -> Result<VerifyResponse> {
        self.verify_requests.lock().unwrap().push(invoice_id);
        self.verify_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::transport("AstimPay unreachable (connection failed)"))
    }
}
