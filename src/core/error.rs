use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every failure the adapter can produce maps onto one of these variants;
/// they propagate to the module host as request failures and are never
/// retried internally.
#[derive(thiserror::Error, Debug, Clone)]
pub enum AppError {
    /// Gateway configuration is incomplete or unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Outbound call to the payment provider failed at the transport level
    #[error("Gateway transport error: {0}")]
    GatewayTransport(String),

    /// Provider answered with a non-success or malformed payload
    #[error("Gateway provider error: {0}")]
    GatewayProvider(String),

    /// Inbound notification is malformed or not in an approvable state
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Referenced invoice/transaction/client missing in the host ledger
    #[error("Not found: {0}")]
    NotFound(String),

    /// Replayed payment notification detected
    #[error("Duplicate IPN: {0}")]
    DuplicateIpn(String),

    /// Internal errors (impossible states, misbehaving collaborators)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::GatewayTransport(_) => StatusCode::BAD_GATEWAY,
            AppError::GatewayProvider(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateIpn(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        AppError::GatewayTransport(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        AppError::GatewayProvider(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        AppError::InvalidRequest(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
