pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{
    CheckoutRequest, CheckoutResponse, CompletedPayment, IpnPayload, PaymentForm, PaymentMetadata,
    VerifyResponse,
};
pub use services::{AstimPayAdapter, AstimPayApi, AstimPayClient};
