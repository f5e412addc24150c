pub mod checkout;
pub mod form;
pub mod ipn;
pub mod verify;

pub use checkout::{CheckoutRequest, CheckoutResponse, PaymentMetadata};
pub use form::PaymentForm;
pub use ipn::IpnPayload;
pub use verify::{CompletedPayment, VerifyRequest, VerifyResponse};
