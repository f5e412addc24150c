//! AstimPay Payment Gateway Adapter
//!
//! Connects a billing host's invoice ledger to the AstimPay checkout and
//! verification APIs: builds the hosted-checkout request, renders the
//! redirect form, and reconciles asynchronous payment notifications (IPN)
//! into the host's transaction and client-credit records.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::gateway;
pub use modules::host;
