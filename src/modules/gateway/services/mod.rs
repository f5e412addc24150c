pub mod adapter;
pub mod astimpay;

pub use adapter::AstimPayAdapter;
pub use astimpay::{AstimPayApi, AstimPayClient};
