pub mod currency;
pub mod error;

pub use currency::{ExchangeRate, BDT};
pub use error::{AppError, Result};
