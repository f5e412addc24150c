pub mod gateway;
pub mod host;
