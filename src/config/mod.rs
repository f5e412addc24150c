use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, ExchangeRate, Result};

/// Raw gateway settings as handed over by the billing host's admin form
///
/// Everything is optional here; presence is checked once when the adapter
/// configuration is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GatewayParams {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
    pub exchange_rate: Option<Decimal>,
    #[serde(default)]
    pub return_url: String,
    #[serde(default)]
    pub notify_url: String,
    #[serde(default)]
    pub cancel_url: String,
    #[serde(default)]
    pub auto_redirect: bool,
}

/// Validated gateway configuration, immutable after construction
///
/// Only presence of `api_key`, `api_url` and `exchange_rate` is enforced.
/// URL well-formedness and rate positivity are not checked here; a bad
/// `api_url` or zero rate surfaces as an error on the first provider call.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: String,
    pub api_url: String,
    pub exchange_rate: ExchangeRate,
    pub return_url: String,
    pub notify_url: String,
    pub cancel_url: String,
    pub auto_redirect: bool,
}

impl GatewayConfig {
    /// Build a configuration from host form values
    ///
    /// Fails with a `Configuration` error naming the first missing required
    /// setting.
    pub fn from_params(params: GatewayParams) -> Result<Self> {
        let api_key = params.api_key.ok_or_else(|| missing("API KEY"))?;
        let api_url = params.api_url.ok_or_else(|| missing("API URL"))?;
        let exchange_rate = params
            .exchange_rate
            .ok_or_else(|| missing("USD to BDT exchange rate [1 USD = ? BDT]"))?;

        Ok(Self {
            api_key,
            api_url,
            exchange_rate: ExchangeRate::new(exchange_rate),
            return_url: params.return_url,
            notify_url: params.notify_url,
            cancel_url: params.cancel_url,
            auto_redirect: params.auto_redirect,
        })
    }
}

fn missing(setting: &str) -> AppError {
    AppError::configuration(format!(
        "The AstimPay payment gateway is not fully configured. Please configure the {setting}"
    ))
}

/// Admin-panel description of the gateway: logo asset and settings fields
#[derive(Debug, Clone, Serialize)]
pub struct SettingsForm {
    pub supports_one_time_payments: bool,
    pub description: String,
    pub logo: LogoAsset,
    pub form: Vec<FormField>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoAsset {
    pub logo: String,
    pub height: String,
    pub width: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub label: String,
}

impl FormField {
    fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: "text".to_string(),
            label: label.to_string(),
        }
    }
}

/// Settings form the host renders on the gateway management page
pub fn settings_form() -> SettingsForm {
    SettingsForm {
        supports_one_time_payments: true,
        description: "Simplify Your Payment Management with AstimPay".to_string(),
        logo: LogoAsset {
            logo: "AstimPay/AstimPay.png".to_string(),
            height: "50px".to_string(),
            width: "50px".to_string(),
        },
        form: vec![
            FormField::text("api_key", "API key:"),
            FormField::text("api_url", "API URL (V1):"),
            FormField::text(
                "exchange_rate",
                "USD to BDT exchange rate [1 USD = ? BDT]:",
            ),
        ],
    }
}
