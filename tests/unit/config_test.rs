// Configuration validation tests
//
// Construction fails only when api_key, api_url or exchange_rate is absent.
// Values are deliberately not validated beyond presence: a garbage URL or a
// zero rate still constructs and only fails later, on use.

use rust_decimal_macros::dec;

use astimpay_gateway::config::{settings_form, GatewayConfig, GatewayParams};
use astimpay_gateway::core::AppError;

fn complete_params() -> GatewayParams {
    GatewayParams {
        api_key: Some("key-123".to_string()),
        api_url: Some("https://pay.astimpay.test/api/v1".to_string()),
        exchange_rate: Some(dec!(110)),
        return_url: "https://billing.example.com/return".to_string(),
        notify_url: "https://billing.example.com/ipn".to_string(),
        cancel_url: "https://billing.example.com/cancel".to_string(),
        auto_redirect: false,
    }
}

#[test]
fn complete_params_construct() {
    assert!(GatewayConfig::from_params(complete_params()).is_ok());
}

#[test]
fn missing_api_key_fails() {
    let err = GatewayConfig::from_params(GatewayParams {
        api_key: None,
        ..complete_params()
    })
    .unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert!(err.to_string().contains("API KEY"));
}

#[test]
fn missing_api_url_fails() {
    let err = GatewayConfig::from_params(GatewayParams {
        api_url: None,
        ..complete_params()
    })
    .unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert!(err.to_string().contains("API URL"));
}

#[test]
fn missing_exchange_rate_fails() {
    let err = GatewayConfig::from_params(GatewayParams {
        exchange_rate: None,
        ..complete_params()
    })
    .unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert!(err.to_string().contains("USD to BDT exchange rate"));
}

#[test]
fn values_are_not_validated_beyond_presence() {
    // Zero rate and an unusable URL still construct
    let config = GatewayConfig::from_params(GatewayParams {
        api_url: Some("not a url".to_string()),
        exchange_rate: Some(dec!(0)),
        ..complete_params()
    });
    assert!(config.is_ok());
}

#[test]
fn optional_urls_default_to_empty() {
    let config = GatewayConfig::from_params(GatewayParams {
        api_key: Some("k".to_string()),
        api_url: Some("https://pay.astimpay.test".to_string()),
        exchange_rate: Some(dec!(1)),
        ..GatewayParams::default()
    })
    .unwrap();

    assert_eq!(config.return_url, "");
    assert!(!config.auto_redirect);
}

#[test]
fn settings_form_describes_the_three_text_fields() {
    let form = settings_form();

    assert!(form.supports_one_time_payments);
    assert_eq!(form.logo.logo, "AstimPay/AstimPay.png");

    let labels: Vec<&str> = form.form.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "API key:",
            "API URL (V1):",
            "USD to BDT exchange rate [1 USD = ? BDT]:",
        ]
    );
    assert!(form.form.iter().all(|f| f.input_type == "text"));
}
