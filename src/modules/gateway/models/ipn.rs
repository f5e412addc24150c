use std::collections::HashMap;

/// Inbound payment notification as delivered by the module host
///
/// The provider reaches us two ways: a server-to-server webhook with a JSON
/// body, or the payer's browser redirect carrying GET query parameters.
/// Either source must name the invoice.
#[derive(Debug, Clone)]
pub struct IpnPayload {
    body: serde_json::Value,
    query: HashMap<String, String>,
}

impl IpnPayload {
    /// Capture a notification; an unparsable body is kept as empty
    pub fn new(raw_body: &[u8], query: HashMap<String, String>) -> Self {
        let body = serde_json::from_slice(raw_body).unwrap_or(serde_json::Value::Null);
        Self { body, query }
    }

    /// Invoice id named by the notification, preferring the JSON body and
    /// falling back to the query parameters
    pub fn invoice_id(&self) -> Option<i64> {
        self.body_invoice_id().or_else(|| self.query_invoice_id())
    }

    /// A notification is acceptable only if it names an invoice somewhere
    pub fn is_valid(&self) -> bool {
        self.invoice_id().is_some()
    }

    fn body_invoice_id(&self) -> Option<i64> {
        parse_id(self.body.get("invoice_id")?)
    }

    fn query_invoice_id(&self) -> Option<i64> {
        self.query.get("invoice_id")?.parse().ok()
    }
}

// Providers serialize ids both as numbers and as strings
fn parse_id(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
