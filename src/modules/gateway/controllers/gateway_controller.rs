use std::collections::HashMap;

use actix_web::{web, HttpResponse};

use crate::config::settings_form;
use crate::core::error::AppError;
use crate::modules::gateway::models::IpnPayload;
use crate::modules::gateway::services::AstimPayAdapter;

/// Render the payment form for an invoice
/// GET /astimpay/checkout/{invoice_id}
pub async fn checkout(
    adapter: web::Data<AstimPayAdapter>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let form = adapter.start_checkout(path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(form.render()))
}

/// Receive a payment notification and redirect the payer back
/// POST /astimpay/ipn/{transaction_id}
///
/// The provider delivers either a JSON body or query parameters; the raw
/// body is taken as-is so malformed JSON degrades to the query fallback.
pub async fn ipn(
    adapter: web::Data<AstimPayAdapter>,
    path: web::Path<i64>,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = IpnPayload::new(&body, query.into_inner());
    let return_url = adapter
        .handle_notification(&payload, path.into_inner())
        .await?;

    Ok(HttpResponse::Found()
        .insert_header(("Location", return_url))
        .finish())
}

/// Describe the gateway's admin settings form
/// GET /astimpay/settings
pub async fn settings() -> HttpResponse {
    HttpResponse::Ok().json(settings_form())
}

/// Configure gateway routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/astimpay")
            .route("/checkout/{invoice_id}", web::get().to(checkout))
            .route("/ipn/{transaction_id}", web::post().to(ipn))
            .route("/settings", web::get().to(settings)),
    );
}
