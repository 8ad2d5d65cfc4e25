//! HTTP handlers for the wallet API
//!
//! Two routes under `/api/v1/wallet`:
//! - `POST` - perform a deposit or withdrawal
//! - `GET /{wallet_uuid}` - query the current balance

use crate::api::dto::{WalletBalanceDto, WalletOperationResponseDto, WalletRequestDto};
use crate::api::error::{json_error_handler, ErrorDtoResponse};
use crate::api::SharedLedger;
use crate::types::{LedgerError, WalletId};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use std::str::FromStr;

/// Perform a deposit or withdrawal against a wallet
#[post("")]
async fn do_operation(
    ledger: web::Data<SharedLedger>,
    body: web::Json<WalletRequestDto>,
) -> Result<web::Json<WalletOperationResponseDto>, LedgerError> {
    let request = body.into_inner().try_into_request()?;
    let receipt = ledger.execute(&request)?;
    Ok(web::Json(receipt.into()))
}

/// Query the current balance of a wallet
///
/// The path segment is taken as a raw string and parsed explicitly, so a
/// malformed identifier is reported in the API's error shape instead of
/// actix's default 404.
#[get("/{wallet_uuid}")]
async fn get_balance(
    ledger: web::Data<SharedLedger>,
    path: web::Path<String>,
) -> Result<web::Json<WalletBalanceDto>, LedgerError> {
    let raw = path.into_inner();
    let wallet =
        WalletId::from_str(&raw).map_err(|_| LedgerError::invalid_identifier(&raw))?;
    let balance = ledger.balance(wallet)?;
    Ok(web::Json(WalletBalanceDto { balance }))
}

/// Fallback for requests that match no route, shaped like every other
/// API error
async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorDtoResponse::single(
        "NOT_FOUND",
        format!("Resource at {} not found", req.path()),
    ))
}

/// Register the wallet routes and their JSON error shaping
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/wallet")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(do_operation)
            .service(get_balance),
    )
    .default_service(web::route().to(not_found));
}
