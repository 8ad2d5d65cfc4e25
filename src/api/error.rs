//! Error response shaping for the wallet API
//!
//! Every failure leaves the server as the same JSON shape:
//! `{"errors": [{"errorCode": "...", "message": "..."}]}`. Business
//! errors map to 400, everything else to 500.

use crate::types::LedgerError;
use actix_web::http::StatusCode;
use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use tracing::error;

/// A single error entry in an API error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleErrorDto {
    /// Stable machine-readable error code
    pub error_code: String,

    /// Human-readable message
    pub message: String,
}

/// Body of every API error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDtoResponse {
    pub errors: Vec<SingleErrorDto>,
}

impl ErrorDtoResponse {
    /// Build a response carrying a single error entry
    pub fn single(error_code: &str, message: impl Into<String>) -> Self {
        ErrorDtoResponse {
            errors: vec![SingleErrorDto {
                error_code: error_code.to_string(),
                message: message.into(),
            }],
        }
    }
}

/// Stable error code for a ledger error
fn error_code(error: &LedgerError) -> &'static str {
    match error {
        LedgerError::WalletNotFound { .. } => "WALLET_NOT_FOUND",
        LedgerError::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
        LedgerError::InvalidRequest { .. } => "VALIDATION_ERROR",
        LedgerError::InvalidIdentifier { .. } => "INVALID_TYPE",
        _ => "INTERNAL_ERROR",
    }
}

impl ResponseError for LedgerError {
    fn status_code(&self) -> StatusCode {
        match self {
            LedgerError::WalletNotFound { .. }
            | LedgerError::InsufficientFunds { .. }
            | LedgerError::InvalidRequest { .. }
            | LedgerError::InvalidIdentifier { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        error!(error = %self, "request failed");

        HttpResponse::build(self.status_code())
            .json(ErrorDtoResponse::single(error_code(self), self.to_string()))
    }
}

/// Shape JSON payload rejections like every other API error
///
/// Covers malformed bodies, missing fields, and type mismatches caught by
/// serde before a handler runs.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = ErrorDtoResponse::single("VALIDATION_ERROR", err.to_string());
    actix_web::error::InternalError::from_response(err, HttpResponse::BadRequest().json(body))
        .into()
}
