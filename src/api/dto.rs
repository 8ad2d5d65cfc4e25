//! Request and response DTOs for the wallet API
//!
//! Conversion between wire shapes and domain types is done through plain,
//! directly-callable functions; the DTOs themselves carry no behavior
//! beyond serde derives.

use crate::types::{LedgerError, OperationKind, OperationReceipt, OperationRequest};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/v1/wallet`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRequestDto {
    /// Target wallet identifier
    pub wallet_id: Uuid,

    /// Which operation to perform
    pub operation_type: OperationKind,

    /// Operation amount; must be greater than 0
    pub amount: Decimal,
}

impl WalletRequestDto {
    /// Validate the DTO and convert it into a domain request
    ///
    /// # Errors
    ///
    /// * `InvalidRequest` if the amount is not positive
    pub fn try_into_request(self) -> Result<OperationRequest, LedgerError> {
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_request(
                "the operation amount must be greater than 0",
            ));
        }

        Ok(OperationRequest {
            wallet_id: self.wallet_id,
            kind: self.operation_type,
            amount: self.amount,
        })
    }
}

/// Body of a successful `POST /api/v1/wallet` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletOperationResponseDto {
    /// Human-readable description of the operation performed
    pub description: String,

    /// The processed amount at 2-decimal scale
    pub amount: Decimal,
}

impl From<OperationReceipt> for WalletOperationResponseDto {
    fn from(receipt: OperationReceipt) -> Self {
        WalletOperationResponseDto {
            description: receipt.description,
            amount: receipt.amount,
        }
    }
}

/// Body of a successful `GET /api/v1/wallet/{wallet_uuid}` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalanceDto {
    /// The wallet's current balance at 2-decimal scale
    pub balance: Decimal,
}
