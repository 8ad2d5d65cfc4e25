//! HTTP API module
//!
//! The wallet service's outward surface: route handlers, request/response
//! DTOs, and error-response shaping.
//!
//! # Components
//!
//! - `handlers` - actix-web route handlers and service configuration
//! - `dto` - Wire shapes and explicit conversions to/from domain types
//! - `error` - The `{"errors": [...]}` response shape and status mapping

pub mod dto;
pub mod error;
pub mod handlers;

use crate::core::{MemoryStore, WalletLedger};

/// The concrete ledger the HTTP surface serves
pub type SharedLedger = WalletLedger<MemoryStore>;

pub use dto::{WalletBalanceDto, WalletOperationResponseDto, WalletRequestDto};
pub use error::{ErrorDtoResponse, SingleErrorDto};
pub use handlers::configure;
