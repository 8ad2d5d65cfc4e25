//! End-to-end API tests
//!
//! These tests exercise the full HTTP surface against a seeded in-memory
//! ledger: route wiring, DTO validation, business outcomes, and the
//! error-response shape. Each test:
//! 1. Seeds a ledger with known wallet balances
//! 2. Sends real requests through an actix test service
//! 3. Asserts on status codes and response bodies

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;
use uuid::Uuid;
use wallet_ledger::api::{self, SharedLedger};
use wallet_ledger::{MemoryStore, Wallet, WalletId, WalletLedger};

/// Build the app state for a ledger seeded with the given balances
fn seeded(wallets: &[(WalletId, &str)]) -> web::Data<SharedLedger> {
    let store = MemoryStore::new();
    for (wallet_id, balance) in wallets {
        store
            .insert(Wallet::new(*wallet_id, Decimal::from_str(balance).unwrap()))
            .unwrap();
    }
    web::Data::new(WalletLedger::new(store))
}

/// Shorthand for the single error entry of an error response body
fn first_error(body: &Value) -> (&str, &str) {
    let entry = &body["errors"][0];
    (
        entry["errorCode"].as_str().unwrap(),
        entry["message"].as_str().unwrap(),
    )
}

#[actix_web::test]
async fn test_withdraw_success() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "1000.00")]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": wallet,
            "operationType": "WITHDRAW",
            "amount": "200.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["description"], "Withdrawal");
    assert_eq!(body["amount"], "200.00");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", wallet))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["balance"], "800.00");
}

#[actix_web::test]
async fn test_deposit_success() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "500.00")]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": wallet,
            "operationType": "DEPOSIT",
            "amount": "150.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["description"], "Deposit");
    assert_eq!(body["amount"], "150.00");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", wallet))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["balance"], "650.00");
}

#[actix_web::test]
async fn test_amount_accepted_as_json_number() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "0.00")]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": wallet,
            "operationType": "DEPOSIT",
            "amount": 25
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["amount"], "25.00");
}

#[actix_web::test]
async fn test_withdraw_insufficient_funds() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "500.00")]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": wallet,
            "operationType": "WITHDRAW",
            "amount": "600.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let (code, message) = first_error(&body);
    assert_eq!(code, "INSUFFICIENT_FUNDS");
    assert!(message.contains("Insufficient funds"));

    // Balance is untouched by the failed withdrawal
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", wallet))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["balance"], "500.00");
}

#[actix_web::test]
async fn test_operation_on_unknown_wallet() {
    let unknown = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": unknown,
            "operationType": "DEPOSIT",
            "amount": "10.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let (code, message) = first_error(&body);
    assert_eq!(code, "WALLET_NOT_FOUND");
    // The identifier is embedded in the message
    assert!(message.contains(&unknown.to_string()));
}

#[actix_web::test]
async fn test_balance_of_unknown_wallet() {
    let unknown = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", unknown))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let (code, message) = first_error(&body);
    assert_eq!(code, "WALLET_NOT_FOUND");
    assert!(message.contains(&unknown.to_string()));
}

#[actix_web::test]
async fn test_balance_with_malformed_identifier() {
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/wallet/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let (code, message) = first_error(&body);
    assert_eq!(code, "INVALID_TYPE");
    assert!(message.contains("not-a-uuid"));
}

#[actix_web::test]
async fn test_non_positive_amount_is_rejected_before_any_adjustment() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "100.00")]))
            .configure(api::configure),
    )
    .await;

    for amount in ["0", "-5.00"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/wallet")
            .set_json(json!({
                "walletId": wallet,
                "operationType": "DEPOSIT",
                "amount": amount
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let (code, _) = first_error(&body);
        assert_eq!(code, "VALIDATION_ERROR");
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", wallet))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["balance"], "100.00");
}

#[actix_web::test]
async fn test_malformed_bodies_are_rejected() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "100.00")]))
            .configure(api::configure),
    )
    .await;

    let bodies = [
        // missing amount
        json!({"walletId": wallet, "operationType": "DEPOSIT"}),
        // missing wallet id
        json!({"operationType": "DEPOSIT", "amount": "10.00"}),
        // unknown operation kind
        json!({"walletId": wallet, "operationType": "TRANSFER", "amount": "10.00"}),
        // wallet id that is not a UUID
        json!({"walletId": "abc", "operationType": "DEPOSIT", "amount": "10.00"}),
    ];

    for body in bodies {
        let req = test::TestRequest::post()
            .uri("/api/v1/wallet")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        let (code, _) = first_error(&body);
        assert_eq!(code, "VALIDATION_ERROR");
    }
}

#[actix_web::test]
async fn test_repeated_withdrawals_until_funds_run_out() {
    let wallet = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(wallet, "1000.00")]))
            .configure(api::configure),
    )
    .await;

    // Five withdrawals of 200.00 drain the wallet; the sixth must fail.
    for _ in 0..5 {
        let req = test::TestRequest::post()
            .uri("/api/v1/wallet")
            .set_json(json!({
                "walletId": wallet,
                "operationType": "WITHDRAW",
                "amount": "200.00"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": wallet,
            "operationType": "WITHDRAW",
            "amount": "200.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let (code, _) = first_error(&body);
    assert_eq!(code, "INSUFFICIENT_FUNDS");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", wallet))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["balance"], "0.00");
}

#[actix_web::test]
async fn test_wallets_are_independent() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[(first, "100.00"), (second, "50.00")]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/wallet")
        .set_json(json!({
            "walletId": first,
            "operationType": "WITHDRAW",
            "amount": "60.00"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/wallet/{}", second))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["balance"], "50.00");
}

#[actix_web::test]
async fn test_unmatched_route_reports_not_found() {
    let app = test::init_service(
        App::new()
            .app_data(seeded(&[]))
            .configure(api::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v2/unknown").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    let (code, message) = first_error(&body);
    assert_eq!(code, "NOT_FOUND");
    assert!(message.contains("/api/v2/unknown"));
}
