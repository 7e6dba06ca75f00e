//! End-to-end tests: resource handles over the reqwest client against a mock API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xendit::model::{
    BankCode, CreateFixedPaymentCodeParams, RetailOutletName, UpdateFixedPaymentCodeParams,
};
use xendit::{Amount, Headers, Xendit};
use xendit_http::constants::{FOR_USER_ID_HEADER, IDEMPOTENCY_KEY_HEADER};
use xendit_http::{HttpClientConfig, HttpRequestClient};

fn xendit(server: &MockServer) -> Xendit {
    HttpRequestClient::new(HttpClientConfig::new("xnd_development_key").with_base_url(server.uri()))
        .unwrap()
        .into_xendit()
}

#[tokio::test]
async fn test_create_virtual_account_from_map() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/callback_virtual_accounts"))
        .and(body_json(json!({"external_id": "e1", "bank_code": "BNI", "name": "John"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "57f6fbf26b9f064272622aa6",
            "external_id": "e1",
            "bank_code": "BNI",
            "name": "John",
            "account_number": "88082548",
            "is_closed": false,
            "status": "PENDING"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = json!({"external_id": "e1", "bank_code": "BNI", "name": "John"})
        .as_object()
        .cloned()
        .unwrap();
    let account = xendit(&server)
        .fixed_virtual_account()
        .create_open(params)
        .await
        .unwrap();

    assert_eq!(account.id.as_deref(), Some("57f6fbf26b9f064272622aa6"));
    assert_eq!(account.bank_code(), Some(BankCode::Bni));
    assert_eq!(account.status.as_deref(), Some("PENDING"));
}

#[tokio::test]
async fn test_create_virtual_account_amount_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/callback_virtual_accounts"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error_code": "API_VALIDATION_ERROR",
            "message": "Maximum amount is 50000000000"
        })))
        .mount(&server)
        .await;

    let params = json!({
        "external_id": "e1",
        "bank_code": "BNI",
        "name": "John",
        "expected_amount": 50_000_000_001_i64
    })
    .as_object()
    .cloned()
    .unwrap();
    let err = xendit(&server)
        .fixed_virtual_account()
        .create_closed(params)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Maximum amount is 50000000000");
    assert_eq!(err.error_code(), Some("API_VALIDATION_ERROR"));
}

#[tokio::test]
async fn test_fixed_payment_code_lifecycle_with_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/fixed_payment_code"))
        .and(header(FOR_USER_ID_HEADER, "5f0f1c6b3a7d"))
        .and(header(IDEMPOTENCY_KEY_HEADER, "fpc-1"))
        .and(body_json(json!({
            "external_id": "fpc-1",
            "retail_outlet_name": "INDOMARET",
            "name": "Rika Sutanto",
            "expected_amount": 10000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5b61881e6cc2770f00117f73",
            "external_id": "fpc-1",
            "retail_outlet_name": "INDOMARET",
            "payment_code": "TEST123456",
            "expected_amount": 10000
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/fixed_payment_code/5b61881e6cc2770f00117f73"))
        .and(body_json(json!({"expected_amount": 12500.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "5b61881e6cc2770f00117f73",
            "expected_amount": 12500.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let xendit = xendit(&server);
    let headers = Headers::from([
        (FOR_USER_ID_HEADER.to_owned(), "5f0f1c6b3a7d".to_owned()),
        (IDEMPOTENCY_KEY_HEADER.to_owned(), "fpc-1".to_owned()),
    ]);
    let created = xendit
        .retail_outlet()
        .with_headers(headers)
        .create_fixed_payment_code(CreateFixedPaymentCodeParams::new(
            "fpc-1",
            RetailOutletName::Indomaret,
            "Rika Sutanto",
            10_000_u32,
        ))
        .await
        .unwrap();
    assert_eq!(created.payment_code.as_deref(), Some("TEST123456"));

    let id = created.id.unwrap();
    let amount: Amount = "12500.5".parse().unwrap();
    let updated = xendit
        .retail_outlet()
        .update_fixed_payment_code(
            &id,
            UpdateFixedPaymentCodeParams::default().with_expected_amount(amount),
        )
        .await
        .unwrap();
    assert_eq!(updated.expected_amount, Some(amount));
}

#[tokio::test]
async fn test_get_payment_and_banks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/callback_virtual_account_payments/payment_id=1502450097080"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "598d91b1191029596846047f",
            "payment_id": "1502450097080",
            "callback_virtual_account_id": "598d5f71bf64853820c49a18",
            "bank_code": "BNI",
            "amount": 5000
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/available_virtual_account_banks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Bank Negara Indonesia", "code": "BNI"},
            {"name": "Bank Rakyat Indonesia", "code": "BRI"}
        ])))
        .mount(&server)
        .await;

    let xendit = xendit(&server);
    let payment = xendit
        .fixed_virtual_account()
        .get_payment("1502450097080")
        .await
        .unwrap();
    assert_eq!(payment.amount, Some(Amount::from(5_000_u32)));

    let banks = xendit
        .fixed_virtual_account()
        .get_available_banks()
        .await
        .unwrap();
    let codes: Vec<_> = banks.iter().filter_map(|bank| bank.bank_code()).collect();
    assert_eq!(codes, vec![BankCode::Bni, BankCode::Bri]);
}

#[tokio::test]
async fn test_get_unknown_virtual_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/callback_virtual_accounts/fake_id"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error_code": "CALLBACK_VIRTUAL_ACCOUNT_NOT_FOUND_ERROR",
            "message": "Callback virtual account not found"
        })))
        .mount(&server)
        .await;

    let err = xendit(&server)
        .fixed_virtual_account()
        .get_fixed_va("fake_id")
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Callback virtual account not found");
    assert_eq!(err.status(), Some(404));
}
