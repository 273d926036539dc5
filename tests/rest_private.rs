mod common;

use rust_decimal::Decimal;
use wiremock::matchers::{any, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bleutrade_api_client::BleutradeRestClient;
use bleutrade_api_client::auth::sign_url;
use bleutrade_api_client::error::BleutradeError;
use bleutrade_api_client::rest::private::{OrdersRequest, TransferRequest, WithdrawRequest};
use bleutrade_api_client::types::{Currencies, OrderStatus, OrderType};

use common::{TEST_KEY, TEST_NONCE, TEST_SECRET, build_private_client, success};

#[tokio::test]
async fn test_get_balances_is_signed() {
    let server = MockServer::start().await;
    let url = format!(
        "{}/account/getbalances?apikey={TEST_KEY}&nonce={TEST_NONCE}&currencies=ALL",
        server.uri()
    );
    let expected_signature = sign_url(&url, TEST_SECRET).unwrap();
    let result = serde_json::json!([{ "Currency": "BTC", "Balance": "0.50000000" }]);

    Mock::given(method("GET"))
        .and(path("/account/getbalances"))
        .and(query_param("apikey", TEST_KEY))
        .and(query_param("nonce", TEST_NONCE.to_string()))
        .and(query_param("currencies", "ALL"))
        .and(header("apisign", expected_signature.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(result.clone())))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let balances = client.get_balances(Currencies::all()).await.unwrap();
    assert_eq!(balances, result);
}

#[tokio::test]
async fn test_get_balances_list_matches_joined_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getbalances"))
        .and(query_param("currencies", "DOGE;BTC;LTC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    client.get_balances(vec!["DOGE", "BTC", "LTC"]).await.unwrap();
    client.get_balances("DOGE;BTC;LTC").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(
        requests[0].headers.get("apisign"),
        requests[1].headers.get("apisign")
    );
}

#[tokio::test]
async fn test_get_open_orders_without_credentials_fails_before_request() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let client = BleutradeRestClient::builder().base_url(server.uri()).build();
    let err = client.get_open_orders().await.unwrap_err();
    match err {
        BleutradeError::Configuration(message) => {
            assert_eq!(message, "API key and secret are required")
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_key_without_secret_is_configuration_error() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = BleutradeRestClient::builder()
        .base_url(server.uri())
        .credentials(std::sync::Arc::new(
            bleutrade_api_client::auth::StaticCredentials::new("key", ""),
        ))
        .build();
    let err = client.cancel_order(42).await.unwrap_err();
    assert!(matches!(err, BleutradeError::Configuration(_)));
}

#[tokio::test]
async fn test_public_call_with_credentials_carries_key_but_no_signature() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public/getmarkets"))
        .and(query_param("apikey", TEST_KEY))
        .and(query_param("nonce", TEST_NONCE.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    client.get_markets().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("apisign").is_none());
}

#[tokio::test]
async fn test_get_orders_sends_all_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getorders"))
        .and(query_param("market", "ALL"))
        .and(query_param("status", "OPEN"))
        .and(query_param("type", "SELL"))
        .and(header_exists("apisign"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = OrdersRequest::new(OrderStatus::Open, OrderType::Sell);
    client.get_orders(&request).await.unwrap();
}

#[tokio::test]
async fn test_withdraw_and_transfer_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/withdraw"))
        .and(query_param("currency", "BTC"))
        .and(query_param("quantity", "0.25"))
        .and(query_param("address", "1BoatSLRHtKNngkdXEeobR76b53LETtpyT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::Value::Null)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account/transfer"))
        .and(query_param("currency", "DOGE"))
        .and(query_param("quantity", "1000"))
        .and(query_param("touser", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::Value::Null)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let withdraw = WithdrawRequest::new(
        "BTC",
        Decimal::new(25, 2),
        "1BoatSLRHtKNngkdXEeobR76b53LETtpyT",
    );
    assert!(client.withdraw(&withdraw).await.unwrap().is_null());

    let transfer = TransferRequest::new("DOGE", Decimal::new(1000, 0), "alice");
    client.transfer(&transfer).await.unwrap();
}

#[tokio::test]
async fn test_order_endpoints_send_order_id() {
    let server = MockServer::start().await;

    for endpoint in ["/account/getorder", "/account/getorderhistory", "/market/cancel"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("orderid", "65489"))
            .and(header_exists("apisign"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = build_private_client(&server);
    client.get_order(65489).await.unwrap();
    client.get_order_history(65489).await.unwrap();
    client.cancel_order(65489).await.unwrap();
}

#[tokio::test]
async fn test_account_endpoints_without_params() {
    let server = MockServer::start().await;

    for endpoint in [
        "/market/getopenorders",
        "/account/getdeposithistory",
        "/account/getwithdrawhistory",
    ] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(query_param("apikey", TEST_KEY))
            .and(header_exists("apisign"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = build_private_client(&server);
    client.get_open_orders().await.unwrap();
    client.get_deposit_history().await.unwrap();
    client.get_withdraw_history().await.unwrap();
}

#[tokio::test]
async fn test_deposit_address_and_chat() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getdepositaddress"))
        .and(query_param("currency", "DOGE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!({
            "Currency": "DOGE",
            "Address": "DQ4tVEqdPWHc1aVBm4Sfwft8XyNRPMEchR"
        }))))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account/chatsend"))
        .and(query_param("text", "hello & goodbye"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::Value::Null)))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let address = client.get_deposit_address("DOGE").await.unwrap();
    assert_eq!(address["Currency"], "DOGE");

    client.chat_send("hello & goodbye").await.unwrap();
}

#[tokio::test]
async fn test_private_api_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/account/getorders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "bad request"
        })))
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    let request = OrdersRequest::new(OrderStatus::All, OrderType::All).market("BTC_DOGE");
    let err = client.get_orders(&request).await.unwrap_err();
    assert_eq!(err.api_message(), Some("bad request"));
}

#[tokio::test]
async fn test_signature_covers_percent_encoded_query() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(success(serde_json::json!([]))))
        .expect(2)
        .mount(&server)
        .await;

    let client = build_private_client(&server);
    client.chat_send("héllo & good/bye ~!*'()?#").await.unwrap();
    client.get_balances(["DOGE", "BTC"]).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        let query = request.url.query().unwrap();
        assert!(!query.contains(' ') && !query.contains('#'), "{query}");

        let signed_url = format!("{}{}?{}", server.uri(), request.url.path(), query);
        let expected = sign_url(&signed_url, TEST_SECRET).unwrap();
        let sent = request
            .headers
            .get("apisign")
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert_eq!(sent, expected, "{signed_url}");
    }
    assert!(requests[1].url.query().unwrap().ends_with("&currencies=DOGE%3BBTC"));
}
