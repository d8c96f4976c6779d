use serde_json::json;
use stowage_client::{ApiClient, Auth, ClientError, OrderClient, OrderClientStub};

fn orders_body() -> String {
    json!({
        "orders": [
            {"id": 1, "sku": "SKU1", "quantity": 1, "customer_id": 1},
            {"id": 2, "sku": "SKU2", "quantity": 2, "customer_id": 2}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn stub_returns_the_same_structure_as_the_real_api() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/orders")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(orders_body())
        .create_async()
        .await;

    let stubbed_orders = OrderClientStub::new().list_orders();

    let api = ApiClient::new(server.url(), None).unwrap();
    let real_orders = OrderClient::real(api).list_orders().await.unwrap();

    assert_eq!(stubbed_orders, real_orders);
    assert_eq!(
        serde_json::to_value(&stubbed_orders).unwrap(),
        serde_json::to_value(&real_orders).unwrap()
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn real_mode_built_from_configuration_lists_orders() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/orders")
        .match_header("x-api-key", "k-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(orders_body())
        .create_async()
        .await;
    let url = format!("{}/", server.url());
    let vars = |name: &str| match name {
        "STOWAGE_API_URL" => Some(url.clone()),
        "STOWAGE_API_KEY" => Some("k-123".to_string()),
        _ => None,
    };

    let client = OrderClient::from_lookup(false, vars).unwrap();
    assert!(!client.is_stub());

    let orders = client.list_orders().await.unwrap();
    assert_eq!(orders, OrderClientStub::new().list_orders());
    mock.assert_async().await;
}

#[tokio::test]
async fn real_mode_sends_api_key() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/orders")
        .match_header("x-api-key", "secret-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"orders": []}"#)
        .create_async()
        .await;

    let api = ApiClient::new(server.url(), Some(Auth::XApiKey("secret-key".to_string()))).unwrap();
    let orders = OrderClient::real(api).list_orders().await.unwrap();

    assert!(orders.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn real_mode_sends_bearer_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v0/orders")
        .match_header("authorization", "Bearer t0ken")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(orders_body())
        .create_async()
        .await;

    let api = ApiClient::new(server.url(), Some(Auth::Bearer("t0ken".to_string()))).unwrap();
    let orders = OrderClient::real(api).list_orders().await.unwrap();

    assert_eq!(orders.len(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn real_mode_maps_http_errors() {
    let mut server = mockito::Server::new_async().await;
    let api = ApiClient::new(server.url(), None).unwrap();
    let client = OrderClient::real(api);

    let not_found = server
        .mock("GET", "/api/v0/orders")
        .with_status(404)
        .create_async()
        .await;
    assert!(matches!(
        client.list_orders().await,
        Err(ClientError::NotFound(_))
    ));
    not_found.remove_async().await;

    let forbidden = server
        .mock("GET", "/api/v0/orders")
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;
    assert!(matches!(
        client.list_orders().await,
        Err(ClientError::AccessDenied(ref body)) if body == "forbidden"
    ));
    forbidden.remove_async().await;

    let _unavailable = server
        .mock("GET", "/api/v0/orders")
        .with_status(503)
        .with_body("down")
        .create_async()
        .await;
    assert!(matches!(
        client.list_orders().await,
        Err(ClientError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn real_mode_rejects_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/v0/orders")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"orders": [{"id": "one"}]}"#)
        .create_async()
        .await;

    let api = ApiClient::new(server.url(), None).unwrap();
    let result = OrderClient::real(api).list_orders().await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Port 9 (discard) is not expected to accept HTTP connections.
    let api = ApiClient::new("http://127.0.0.1:9", None).unwrap();
    let result = OrderClient::real(api).list_orders().await;

    assert!(matches!(result, Err(ClientError::Transport(_))));
}
