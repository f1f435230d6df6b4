// Integration tests for `InventoryClient` against a mock backend.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use showroom_web::inventory::client::{FetchError, InventoryClient};

async fn setup() -> (MockServer, InventoryClient) {
    let server = MockServer::start().await;
    let client = InventoryClient::new(&server.uri());
    (server, client)
}

#[tokio::test]
async fn inventory_accepts_wrapped_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scan/cars-db"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "url": "https://cars.example/1", "make": "Porsche", "price": 89000 },
                { "url": "https://cars.example/2", "price": "45500" }
            ]
        })))
        .mount(&server)
        .await;

    let listings = client.inventory(5).await.unwrap();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].make.as_deref(), Some("Porsche"));
    assert_eq!(listings[0].price, Some(89000.0));
    assert_eq!(listings[1].price, Some(45500.0));
}

#[tokio::test]
async fn inventory_accepts_bare_array_payload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scan/cars-db"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "url": "https://cars.example/1" }])),
        )
        .mount(&server)
        .await;

    let listings = client.inventory(200).await.unwrap();
    assert_eq!(listings.len(), 1);
}

#[tokio::test]
async fn inventory_non_success_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scan/cars-db"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let result = client.inventory(200).await;
    assert!(
        matches!(result, Err(FetchError::Status(s)) if s.as_u16() == 500),
        "expected status error, got: {result:?}"
    );
}

#[tokio::test]
async fn inventory_unreachable_backend_is_an_error() {
    let client = InventoryClient::new("http://127.0.0.1:1");
    let result = client.inventory(200).await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
}

#[tokio::test]
async fn detail_returns_the_listing() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scan/detail"))
        .and(query_param("url", "https://cars.example/detail?id=1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "url": "https://cars.example/detail?id=1",
            "year": 2019,
            "make": "Porsche",
            "model": "911",
            "status": "sold"
        })))
        .mount(&server)
        .await;

    let listing = client
        .detail("https://cars.example/detail?id=1")
        .await
        .unwrap()
        .expect("listing should be present");

    assert_eq!(listing.year, Some(2019));
    assert_eq!(listing.status.as_deref(), Some("sold"));
}

#[tokio::test]
async fn detail_backend_404_is_absence_not_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scan/detail"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let listing = client.detail("https://cars.example/gone").await.unwrap();
    assert!(listing.is_none());
}

#[tokio::test]
async fn probe_reflects_backend_reachability() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/scan/cars-db"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    assert!(client.probe().await);
    assert!(!InventoryClient::new("http://127.0.0.1:1").probe().await);
}
