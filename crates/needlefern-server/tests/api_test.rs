use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use needlefern_core::catalog::{self, fixture, CatalogError};
use needlefern_core::mock::{MockCatalog, MockOrderService};
use needlefern_core::model::{OrderAck, OrderId, ORDER_ACCEPTED_MESSAGE};
use needlefern_core::OrderIntake;
use needlefern_server::api::{self, AppState};
use needlefern_server::config::ServerConfig;
use needlefern_server::lifecycle::StorefrontSystem;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

async fn body_json(resp: axum::http::Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn fast_app() -> Router {
    StorefrontSystem::new(&ServerConfig::without_latency()).router()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::post(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn alice_order() -> Value {
    json!({
        "name": "Alice",
        "email": "a@x.com",
        "payment_method": "card",
        "items": [{"id": 1001, "quantity": 2}]
    })
}

// =============================================================================
// GET /products
// =============================================================================

#[tokio::test]
async fn test_get_products_returns_fixture() {
    let app = fast_app();

    let resp = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["cached"], false);

    let products = json["products"].as_array().unwrap();
    assert_eq!(products.len(), 4);
    for product in products {
        for field in [
            "id",
            "title",
            "price",
            "currency",
            "url",
            "images",
            "quantity",
            "description",
        ] {
            assert!(!product[field].is_null(), "{field} missing in {product}");
        }
    }

    let airplane = products.iter().find(|p| p["id"] == 1002).unwrap();
    assert_eq!(airplane["title"], "Vintage Airplane Cross Stitch Pattern");
    assert_eq!(airplane["price"], "4.20");
    assert_eq!(airplane["images"], json!(["airflot.png"]));
}

#[tokio::test]
async fn test_get_products_preserves_fixture_order() {
    let resp = fast_app()
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let json = body_json(resp).await;
    let ids: Vec<i64> = json["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1001, 1002, 1003, 1004]);
}

#[tokio::test]
async fn test_catalog_fault_is_a_database_error() {
    let mut catalog = MockCatalog::new();
    catalog
        .expect_list()
        .return_err(CatalogError::Store("connection reset".to_string()));
    let app = api::router(AppState::new(
        Arc::new(catalog.client()),
        Arc::new(MockOrderService::new()),
    ));

    let resp = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(resp).await,
        json!({"detail": "Database error: connection reset"})
    );
    catalog.verify();
}

#[tokio::test]
async fn test_stopped_catalog_actor_is_a_database_error() {
    let (actor, client) = catalog::new(fixture::products(), 4, Duration::ZERO);
    drop(actor);
    let app = api::router(AppState::new(
        Arc::new(client),
        Arc::new(OrderIntake::new(Duration::ZERO)),
    ));

    let resp = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(resp).await["detail"], "Database error: Catalog actor closed");
}

#[tokio::test(start_paused = true)]
async fn test_get_products_takes_catalog_latency() {
    let app = StorefrontSystem::new(&ServerConfig::default()).router();

    let started = tokio::time::Instant::now();
    let resp = app
        .oneshot(Request::get("/products").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(500));
}

// =============================================================================
// POST /submit_order
// =============================================================================

#[tokio::test]
async fn test_submit_order_acknowledges() {
    let resp = fast_app()
        .oneshot(post_json("/submit_order", alice_order()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["total_items"], 1);
    assert_eq!(json["message"], ORDER_ACCEPTED_MESSAGE);
    assert!(json["order_id"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_empty_cart_is_rejected() {
    let mut order = alice_order();
    order["items"] = json!([]);

    let resp = fast_app()
        .oneshot(post_json("/submit_order", order))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await, json!({"detail": "Cart is empty."}));
}

#[tokio::test]
async fn test_total_items_counts_every_line() {
    let order = json!({
        "name": "Bob",
        "email": "not-an-email",
        "payment_method": "barter",
        "items": [
            {"id": 1001, "quantity": 1},
            {"id": 1001, "quantity": 1},
            {"id": 424242, "quantity": 0}
        ]
    });

    let resp = fast_app()
        .oneshot(post_json("/submit_order", order))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["total_items"], 3);
}

#[tokio::test]
async fn test_handler_passes_parsed_order_to_service() {
    let mut orders = MockOrderService::new();
    orders
        .expect_submit()
        .return_ok(OrderAck::new(OrderId(1_760_000_000_000), 1));
    let app = api::router(AppState::new(
        Arc::new(MockCatalog::new().client()),
        Arc::new(orders.clone()),
    ));

    let resp = app
        .oneshot(post_json("/submit_order", alice_order()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["order_id"], 1_760_000_000_000_i64);

    let received = orders.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, "Alice");
    assert_eq!(received[0].items[0].quantity, 2);
    orders.verify();
}

#[tokio::test]
async fn test_missing_field_is_unprocessable() {
    let mut order = alice_order();
    order.as_object_mut().unwrap().remove("email");

    let resp = fast_app()
        .oneshot(post_json("/submit_order", order))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let detail = body_json(resp).await["detail"].as_str().unwrap().to_string();
    assert!(detail.contains("email"), "unexpected detail: {detail}");
}

#[tokio::test]
async fn test_wrong_type_is_unprocessable() {
    let mut order = alice_order();
    order["items"] = json!([{"id": "one", "quantity": 2}]);

    let resp = fast_app()
        .oneshot(post_json("/submit_order", order))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_a_bad_request() {
    let req = Request::post("/submit_order")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let resp = fast_app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["detail"].is_string());
}

#[tokio::test]
async fn test_missing_content_type_is_unsupported() {
    let req = Request::post("/submit_order")
        .body(Body::from(alice_order().to_string()))
        .unwrap();

    let resp = fast_app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test(start_paused = true)]
async fn test_submit_order_takes_payment_latency() {
    let app = StorefrontSystem::new(&ServerConfig::default()).router();

    let started = tokio::time::Instant::now();
    let resp = app
        .oneshot(post_json("/submit_order", alice_order()))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_secs(1));
}

// =============================================================================
// Routing & CORS
// =============================================================================

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let resp = fast_app()
        .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wrong_method_is_not_allowed() {
    let resp = fast_app()
        .oneshot(Request::get("/submit_order").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_with_credentials() {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/submit_order")
        .header(header::ORIGIN, "http://shop.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
        .body(Body::empty())
        .unwrap();

    let resp = fast_app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://shop.example");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-custom"
    );
}

#[tokio::test]
async fn test_cors_headers_on_simple_request() {
    let req = Request::get("/products")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let resp = fast_app().oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}
